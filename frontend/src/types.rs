//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Submission Types** - request shapes and the submission state machine
//! - **API Types** - wire contract of the personalize endpoint
//! - **Error Types** - frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;
use web_sys::File;

// =============================================================================
// Submission Types
// =============================================================================

/// Where the active form is in its submission cycle.
///
/// Exactly one submission can be in flight at a time; the busy flag derived
/// from this phase disables the submit affordance until a terminal phase is
/// reached.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    /// Nothing submitted yet, or the form was reset by a new selection.
    #[default]
    Idle,
    /// Local validation of the current selection.
    Validating,
    /// The POST has been issued and its response is pending.
    InFlight,
    /// A result URL is available.
    Succeeded,
    /// Validation or the request itself failed.
    Failed,
}

impl SubmissionPhase {
    /// True strictly between submission start and the terminal transition.
    pub fn is_busy(&self) -> bool {
        matches!(self, SubmissionPhase::Validating | SubmissionPhase::InFlight)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionPhase::Succeeded | SubmissionPhase::Failed)
    }
}

/// Which request shape the form is in.
///
/// The two shapes are mutually exclusive submission modes, not independent
/// options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionMode {
    /// A free second image guides pose / style.
    #[default]
    Reference,
    /// An enumerated template drives the generation.
    Template,
}

/// Enumerated personalization template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Template {
    Classic,
    Storybook,
    Portrait,
}

impl Template {
    pub const ALL: [Template; 3] = [Template::Classic, Template::Storybook, Template::Portrait];

    /// Wire identifier sent as the `template_id` form field.
    pub fn id(&self) -> &'static str {
        match self {
            Template::Classic => "template_1",
            Template::Storybook => "template_2",
            Template::Portrait => "template_3",
        }
    }

    /// Display label for the template selector.
    pub fn label(&self) -> &'static str {
        match self {
            Template::Classic => "Classic",
            Template::Storybook => "Storybook",
            Template::Portrait => "Portrait",
        }
    }

    /// Parse a wire identifier back into a template.
    pub fn from_id(id: &str) -> Option<Template> {
        Template::ALL.into_iter().find(|t| t.id() == id)
    }
}

/// One submission to the personalization endpoint.
///
/// Constructed fresh per attempt from the current selection; never stored.
#[derive(Clone, Debug)]
pub enum PersonalizationRequest {
    /// Main photo plus an optional personalization image. When the second
    /// image is absent the service reuses the main one.
    Freeform {
        main: File,
        optional: Option<File>,
        prompt: String,
    },
    /// Main photo styled by an enumerated template.
    Templated {
        main: File,
        template: Template,
        prompt: String,
    },
}

impl PersonalizationRequest {
    /// Build a freeform request, failing when the main image is missing.
    pub fn freeform(
        main: Option<File>,
        optional: Option<File>,
        prompt: String,
    ) -> Result<Self, SubmitError> {
        let main = main.ok_or(SubmitError::MissingMainImage)?;
        Ok(PersonalizationRequest::Freeform {
            main,
            optional,
            prompt,
        })
    }

    /// Build a template-driven request, failing when the main image is
    /// missing.
    pub fn templated(
        main: Option<File>,
        template: Template,
        prompt: String,
    ) -> Result<Self, SubmitError> {
        let main = main.ok_or(SubmitError::MissingMainImage)?;
        Ok(PersonalizationRequest::Templated {
            main,
            template,
            prompt,
        })
    }
}

// =============================================================================
// API Types
// =============================================================================

/// Success response from the personalize endpoint.
///
/// `result_url` is either an absolute URL or a root-relative path on the
/// service host; see [`crate::services::resolve_result_url`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub result_url: String,
}

/// Error response body.
///
/// `detail` is optional, and an unparseable body is treated the same as an
/// absent one.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend submission errors.
///
/// All three variants are handled at the submission boundary and converted
/// into the user-visible message via [`fmt::Display`]; nothing structured is
/// exposed past it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// The required main image was not selected. Never reaches the network.
    MissingMainImage,
    /// The service answered with a non-success status.
    Rejected { detail: Option<String> },
    /// The request never produced an interpretable response.
    Transport { detail: Option<String> },
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::MissingMainImage => {
                write!(f, "Please upload the main image first.")
            }
            SubmitError::Rejected { detail } => {
                write!(f, "{}", detail.as_deref().unwrap_or("Something went wrong"))
            }
            SubmitError::Transport { detail } => {
                write!(f, "{}", detail.as_deref().unwrap_or("Failed to generate image."))
            }
        }
    }
}

impl std::error::Error for SubmitError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_response_deserialization() {
        let json = r#"{"result_url": "/generated/abc.png"}"#;

        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.result_url, "/generated/abc.png");
    }

    #[test]
    fn test_error_body_with_detail() {
        let json = r#"{"detail": "bad image"}"#;

        let body: ErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.detail.as_deref(), Some("bad image"));
    }

    #[test]
    fn test_error_body_without_detail() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.detail.is_none());
    }

    #[test]
    fn test_missing_main_image_message() {
        assert_eq!(
            SubmitError::MissingMainImage.to_string(),
            "Please upload the main image first."
        );
    }

    #[test]
    fn test_rejected_uses_detail_when_present() {
        let err = SubmitError::Rejected {
            detail: Some("bad image".to_string()),
        };
        assert_eq!(err.to_string(), "bad image");
    }

    #[test]
    fn test_rejected_falls_back_to_generic_message() {
        let err = SubmitError::Rejected { detail: None };
        assert_eq!(err.to_string(), "Something went wrong");
    }

    #[test]
    fn test_transport_falls_back_to_generic_message() {
        let err = SubmitError::Transport { detail: None };
        assert_eq!(err.to_string(), "Failed to generate image.");

        let err = SubmitError::Transport {
            detail: Some("connection refused".to_string()),
        };
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn test_busy_only_between_start_and_terminal() {
        assert!(!SubmissionPhase::Idle.is_busy());
        assert!(SubmissionPhase::Validating.is_busy());
        assert!(SubmissionPhase::InFlight.is_busy());
        assert!(!SubmissionPhase::Succeeded.is_busy());
        assert!(!SubmissionPhase::Failed.is_busy());
    }

    #[test]
    fn test_terminal_phases() {
        assert!(SubmissionPhase::Succeeded.is_terminal());
        assert!(SubmissionPhase::Failed.is_terminal());
        assert!(!SubmissionPhase::InFlight.is_terminal());
    }

    #[test]
    fn test_template_wire_identifiers() {
        assert_eq!(Template::Classic.id(), "template_1");
        assert_eq!(Template::Storybook.id(), "template_2");
        assert_eq!(Template::Portrait.id(), "template_3");

        for template in Template::ALL {
            assert_eq!(Template::from_id(template.id()), Some(template));
        }
        assert_eq!(Template::from_id("template_99"), None);
    }

    #[test]
    fn test_freeform_requires_main_image() {
        let result = PersonalizationRequest::freeform(None, None, "portrait".to_string());
        assert_eq!(result.unwrap_err(), SubmitError::MissingMainImage);
    }

    #[test]
    fn test_templated_requires_main_image() {
        let result =
            PersonalizationRequest::templated(None, Template::Classic, "portrait".to_string());
        assert_eq!(result.unwrap_err(), SubmitError::MissingMainImage);
    }
}
