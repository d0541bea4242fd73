//! HTTP service for the image-personalization endpoint.
//!
//! Assembles the multipart payload, issues the POST, and interprets the
//! response into either a resolved result URL or a [`SubmitError`].

use gloo_net::http::Request;
use web_sys::FormData;

use crate::types::{ErrorBody, GenerateResponse, PersonalizationRequest, SubmitError};

/// Multipart field names, as the service expects them.
const FIELD_IMAGE_MAIN: &str = "image_main";
const FIELD_IMAGE_OPTIONAL: &str = "image_optional";
const FIELD_IMAGE: &str = "image";
const FIELD_TEMPLATE_ID: &str = "template_id";
const FIELD_PROMPT: &str = "prompt";

fn transport(detail: String) -> SubmitError {
    SubmitError::Transport {
        detail: Some(detail),
    }
}

/// Assemble the multipart payload for a request.
///
/// The freeform shape omits `image_optional` entirely when no
/// personalization image was chosen; the service then reuses the main image.
fn to_form_data(request: &PersonalizationRequest) -> Result<FormData, SubmitError> {
    let form = FormData::new()
        .map_err(|e| transport(format!("Failed to create form data: {:?}", e)))?;

    match request {
        PersonalizationRequest::Freeform {
            main,
            optional,
            prompt,
        } => {
            form.append_with_blob(FIELD_IMAGE_MAIN, main)
                .map_err(|e| transport(format!("Failed to append main image: {:?}", e)))?;
            if let Some(optional) = optional {
                form.append_with_blob(FIELD_IMAGE_OPTIONAL, optional)
                    .map_err(|e| transport(format!("Failed to append optional image: {:?}", e)))?;
            }
            form.append_with_str(FIELD_PROMPT, prompt)
                .map_err(|e| transport(format!("Failed to append prompt: {:?}", e)))?;
        }
        PersonalizationRequest::Templated {
            main,
            template,
            prompt,
        } => {
            form.append_with_blob(FIELD_IMAGE, main)
                .map_err(|e| transport(format!("Failed to append main image: {:?}", e)))?;
            form.append_with_str(FIELD_TEMPLATE_ID, template.id())
                .map_err(|e| transport(format!("Failed to append template id: {:?}", e)))?;
            form.append_with_str(FIELD_PROMPT, prompt)
                .map_err(|e| transport(format!("Failed to append prompt: {:?}", e)))?;
        }
    }

    Ok(form)
}

/// Submit a personalization request and return the resolved result URL.
///
/// A non-success status becomes [`SubmitError::Rejected`] carrying whatever
/// `detail` the body holds; a body that fails to parse is tolerated and the
/// generic message applies. A request that never completes becomes
/// [`SubmitError::Transport`]. No retries are performed.
pub async fn personalize(
    request: &PersonalizationRequest,
    base_url: &str,
) -> Result<String, SubmitError> {
    let form = to_form_data(request)?;

    let url = format!("{}/personalize", base_url);
    let response = Request::post(&url)
        .body(form)
        .map_err(|e| transport(format!("Failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| transport(e.to_string()))?;

    if !response.ok() {
        log::error!("Personalize endpoint answered {}", response.status());
        let body = response.json::<ErrorBody>().await.unwrap_or_default();
        return Err(SubmitError::Rejected { detail: body.detail });
    }

    let body = response
        .json::<GenerateResponse>()
        .await
        .map_err(|e| transport(format!("Failed to parse response: {}", e)))?;

    Ok(resolve_result_url(&body.result_url, base_url))
}

/// Resolve the service's result reference against the service base address.
///
/// The service answers with either an absolute URL or a root-relative path
/// on its own host.
pub fn resolve_result_url(raw: &str, base_url: &str) -> String {
    if raw.starts_with("http") {
        raw.to_string()
    } else {
        format!("{}{}", base_url, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_url_passes_through() {
        let raw = "http://cdn.example.com/generated/abc.png";
        assert_eq!(resolve_result_url(raw, "http://localhost:8000"), raw);

        let raw = "https://cdn.example.com/generated/abc.png";
        assert_eq!(resolve_result_url(raw, "http://localhost:8000"), raw);
    }

    #[test]
    fn test_relative_path_is_joined_to_base() {
        assert_eq!(
            resolve_result_url("/generated/abc.png", "http://localhost:8000"),
            "http://localhost:8000/generated/abc.png"
        );
    }

    #[test]
    fn test_resolution_matches_response_body() {
        let json = r#"{"result_url": "/generated/abc.png"}"#;
        let response: crate::types::GenerateResponse = serde_json::from_str(json).unwrap();

        assert_eq!(
            resolve_result_url(&response.result_url, "http://localhost:8000"),
            "http://localhost:8000/generated/abc.png"
        );
    }
}
