//! Backend communication and preview-lifetime services.
//!
//! # Services
//!
//! - [`personalize`] - multipart submission to the personalization endpoint
//! - [`preview`] - object-URL lifetime management for local previews

pub mod personalize;
pub mod preview;

pub use personalize::*;
pub use preview::*;
