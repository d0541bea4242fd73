//! UI Components for the InstantID Studio application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Brand bar
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadForm`] - Photo selection, prompt, and submission
//! - [`ResultPanel`] - Generated-image display and download

mod footer;
mod header;
mod hero;
mod result_panel;
mod upload_form;

pub use footer::*;
pub use header::*;
pub use hero::*;
pub use result_panel::*;
pub use upload_form::*;
