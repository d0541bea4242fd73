//! Object-URL lifetime management for local image previews.
//!
//! The browser keeps a selected file's bytes reachable for as long as an
//! object URL registered for it exists, so every registration must be
//! revoked exactly once or repeated reselects grow without bound.

use web_sys::{Blob, File, Url};

/// A revocable object URL for rendering a file before it is uploaded.
///
/// Each value owns exactly one registration and revokes it on drop, so
/// replacing a preview held in a signal releases the superseded handle
/// deterministically at the moment of replacement.
#[derive(Debug)]
pub struct PreviewUrl {
    url: String,
}

impl PreviewUrl {
    /// Register a new object URL for `blob`.
    pub fn new(blob: &Blob) -> Option<Self> {
        match Url::create_object_url_with_blob(blob) {
            Ok(url) => Some(PreviewUrl { url }),
            Err(e) => {
                log::error!("Failed to create object URL: {:?}", e);
                None
            }
        }
    }

    /// The registered URL, valid until this value is dropped.
    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for PreviewUrl {
    fn drop(&mut self) {
        if let Err(e) = Url::revoke_object_url(&self.url) {
            log::warn!("Failed to revoke object URL {}: {:?}", self.url, e);
        }
    }
}

/// One user-selected image and its live preview.
///
/// The slot is the sole owner of the preview registration. Dropping the
/// slot - cleared selection, replaced file, component teardown - revokes it.
#[derive(Debug)]
pub struct UploadSlot {
    file: File,
    preview: Option<PreviewUrl>,
}

impl UploadSlot {
    /// Build a slot from a file-picker selection.
    pub fn new(file: File) -> Self {
        let preview = PreviewUrl::new(&file);
        UploadSlot { file, preview }
    }

    pub fn file(&self) -> &File {
        &self.file
    }

    /// Object URL for the `<img>` preview, when registration succeeded.
    pub fn preview_url(&self) -> Option<&str> {
        self.preview.as_ref().map(|p| p.as_str())
    }
}
