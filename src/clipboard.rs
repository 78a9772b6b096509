//! Clipboard access for list import/export.

use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(#[source] arboard::Error),

    #[error("Failed to set clipboard text: {0}")]
    SetText(#[source] arboard::Error),

    #[error("Clipboard has no text: {0}")]
    GetText(#[source] arboard::Error),

    #[error("Clipboard has no image: {0}")]
    GetImage(#[source] arboard::Error),
}

/// RGBA pixels read from the clipboard.
#[derive(Debug, Clone)]
pub struct ClipboardImage {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

/// Handler for clipboard operations.
pub struct ClipboardHandler {
    clipboard: Clipboard,
}

impl ClipboardHandler {
    /// Create a new clipboard handler.
    pub fn new() -> Result<Self, ClipboardError> {
        let clipboard = Clipboard::new().map_err(ClipboardError::Unavailable)?;
        Ok(Self { clipboard })
    }

    /// Write text to the system clipboard.
    pub fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.clipboard
            .set_text(text.to_string())
            .map_err(ClipboardError::SetText)
    }

    pub fn get_text(&mut self) -> Result<String, ClipboardError> {
        self.clipboard.get_text().map_err(ClipboardError::GetText)
    }

    /// Read an image (e.g. a screenshot of a QR code).
    pub fn get_image(&mut self) -> Result<ClipboardImage, ClipboardError> {
        let image = self.clipboard.get_image().map_err(ClipboardError::GetImage)?;
        Ok(ClipboardImage {
            width: image.width,
            height: image.height,
            rgba: image.bytes.into_owned(),
        })
    }
}
