//! Import and export of single shopping lists.
//!
//! Lists travel as JSON of the same shape as the stored `ShoppingList`, either
//! as text (file, clipboard) or packed into a QR code.

mod json;
mod qr;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::clipboard::ClipboardError;

pub use json::{
    export_filename, export_list, export_list_compact, export_state, import_list,
    read_list_file, validate, write_list_file,
};
pub use qr::{decode_qr_image, decode_qr_luma, decode_qr_rgba, render_qr, write_qr_png};

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("Not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Not a shopping list: {0}")]
    Validation(String),

    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("QR code: {0}")]
    Qr(String),

    #[error("Image: {0}")]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}
