use image::{DynamicImage, GrayImage, RgbaImage};
use qrcode::render::unicode;
use qrcode::{Color, QrCode};
use std::path::Path;

use crate::transfer::TransferError;

/// Pixels per QR module in exported PNGs.
const PNG_MODULE_PX: u32 = 8;
/// Light border around the code, in modules.
const QUIET_ZONE: u32 = 4;

/// Render `text` as a QR code made of Unicode half blocks (two modules per
/// character cell vertically). Colors are inverted for dark terminals.
pub fn render_qr(text: &str) -> Result<String, TransferError> {
    let code = encode(text)?;
    Ok(code
        .render::<unicode::Dense1x2>()
        .dark_color(unicode::Dense1x2::Light)
        .light_color(unicode::Dense1x2::Dark)
        .build())
}

/// Save `text` as a QR code PNG at `path`.
pub fn write_qr_png(text: &str, path: &Path) -> Result<(), TransferError> {
    let code = encode(text)?;
    let modules = code.width() as u32;
    let colors = code.to_colors();
    let side = (modules + 2 * QUIET_ZONE) * PNG_MODULE_PX;

    let image = GrayImage::from_fn(side, side, |x, y| {
        let mx = (x / PNG_MODULE_PX).checked_sub(QUIET_ZONE);
        let my = (y / PNG_MODULE_PX).checked_sub(QUIET_ZONE);
        let dark = match (mx, my) {
            (Some(mx), Some(my)) if mx < modules && my < modules => {
                colors[(my * modules + mx) as usize] == Color::Dark
            }
            _ => false,
        };
        image::Luma([if dark { 0 } else { 255 }])
    });
    image.save(path)?;
    Ok(())
}

/// Decode the first QR code found in a grayscale buffer (row-major, one byte
/// per pixel).
pub fn decode_qr_luma(width: usize, height: usize, pixels: &[u8]) -> Result<String, TransferError> {
    if pixels.len() < width * height {
        return Err(TransferError::Qr(format!(
            "expected {} pixels, got {}",
            width * height,
            pixels.len()
        )));
    }
    let mut prepared =
        rqrr::PreparedImage::prepare_from_greyscale(width, height, |x, y| pixels[y * width + x]);
    let grids = prepared.detect_grids();
    let grid = grids
        .first()
        .ok_or_else(|| TransferError::Qr("no QR code found".to_string()))?;
    let (_, content) = grid
        .decode()
        .map_err(|e| TransferError::Qr(e.to_string()))?;
    Ok(content)
}

/// Decode a QR code from an image file (PNG or JPEG).
pub fn decode_qr_image(path: &Path) -> Result<String, TransferError> {
    let luma = image::open(path)?.to_luma8();
    let (width, height) = luma.dimensions();
    decode_qr_luma(width as usize, height as usize, luma.as_raw())
}

/// Decode a QR code from RGBA pixels, as read from the clipboard.
pub fn decode_qr_rgba(width: usize, height: usize, rgba: Vec<u8>) -> Result<String, TransferError> {
    let image = RgbaImage::from_raw(width as u32, height as u32, rgba)
        .ok_or_else(|| TransferError::Qr("clipboard image has an unexpected size".to_string()))?;
    let luma = DynamicImage::ImageRgba8(image).to_luma8();
    decode_qr_luma(width, height, luma.as_raw())
}

fn encode(text: &str) -> Result<QrCode, TransferError> {
    QrCode::new(text.as_bytes()).map_err(|e| TransferError::Qr(e.to_string()))
}
