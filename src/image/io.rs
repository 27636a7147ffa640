//! I/O helpers for RGB images and JSON.
//!
//! - `load_rgb_image`: decode a PNG/JPEG/BMP/etc. into an owned RGB buffer.
//! - `save_rgb_u8`: write an owned RGB buffer to disk (format from extension).
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::ImageRgbU8;
use crate::error::HogError;
use image::{ImageBuffer, Rgb};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned 8-bit RGB buffer with borrowed view conversion.
#[derive(Clone, Debug)]
pub struct RgbImageU8 {
    width: usize,
    height: usize,
    data: Vec<[u8; 3]>,
}

impl RgbImageU8 {
    /// Construct an owned buffer from packed `[r, g, b]` pixels.
    pub fn new(width: usize, height: usize, data: Vec<[u8; 3]>) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            width,
            height,
            data,
        }
    }

    /// Buffer where every pixel has the same color.
    pub fn filled(width: usize, height: usize, color: [u8; 3]) -> Self {
        Self::new(width, height, vec![color; width * height])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `ImageRgbU8` view
    pub fn as_view(&self) -> ImageRgbU8<'_> {
        ImageRgbU8::packed(self.width, self.height, &self.data)
    }
}

/// Load an image from disk and convert to 8-bit RGB.
///
/// Any decode failure is returned as [`HogError::ImageDecode`]; there is no retry.
pub fn load_rgb_image(path: &Path) -> Result<RgbImageU8, HogError> {
    let img = image::open(path)
        .map_err(|source| HogError::ImageDecode {
            path: path.to_path_buf(),
            source,
        })?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img
        .into_raw()
        .chunks_exact(3)
        .map(|px| [px[0], px[1], px[2]])
        .collect();
    Ok(RgbImageU8::new(width, height, data))
}

/// Save an RGB buffer; the format follows the file extension.
pub fn save_rgb_u8(buffer: &RgbImageU8, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let raw: Vec<u8> = buffer.data.iter().flatten().copied().collect();
    let image: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_raw(buffer.width as u32, buffer.height as u32, raw)
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
