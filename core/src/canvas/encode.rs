use std::io::Cursor;

use base64::{engine::general_purpose, Engine as _};
use image::{GrayImage, ImageFormat};

const PNG_PREFIX: &str = "data:image/png;base64,";
const IMAGE_PREFIX: &str = "data:image";
const BASE64_MARKER: &str = ";base64,";

/// Encodes the raster as a self-describing `data:image/png;base64,` URI.
pub fn png_data_uri(image: &GrayImage) -> Result<String, image::ImageError> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(format!(
        "{PNG_PREFIX}{}",
        general_purpose::STANDARD.encode(&bytes)
    ))
}

/// Extracts and verifies the image bytes of a `data:image/...;base64,` URI.
///
/// Returns `None` for anything that cannot be displayed: a missing or
/// foreign prefix, broken base64, or bytes no image decoder accepts. The
/// byte-level decode is the second, defensive check behind the prefix test.
pub fn decode_image_data_uri(value: &str) -> Option<Vec<u8>> {
    if !value.starts_with(IMAGE_PREFIX) {
        return None;
    }
    let (_, payload) = value.split_once(BASE64_MARKER)?;
    let bytes = general_purpose::STANDARD.decode(payload).ok()?;
    image::load_from_memory(&bytes).ok()?;
    Some(bytes)
}
