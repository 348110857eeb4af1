use std::io::Cursor;

use crate::foundation::error::{CardError, CardResult};
use crate::render::compose::Canvas;

/// Serialize the canvas as a PNG byte stream (RGBA8, encoder defaults).
pub fn encode_png(canvas: &Canvas) -> CardResult<Vec<u8>> {
    let mut buf = Vec::new();
    canvas
        .pixels()
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| CardError::encode(e.to_string()))?;
    Ok(buf)
}
