use image::imageops::{self, FilterType};
use image::{Rgba, Rgba32FImage, RgbaImage};

use crate::foundation::core::Size;
use crate::foundation::error::FetchError;

/// Decode an encoded image (any format the `image` crate reads) into straight-alpha RGBA8.
///
/// Sources without an alpha channel come out fully opaque.
pub fn decode_image(bytes: &[u8]) -> Result<RgbaImage, FetchError> {
    let dyn_img = image::load_from_memory(bytes).map_err(|e| FetchError::Decode(e.to_string()))?;
    Ok(dyn_img.to_rgba8())
}

/// Stretch `img` to exactly `size`, ignoring aspect ratio. Returns `img` untouched if it already
/// has that size.
///
/// Images with any non-opaque pixel are filtered in premultiplied space so transparent texels do
/// not bleed their color into the edges.
pub fn resize_exact(img: RgbaImage, size: Size) -> RgbaImage {
    if img.dimensions() == (size.width, size.height) {
        return img;
    }
    if img.pixels().all(|p| p.0[3] == u8::MAX) {
        return imageops::resize(&img, size.width, size.height, FilterType::CatmullRom);
    }
    let premul = premultiply_to_f32(&img);
    let resized = imageops::resize(&premul, size.width, size.height, FilterType::CatmullRom);
    unpremultiply_to_rgba8(&resized)
}

fn premultiply_to_f32(img: &RgbaImage) -> Rgba32FImage {
    Rgba32FImage::from_fn(img.width(), img.height(), |x, y| {
        let [r, g, b, a] = img.get_pixel(x, y).0;
        let a = f32::from(a) / 255.0;
        Rgba([
            f32::from(r) / 255.0 * a,
            f32::from(g) / 255.0 * a,
            f32::from(b) / 255.0 * a,
            a,
        ])
    })
}

fn unpremultiply_to_rgba8(img: &Rgba32FImage) -> RgbaImage {
    RgbaImage::from_fn(img.width(), img.height(), |x, y| {
        let [r, g, b, a] = img.get_pixel(x, y).0;
        let a = a.clamp(0.0, 1.0);
        let alpha = to_u8(a);
        if alpha == 0 {
            return Rgba([0, 0, 0, 0]);
        }
        Rgba([to_u8(r / a), to_u8(g / a), to_u8(b / a), alpha])
    })
}

fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
