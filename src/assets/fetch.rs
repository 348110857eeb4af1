use image::RgbaImage;

use crate::assets::decode::{decode_image, resize_exact};
use crate::foundation::core::Size;
use crate::foundation::error::FetchError;
use crate::net::http::HttpClient;

/// Source of encoded image bytes, addressed by URL.
pub trait ImageSource: Send + Sync {
    /// Fetch the raw body at `url`. Exactly one attempt.
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

impl ImageSource for HttpClient {
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.get_bytes(url)
    }
}

/// Fetch, decode to RGBA8 and optionally stretch one image.
pub fn fetch_image(
    source: &dyn ImageSource,
    url: &str,
    target: Option<Size>,
) -> Result<RgbaImage, FetchError> {
    let bytes = source.fetch_bytes(url)?;
    let img = decode_image(&bytes)?;
    Ok(match target {
        Some(size) => resize_exact(img, size),
        None => img,
    })
}
