#![allow(dead_code)]

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use outfit_card::{AccountSnapshot, AccountSource, Endpoints, FetchError, ImageSource};

pub const BASE: &str = "http://upstream.test";
pub const BG_RGBA: [u8; 4] = [20, 30, 40, 255];

pub fn endpoints() -> Endpoints {
    Endpoints::with_base(BASE)
}

pub fn solid_png(w: u32, h: u32, rgba: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba(rgba));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

/// Serves canned bodies by URL and records every request.
#[derive(Default)]
pub struct MapImages {
    bodies: HashMap<String, Vec<u8>>,
    calls: Mutex<Vec<String>>,
}

impl MapImages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: impl Into<String>, body: Vec<u8>) -> Self {
        self.bodies.insert(url.into(), body);
        self
    }

    pub fn without(mut self, url: &str) -> Self {
        self.bodies.remove(url);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl ImageSource for MapImages {
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());
        self.bodies.get(url).cloned().ok_or(FetchError::Status(404))
    }
}

/// Returns one fixed answer and counts lookups.
pub struct FixedAccount {
    answer: Result<AccountSnapshot, FetchError>,
    calls: AtomicUsize,
}

impl FixedAccount {
    pub fn ok(snapshot: AccountSnapshot) -> Self {
        Self {
            answer: Ok(snapshot),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(err: FetchError) -> Self {
        Self {
            answer: Err(err),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AccountSource for FixedAccount {
    fn fetch(&self, _uid: &str, _region: &str) -> Result<AccountSnapshot, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.clone()
    }
}

pub fn sample_snapshot() -> AccountSnapshot {
    AccountSnapshot {
        equipped_outfit_ids: vec![211000001, 214000001, 203000001, 204000001, 205000001],
        equipped_skill_ids: vec![105, 206, 306],
        pet_id: Some(1300000071),
        equipped_weapon_ids: vec![907190001],
    }
}

/// Opaque icons for every URL `sample_snapshot` needs, each in its own color.
pub fn sample_images() -> MapImages {
    let e = endpoints();
    MapImages::new()
        .with(e.background.clone(), solid_png(8, 8, BG_RGBA))
        .with(e.outfit_icon_url("211000001"), solid_png(32, 32, [200, 0, 0, 255]))
        .with(e.outfit_icon_url("214000001"), solid_png(30, 50, [0, 200, 0, 255]))
        .with(e.outfit_icon_url("208000000"), solid_png(32, 32, [0, 0, 200, 255]))
        .with(e.outfit_icon_url("203000001"), solid_png(32, 32, [200, 200, 0, 255]))
        .with(e.outfit_icon_url("204000001"), solid_png(32, 32, [0, 200, 200, 255]))
        .with(e.outfit_icon_url("205000001"), solid_png(32, 32, [200, 0, 200, 255]))
        .with(e.outfit_icon_url("203000000"), solid_png(32, 32, [90, 90, 90, 255]))
        .with(e.pet_icon_url(1300000071), solid_png(16, 16, [1, 2, 3, 255]))
        .with(e.avatar_url(206), solid_png(13, 15, [4, 5, 6, 255]))
        .with(e.weapon_icon_url(907190001), solid_png(33, 20, [7, 8, 9, 255]))
}
