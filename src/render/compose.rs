use image::RgbaImage;

use crate::assets::decode::resize_exact;
use crate::foundation::core::{CANVAS_SIZE, Placement, Size, centered_x};
use crate::foundation::math::lerp_u8;
use crate::resolve::slots::SlotSpec;

/// Horizontal anchoring of a layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerX {
    /// Fixed left edge.
    At(i64),
    /// Centered on the canvas: `x = (canvas_width - layer_width) / 2`.
    Centered,
}

/// Where and how large one layer is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayerSpec {
    /// Short label used in logs.
    pub name: &'static str,
    /// Horizontal anchoring.
    pub x: LayerX,
    /// Top edge.
    pub y: i64,
    /// Size the image is stretched to before pasting.
    pub size: Size,
}

impl LayerSpec {
    /// Layer at a fixed placement.
    pub const fn fixed(name: &'static str, placement: Placement) -> Self {
        Self {
            name,
            x: LayerX::At(placement.x),
            y: placement.y,
            size: placement.size(),
        }
    }

    /// Layer for an outfit slot.
    pub const fn for_slot(slot: &SlotSpec) -> Self {
        Self::fixed(slot.name, slot.placement)
    }

    /// Resolve the destination rectangle on a canvas of `canvas_width`.
    pub fn placement(&self, canvas_width: u32) -> Placement {
        let x = match self.x {
            LayerX::At(x) => x,
            LayerX::Centered => centered_x(canvas_width, self.size.width),
        };
        Placement::new(x, self.y, self.size.width, self.size.height)
    }
}

/// Pet icon, pasted after the outfit.
pub const PET_LAYER: LayerSpec = LayerSpec::fixed("pet", Placement::new(700, 700, 140, 170));

/// Character portrait, horizontally centered.
pub const AVATAR_LAYER: LayerSpec = LayerSpec {
    name: "avatar",
    x: LayerX::Centered,
    y: 145,
    size: Size::new(650, 780),
};

/// Weapon icon, pasted last.
pub const WEAPON_LAYER: LayerSpec =
    LayerSpec::fixed("weapon", Placement::new(670, 564, 330, 200));

/// A layer with its image, or `None` when the image could not be obtained.
#[derive(Clone, Debug)]
pub struct Layer {
    /// Geometry.
    pub spec: LayerSpec,
    /// Pixels to paste.
    pub image: Option<RgbaImage>,
}

impl Layer {
    /// Pair a spec with an optional image.
    pub fn new(spec: LayerSpec, image: Option<RgbaImage>) -> Self {
        Self { spec, image }
    }
}

/// Mutable RGBA8 drawing surface, seeded from the background image.
#[derive(Clone, Debug)]
pub struct Canvas {
    pixels: RgbaImage,
}

impl Canvas {
    /// Canvas of the fixed card size built from `background` (stretched if needed).
    pub fn from_background(background: RgbaImage) -> Self {
        Self {
            pixels: resize_exact(background, Size::new(CANVAS_SIZE, CANVAS_SIZE)),
        }
    }

    /// Canvas wrapping `pixels` as-is.
    pub fn from_pixels(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Borrow the pixels.
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Consume the canvas and return its pixels.
    pub fn into_pixels(self) -> RgbaImage {
        self.pixels
    }

    /// Paste `src` with its top-left corner at `(x, y)`, using its own alpha as mask.
    ///
    /// Every channel, alpha included, becomes `src·a + dst·(1−a)`. Parts outside the canvas are
    /// clipped.
    pub fn paste_masked(&mut self, src: &RgbaImage, x: i64, y: i64) {
        let (cw, ch) = (i64::from(self.width()), i64::from(self.height()));
        let (sw, sh) = (i64::from(src.width()), i64::from(src.height()));

        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + sw).min(cw);
        let y1 = (y + sh).min(ch);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        for dy in y0..y1 {
            for dx in x0..x1 {
                let s = src.get_pixel((dx - x) as u32, (dy - y) as u32).0;
                let m = s[3];
                if m == 0 {
                    continue;
                }
                let d = &mut self.pixels.get_pixel_mut(dx as u32, dy as u32).0;
                if m == 255 {
                    *d = s;
                    continue;
                }
                for (dc, sc) in d.iter_mut().zip(s) {
                    *dc = lerp_u8(*dc, sc, m);
                }
            }
        }
    }

    /// Stretch `image` to the layer size and paste it at the layer position.
    pub fn place(&mut self, spec: &LayerSpec, image: RgbaImage) {
        let at = spec.placement(self.width());
        let sized = resize_exact(image, spec.size);
        self.paste_masked(&sized, at.x, at.y);
    }
}

/// Counters for one composite run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompositeStats {
    /// Layers drawn.
    pub pasted: u32,
    /// Layers without an image.
    pub skipped: u32,
}

/// Paste `layers` onto `canvas` in iteration order; layers without an image are skipped and
/// later layers keep their fixed positions.
pub fn composite(canvas: &mut Canvas, layers: impl IntoIterator<Item = Layer>) -> CompositeStats {
    let mut stats = CompositeStats::default();
    for layer in layers {
        match layer.image {
            Some(image) => {
                tracing::trace!(layer = layer.spec.name, "paste");
                canvas.place(&layer.spec, image);
                stats.pasted += 1;
            }
            None => {
                tracing::trace!(layer = layer.spec.name, "skip");
                stats.skipped += 1;
            }
        }
    }
    stats
}

#[cfg(test)]
#[path = "../../tests/unit/render/compose.rs"]
mod tests;
