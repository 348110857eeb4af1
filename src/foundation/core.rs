/// Side length of the square output card, in pixels.
pub const CANVAS_SIZE: u32 = 1024;

/// Width/height pair in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Construct a size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned destination rectangle on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Left edge in canvas pixels.
    pub x: i64,
    /// Top edge in canvas pixels.
    pub y: i64,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Placement {
    /// Construct a placement.
    pub const fn new(x: i64, y: i64, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Size component of the placement.
    pub const fn size(self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Left edge that centers `width` horizontally within `outer` (floor division, may be negative).
pub fn centered_x(outer: u32, width: u32) -> i64 {
    (i64::from(outer) - i64::from(width)).div_euclid(2)
}
