pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

/// Linear blend `src·m + dst·(255−m)` scaled back to 0..=255.
pub(crate) fn lerp_u8(dst: u8, src: u8, m: u8) -> u8 {
    let m = u16::from(m);
    let inv = 255 - m;
    (mul_div255_u16(u16::from(src), m) + mul_div255_u16(u16::from(dst), inv)).min(255) as u8
}
