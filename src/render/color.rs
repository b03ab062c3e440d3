// KujiraPixel
// copyright kujira project 2026

//! The packed-color blending primitive that every drawing component builds on.

/// A 4-channel color packed into one 32-bit value, channel order (high to low
/// byte) red, green, blue, alpha. Alpha is always the low byte; a value with
/// alpha 0 is fully transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba(pub u32);

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba(0);
    pub const WHITE: Rgba = Rgba(0xffff_ffff);
    pub const BLACK: Rgba = Rgba(0x0000_00ff);

    pub const fn from_channels(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba((r as u32) << 24 | (g as u32) << 16 | (b as u32) << 8 | a as u32)
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn a(self) -> u8 {
        self.0 as u8
    }
}

/// Alpha-composites `src` onto `dest` in place.
///
/// Linear blend per channel:
///
/// C = A + t(B - A)
///   = (1 - t)A + tB
///
/// where t is the source alpha mapped to [0, 1]: the result keeps a portion
/// of the destination equal to whatever portion of the source was given up.
///
/// The resulting alpha is always the source's alpha. Opacity does not
/// accumulate; this is a painter's model, not true alpha compositing.
pub fn blend(src: Rgba, dest: &mut Rgba) {
    let t = src.a() as f32 / 255.0;
    let r = ((1.0 - t) * dest.r() as f32 + t * src.r() as f32).round() as u32;
    let g = ((1.0 - t) * dest.g() as f32 + t * src.g() as f32).round() as u32;
    let b = ((1.0 - t) * dest.b() as f32 + t * src.b() as f32).round() as u32;
    *dest = Rgba(r << 24 | g << 16 | b << 8 | src.a() as u32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_accessors() {
        let c = Rgba::from_channels(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.0, 0x1234_5678);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (0x12, 0x34, 0x56, 0x78));
    }

    #[test]
    fn transparent_source_keeps_dest_channels() {
        let mut dest = Rgba::from_channels(10, 20, 30, 0);
        blend(Rgba::from_channels(200, 200, 200, 0), &mut dest);
        assert_eq!(dest, Rgba::from_channels(10, 20, 30, 0));
    }

    #[test]
    fn opaque_source_replaces_dest() {
        let mut dest = Rgba::from_channels(10, 20, 30, 255);
        let src = Rgba::from_channels(200, 100, 50, 255);
        blend(src, &mut dest);
        assert_eq!(dest, src);
    }

    #[test]
    fn result_alpha_is_source_alpha() {
        let mut dest = Rgba::from_channels(0, 0, 0, 255);
        blend(Rgba::from_channels(255, 255, 255, 128), &mut dest);
        assert_eq!(dest.a(), 128);
        // 0.502 of the way from 0 to 255, rounded
        assert_eq!(dest.r(), 128);
    }
}
