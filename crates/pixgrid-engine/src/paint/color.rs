use bytemuck::{Pod, Zeroable};

/// Packed 24-bit color, `0xRRGGBB`. Bits above 23 are ignored.
pub type PackedRgb = u32;

/// Tolerance used when deciding whether a cell color actually changed.
pub const COLOR_EPSILON: f32 = 1e-5;

/// Normalized RGB color, one `f32` per channel in `[0, 1]`.
///
/// Layout matches the `Float32x3` color attribute of the grid pipeline, so a
/// `&[Rgb]` can be uploaded with `bytemuck::cast_slice`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    /// Unpacks `0xRRGGBB` into normalized channels (`byte / 255`).
    #[inline]
    pub fn decode(packed: PackedRgb) -> Self {
        Self {
            r: ((packed >> 16) & 0xFF) as f32 / 255.0,
            g: ((packed >> 8) & 0xFF) as f32 / 255.0,
            b: (packed & 0xFF) as f32 / 255.0,
        }
    }

    /// Packs normalized channels back into `0xRRGGBB`.
    ///
    /// Each channel is scaled by 255 and truncated, so the conversion is lossy:
    /// only colors produced by [`decode`](Self::decode) survive bit-exact.
    /// Channels are not range checked.
    #[inline]
    pub fn encode(self) -> PackedRgb {
        let r = (self.r * 255.0) as u32;
        let g = (self.g * 255.0) as u32;
        let b = (self.b * 255.0) as u32;
        (r << 16) | (g << 8) | b
    }

    /// Per-channel comparison within [`COLOR_EPSILON`].
    #[inline]
    pub fn approx_eq(self, other: Rgb) -> bool {
        (self.r - other.r).abs() <= COLOR_EPSILON
            && (self.g - other.g).abs() <= COLOR_EPSILON
            && (self.b - other.b).abs() <= COLOR_EPSILON
    }

    /// Converts to a wgpu clear color with opaque alpha.
    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_splits_channels() {
        let c = Rgb::decode(0xFF8000);
        assert_eq!(c.r, 1.0);
        assert!((c.g - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.b, 0.0);
    }

    #[test]
    fn decode_ignores_high_byte() {
        assert_eq!(Rgb::decode(0xAB_00FF00), Rgb::decode(0x00FF00));
    }

    #[test]
    fn encode_restores_decoded_values() {
        for packed in [0x000000, 0xFFFFFF, 0x252525, 0xDDDDDD, 0x123456, 0x00FF00] {
            assert_eq!(Rgb::decode(packed).encode(), packed, "{packed:06X}");
        }
    }

    #[test]
    fn encode_truncates_arbitrary_floats() {
        // 0.999 * 255 = 254.745 -> 254
        assert_eq!(Rgb { r: 0.999, g: 0.0, b: 0.0 }.encode(), 254 << 16);
    }

    #[test]
    fn approx_eq_tolerates_tiny_drift() {
        let a = Rgb::decode(0x808080);
        let b = Rgb { r: a.r + COLOR_EPSILON / 2.0, ..a };
        assert!(a.approx_eq(b));
        assert!(!a.approx_eq(Rgb::decode(0x818080)));
    }

    #[test]
    fn approx_eq_checks_blue_channel() {
        assert!(!Rgb::decode(0x000000).approx_eq(Rgb::decode(0x0000FF)));
    }
}
