//! Color mode tags and their per-mode constant tables.
//!
//! [`ColorMode`] identifies the color space a buffer's bytes are
//! interpreted in. Pixel stride and per-channel maxima are pure
//! functions of the mode — they are looked up here and never stored
//! on the buffer, so the two can't drift apart.

/// Color space of a pixel buffer.
///
/// Every mode has a fixed channel count (the pixel stride) and a
/// per-channel maximum, both available as `const fn` lookups. Effects
/// dispatch by matching on the variant set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
#[repr(u8)]
pub enum ColorMode {
    /// Red, green, blue, alpha. The decode/interchange default.
    #[default]
    Rgba,
    /// Red, green, blue.
    Rgb,
    /// Blue, green, red.
    Bgr,
    /// Blue, green, red, alpha.
    Bgra,
    /// Single luminance channel.
    L,
    /// Single-bit-semantics luminance (stored as one byte per pixel).
    B,
    /// Cyan, magenta, yellow, key.
    Cmyk,
    /// Hue, lightness, saturation. Hue is normalized 0–360 → 0–240.
    Hls,
    /// Hue, saturation, value. Hue is normalized 0–360 → 0–240.
    Hsv,
    /// CIE XYZ tristimulus.
    Xyz,
}

impl ColorMode {
    /// Every enumerated mode, in declaration order.
    pub const ALL: [ColorMode; 10] = [
        Self::Rgba,
        Self::Rgb,
        Self::Bgr,
        Self::Bgra,
        Self::L,
        Self::B,
        Self::Cmyk,
        Self::Hls,
        Self::Hsv,
        Self::Xyz,
    ];

    /// Number of channels per pixel (the pixel stride in bytes).
    #[inline]
    pub const fn channels(self) -> usize {
        match self {
            Self::L | Self::B => 1,
            Self::Rgb | Self::Bgr | Self::Hls | Self::Hsv | Self::Xyz => 3,
            Self::Rgba | Self::Bgra | Self::Cmyk => 4,
        }
    }

    /// Per-channel maximum values, one entry per channel.
    ///
    /// For [`Hls`](Self::Hls) and [`Hsv`](Self::Hsv) the hue channel
    /// tops out at 240 (0–360 degrees normalized into a byte); all
    /// other channels use the full byte range.
    #[inline]
    pub const fn channel_max(self) -> &'static [u8] {
        match self {
            Self::Rgb | Self::Bgr | Self::Xyz => &[255, 255, 255],
            Self::Rgba | Self::Bgra | Self::Cmyk => &[255, 255, 255, 255],
            Self::L | Self::B => &[255],
            Self::Hls | Self::Hsv => &[240, 255, 255],
        }
    }

    /// Whether the last channel is an alpha channel.
    #[inline]
    pub const fn has_alpha(self) -> bool {
        matches!(self, Self::Rgba | Self::Bgra)
    }

    /// Whether the first three channels form an RGB-like color triple
    /// that effects treat as one group (alpha, if any, left alone).
    #[inline]
    pub const fn is_rgb_like(self) -> bool {
        matches!(
            self,
            Self::Rgb | Self::Rgba | Self::Bgr | Self::Bgra | Self::Hls | Self::Hsv
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_rgba() {
        assert_eq!(ColorMode::default(), ColorMode::Rgba);
    }

    #[test]
    fn channels_per_mode() {
        assert_eq!(ColorMode::Rgba.channels(), 4);
        assert_eq!(ColorMode::Rgb.channels(), 3);
        assert_eq!(ColorMode::Bgr.channels(), 3);
        assert_eq!(ColorMode::Bgra.channels(), 4);
        assert_eq!(ColorMode::L.channels(), 1);
        assert_eq!(ColorMode::B.channels(), 1);
        assert_eq!(ColorMode::Cmyk.channels(), 4);
        assert_eq!(ColorMode::Hls.channels(), 3);
        assert_eq!(ColorMode::Hsv.channels(), 3);
        assert_eq!(ColorMode::Xyz.channels(), 3);
    }

    #[test]
    fn maxima_length_matches_channels() {
        for mode in ColorMode::ALL {
            assert_eq!(
                mode.channel_max().len(),
                mode.channels(),
                "maxima table out of sync for {mode:?}"
            );
        }
    }

    #[test]
    fn hue_modes_cap_at_240() {
        assert_eq!(ColorMode::Hls.channel_max(), &[240, 255, 255]);
        assert_eq!(ColorMode::Hsv.channel_max(), &[240, 255, 255]);
    }

    #[test]
    fn alpha_modes() {
        assert!(ColorMode::Rgba.has_alpha());
        assert!(ColorMode::Bgra.has_alpha());
        assert!(!ColorMode::Rgb.has_alpha());
        assert!(!ColorMode::Cmyk.has_alpha());
    }

    #[test]
    fn rgb_like_grouping() {
        for mode in [
            ColorMode::Rgb,
            ColorMode::Rgba,
            ColorMode::Bgr,
            ColorMode::Bgra,
            ColorMode::Hls,
            ColorMode::Hsv,
        ] {
            assert!(mode.is_rgb_like());
        }
        for mode in [ColorMode::L, ColorMode::B, ColorMode::Cmyk, ColorMode::Xyz] {
            assert!(!mode.is_rgb_like());
        }
    }
}
