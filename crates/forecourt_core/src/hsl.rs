//! Integer HSL triple and RGB→HSL conversion

use std::fmt::{Display, Formatter};

use crate::color::{parse_hex, Color};

/// Hue/saturation/lightness triple in CSS custom-property form.
///
/// Hue is integer degrees in `[0,360)`; saturation and lightness are
/// integer percent in `[0,100]`. Always derived from a [`Color`], never
/// hand-edited, so the ranges hold by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    /// Substituted for any color token that fails to parse: `221 83% 53%`.
    ///
    /// Note: a blue, not the violet the stock preset pair uses.
    pub const FALLBACK: Hsl = Hsl {
        h: 221,
        s: 83,
        l: 53,
    };

    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }

    /// Convert an RGB color to its HSL triple.
    ///
    /// Standard sector conversion: lightness is `(max+min)/2`, saturation
    /// depends on which half of the lightness range the color sits in,
    /// and hue comes from whichever channel is the max with a 60° sector
    /// offset. Achromatic colors (`max == min`) yield hue 0, saturation 0.
    pub fn from_color(color: Color) -> Self {
        let (r, g, b) = (color.r, color.g, color.b);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl {
                h: 0,
                s: 0,
                l: percent(l),
            };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let mut h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        h /= 6.0;

        Hsl {
            h: ((h * 360.0).round() as u16) % 360,
            s: percent(s),
            l: percent(l),
        }
    }

    /// Same triple with a different lightness, clamped to [0,100]
    pub fn with_lightness(self, l: u8) -> Self {
        Self {
            l: l.min(100),
            ..self
        }
    }
}

impl Display for Hsl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}% {}%", self.h, self.s, self.l)
    }
}

/// Convert a hex color token to an HSL triple.
///
/// Never fails: malformed tokens (wrong length, bad digits) produce
/// [`Hsl::FALLBACK`] instead of an error, so palette derivation degrades
/// to a stock color rather than failing the page.
pub fn hex_to_hsl(token: &str) -> Hsl {
    match parse_hex(token) {
        Ok(color) => Hsl::from_color(color),
        Err(_) => Hsl::FALLBACK,
    }
}

fn percent(value: f32) -> u8 {
    (value * 100.0).clamp(0.0, 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_and_white() {
        assert_eq!(hex_to_hsl("#000000").to_string(), "0 0% 0%");
        assert_eq!(hex_to_hsl("#FFFFFF").to_string(), "0 0% 100%");
    }

    #[test]
    fn test_primary_channels() {
        assert_eq!(hex_to_hsl("#FF0000").to_string(), "0 100% 50%");
        assert_eq!(hex_to_hsl("#00FF00").to_string(), "120 100% 50%");
        assert_eq!(hex_to_hsl("#0000FF").to_string(), "240 100% 50%");
    }

    #[test]
    fn test_shorthand_matches_expanded() {
        assert_eq!(hex_to_hsl("#abc"), hex_to_hsl("#aabbcc"));
        assert_eq!(hex_to_hsl("#f80"), hex_to_hsl("#ff8800"));
    }

    #[test]
    fn test_malformed_token_falls_back() {
        assert_eq!(hex_to_hsl("not-a-color"), Hsl::FALLBACK);
        assert_eq!(hex_to_hsl(""), Hsl::FALLBACK);
        assert_eq!(hex_to_hsl("#12"), Hsl::FALLBACK);
        assert_eq!(Hsl::FALLBACK.to_string(), "221 83% 53%");
    }

    #[test]
    fn test_components_stay_in_range() {
        // Sweep a spread of valid colors; every output component must sit
        // inside its declared range.
        for hex in (0x000000u32..=0xFFFFFF).step_by(0x01_37_9B) {
            let hsl = hex_to_hsl(&format!("#{hex:06X}"));
            assert!(hsl.h < 360, "hue {} out of range for {hex:06x}", hsl.h);
            assert!(hsl.s <= 100, "saturation {} out of range", hsl.s);
            assert!(hsl.l <= 100, "lightness {} out of range", hsl.l);
        }
    }

    #[test]
    fn test_with_lightness_clamps() {
        let hsl = Hsl::new(250, 60, 40);
        assert_eq!(hsl.with_lightness(90).l, 90);
        assert_eq!(hsl.with_lightness(200).l, 100);
        assert_eq!(hsl.with_lightness(90).h, 250);
        assert_eq!(hsl.with_lightness(90).s, 60);
    }
}
