//! Derived palette tokens

use forecourt_core::Hsl;

/// Token keys for dynamic access to a derived palette
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum PaletteToken {
    PrimaryHsl,
    AccentHsl,
    PrimaryGlow,
    Gradient,
    ShadowElegant,
    ShadowGlow,
}

/// Complete set of visual tokens derived from one primary/accent pair.
///
/// Fully determined by the input pair; recomputed when the pair changes,
/// never mutated in place.
#[derive(Clone, Debug, PartialEq)]
pub struct DerivedPalette {
    pub primary_hsl: Hsl,
    pub accent_hsl: Hsl,
    pub primary_glow: Hsl,
    pub gradient: String,
    pub shadow_elegant: String,
    pub shadow_glow: String,
}

impl DerivedPalette {
    /// Get a token value by key, formatted for CSS
    pub fn get(&self, token: PaletteToken) -> String {
        match token {
            PaletteToken::PrimaryHsl => self.primary_hsl.to_string(),
            PaletteToken::AccentHsl => self.accent_hsl.to_string(),
            PaletteToken::PrimaryGlow => self.primary_glow.to_string(),
            PaletteToken::Gradient => self.gradient.clone(),
            PaletteToken::ShadowElegant => self.shadow_elegant.clone(),
            PaletteToken::ShadowGlow => self.shadow_glow.clone(),
        }
    }
}
