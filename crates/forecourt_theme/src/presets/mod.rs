//! Stock color-pair presets for tenants without custom branding.

use std::fmt::{Display, Formatter};

use crate::derive::derived_palette;
use crate::tokens::DerivedPalette;
use std::sync::Arc;

/// Built-in palette preset catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PalettePreset {
    /// Default violet branding.
    Violet,
    /// Blue pair for conservative storefronts.
    Cobalt,
    /// Red pair for performance-oriented storefronts.
    Crimson,
    /// Green pair.
    Emerald,
}

impl PalettePreset {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Violet => "violet",
            Self::Cobalt => "cobalt",
            Self::Crimson => "crimson",
            Self::Emerald => "emerald",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Violet => "Violet",
            Self::Cobalt => "Cobalt",
            Self::Crimson => "Crimson",
            Self::Emerald => "Emerald",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [PalettePreset] {
        const PRESETS: [PalettePreset; 4] = [
            PalettePreset::Violet,
            PalettePreset::Cobalt,
            PalettePreset::Crimson,
            PalettePreset::Emerald,
        ];
        &PRESETS
    }

    /// Look up a preset by its stable id.
    pub fn find(id: &str) -> Option<PalettePreset> {
        Self::all().iter().copied().find(|p| p.id() == id)
    }

    /// The primary/accent hex pair for this preset.
    pub fn pair(self) -> (&'static str, &'static str) {
        match self {
            Self::Violet => ("#7C3AED", "#F97316"),
            Self::Cobalt => ("#2563EB", "#0EA5E9"),
            Self::Crimson => ("#DC2626", "#F59E0B"),
            Self::Emerald => ("#059669", "#10B981"),
        }
    }

    /// Derive the full palette for this preset's pair.
    pub fn palette(self) -> Arc<DerivedPalette> {
        let (primary, accent) = self.pair();
        derived_palette(primary, accent)
    }
}

impl Default for PalettePreset {
    fn default() -> Self {
        Self::Violet
    }
}

impl Display for PalettePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
