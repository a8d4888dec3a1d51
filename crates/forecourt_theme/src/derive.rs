//! Palette derivation
//!
//! Expands a primary/accent color pair into a [`DerivedPalette`]. Pure
//! arithmetic and string composition; hex parsing already degraded to the
//! fallback triple upstream, so this stage cannot fail.

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, OnceLock};

use forecourt_core::hex_to_hsl;
use lru::LruCache;

use crate::tokens::DerivedPalette;

/// Lightness added to the primary color to produce the glow variant
pub const GLOW_LIGHTNESS_BOOST: u8 = 20;

/// Glow lightness never exceeds this, keeping the variant off pure white
pub const GLOW_LIGHTNESS_CAP: u8 = 90;

/// Bounded memo of derived palettes, keyed on the input pair
const PALETTE_CACHE_CAPACITY: usize = 64;

static PALETTE_CACHE: OnceLock<Mutex<LruCache<(String, String), Arc<DerivedPalette>>>> =
    OnceLock::new();

/// Build a derived palette from a primary/accent hex pair.
///
/// The glow variant reuses the primary hue and saturation with lightness
/// `min(l + 20, 90)`. Gradient and shadow strings use fixed angle, blur,
/// offset and opacity constants.
pub fn build_palette(primary: &str, accent: &str) -> DerivedPalette {
    let primary_hsl = hex_to_hsl(primary);
    let accent_hsl = hex_to_hsl(accent);
    let primary_glow = primary_hsl.with_lightness(
        primary_hsl
            .l
            .saturating_add(GLOW_LIGHTNESS_BOOST)
            .min(GLOW_LIGHTNESS_CAP),
    );

    DerivedPalette {
        gradient: format!("linear-gradient(135deg, hsl({primary_hsl}), hsl({primary_glow}))"),
        shadow_elegant: format!("0 10px 30px -10px hsl({primary_hsl} / 0.3)"),
        shadow_glow: format!("0 0 40px hsl({primary_glow} / 0.4)"),
        primary_hsl,
        accent_hsl,
        primary_glow,
    }
}

/// Memoized [`build_palette`].
///
/// Repeated calls with the same pair return the cached palette instead of
/// recomputing; the cache is bounded and evicts least-recently-used
/// pairs. This is the entry point render paths should use.
pub fn derived_palette(primary: &str, accent: &str) -> Arc<DerivedPalette> {
    let cache = PALETTE_CACHE.get_or_init(|| {
        Mutex::new(LruCache::new(
            NonZeroUsize::new(PALETTE_CACHE_CAPACITY).unwrap(),
        ))
    });

    let key = (primary.to_owned(), accent.to_owned());
    let mut cache = cache.lock().unwrap();
    if let Some(palette) = cache.get(&key) {
        return Arc::clone(palette);
    }

    let palette = Arc::new(build_palette(primary, accent));
    cache.put(key, Arc::clone(&palette));
    tracing::debug!(primary, accent, "derived palette for new color pair");
    palette
}
