//! Forecourt Theming Engine
//!
//! Per-tenant visual theming for dealer sites: a primary/accent color
//! pair is expanded into a full derived palette, rendered as a scoped CSS
//! ruleset, and installed into a document's style tree as a managed
//! singleton.
//!
//! # Overview
//!
//! The engine provides:
//! - **Derived palettes**: HSL tokens, a lightened glow variant, gradient
//!   and shadow strings computed from one color pair
//! - **Presets**: stock color pairs for tenants without custom branding
//! - **CSS rendering**: custom-property overrides under a scope attribute
//!   plus high-specificity utility-class rules
//! - **Style injection**: a replace-on-write style registry that never
//!   holds more than one themed ruleset
//!
//! # Quick Start
//!
//! ```rust
//! use forecourt_theme::{derived_palette, shared_registry, ThemeInjection};
//!
//! let palette = derived_palette("#7C3AED", "#F97316");
//! let registry = shared_registry();
//!
//! // Install the palette; the handle removes it again on drop
//! let injection = ThemeInjection::apply(&registry, &palette, "data-forecourt-theme");
//! drop(injection);
//! assert!(registry.read().unwrap().is_empty());
//! ```
//!
//! # Pipeline
//!
//! The configuration store supplies the color pair, [`derived_palette`]
//! expands it (memoized on the pair), and [`ThemeInjection`] applies the
//! result. Derivation always completes before apply, and the previous
//! ruleset is removed before the new one is installed, so old and new
//! palettes never coexist.

pub mod css;
pub mod derive;
pub mod presets;
pub mod registry;
pub mod tokens;

// Re-export commonly used types
pub use css::{render_css, DEFAULT_SCOPE_ATTR, THEME_STYLE_ID};
pub use derive::{build_palette, derived_palette};
pub use presets::PalettePreset;
pub use registry::{shared_registry, SharedRegistry, StyleRegistry, ThemeInjection};
pub use tokens::*;
