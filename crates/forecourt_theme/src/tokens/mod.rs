//! Palette tokens
//!
//! Tokens are the derived values handed to CSS rendering:
//! - HSL triples for primary, accent, and the glow variant
//! - Gradient and shadow presentation strings

mod palette;

pub use palette::*;
