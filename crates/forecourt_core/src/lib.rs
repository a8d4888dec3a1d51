//! Forecourt color primitives
//!
//! Shared color types for the Forecourt theming engine:
//!
//! - [`Color`]: RGB channels as parsed from a tenant color token
//! - [`Hsl`]: integer hue/saturation/lightness triple in CSS token form
//! - [`parse_hex`]: fallible parsing of `#RGB` / `#RRGGBB` color tokens
//! - [`hex_to_hsl`]: infallible conversion used by palette derivation
//!
//! # Quick Start
//!
//! ```rust
//! use forecourt_core::hex_to_hsl;
//!
//! let hsl = hex_to_hsl("#1E66F5");
//! assert_eq!(hsl.to_string(), format!("{} {}% {}%", hsl.h, hsl.s, hsl.l));
//! ```
//!
//! Tenant-supplied color tokens come from an external record and may be
//! arbitrary strings; [`hex_to_hsl`] never fails, substituting
//! [`Hsl::FALLBACK`] for anything that does not parse. Callers that need
//! to distinguish bad input use [`parse_hex`] directly.

pub mod color;
pub mod hsl;

pub use color::{parse_hex, Color, ColorParseError};
pub use hsl::{hex_to_hsl, Hsl};
