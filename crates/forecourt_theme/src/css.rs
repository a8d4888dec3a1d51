//! Scoped CSS rendering
//!
//! Serializes a [`DerivedPalette`] into one ruleset: custom-property
//! overrides under the scope-attribute selector, then high-specificity
//! utility-class rules so the palette wins over any stylesheet the page
//! already loaded.

use std::fmt::Write;

use crate::tokens::DerivedPalette;

/// Well-known id of the single injected style element
pub const THEME_STYLE_ID: &str = "forecourt-theme-overrides";

/// Attribute marking the subtree the generated rules apply to
pub const DEFAULT_SCOPE_ATTR: &str = "data-forecourt-theme";

/// Utility classes that must repaint with the tenant palette. Each entry
/// is (class, property, custom-property reference).
const UTILITY_OVERRIDES: &[(&str, &str, &str)] = &[
    ("bg-primary", "background-color", "hsl(var(--primary))"),
    ("text-primary", "color", "hsl(var(--primary))"),
    ("border-primary", "border-color", "hsl(var(--primary))"),
    ("bg-accent", "background-color", "hsl(var(--accent))"),
    ("text-accent", "color", "hsl(var(--accent))"),
    ("border-accent", "border-color", "hsl(var(--accent))"),
];

/// Render the full scoped ruleset for a palette.
pub fn render_css(palette: &DerivedPalette, scope_attr: &str) -> String {
    let mut css = String::with_capacity(1024);

    // Custom-property block under the scope marker
    let _ = writeln!(css, "[{scope_attr}] {{");
    let _ = writeln!(css, "  --primary: {};", palette.primary_hsl);
    let _ = writeln!(css, "  --primary-glow: {};", palette.primary_glow);
    let _ = writeln!(css, "  --accent: {};", palette.accent_hsl);
    let _ = writeln!(css, "  --gradient-primary: {};", palette.gradient);
    let _ = writeln!(css, "  --shadow-elegant: {};", palette.shadow_elegant);
    let _ = writeln!(css, "  --shadow-glow: {};", palette.shadow_glow);
    let _ = writeln!(css, "}}");

    // Utility classes: high specificity so the tenant palette beats the
    // compiled stylesheet's own color utilities
    for (class, property, value) in UTILITY_OVERRIDES {
        let _ = writeln!(
            css,
            "[{scope_attr}] .{class} {{ {property}: {value} !important; }}"
        );
    }

    // Gradient-bearing button variants
    let _ = writeln!(
        css,
        "[{scope_attr}] .btn-gradient {{ background-image: var(--gradient-primary) !important; box-shadow: var(--shadow-elegant) !important; }}"
    );
    let _ = writeln!(
        css,
        "[{scope_attr}] .btn-gradient:hover {{ box-shadow: var(--shadow-glow) !important; }}"
    );

    css
}
