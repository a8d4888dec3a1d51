//! Tenant site configuration
//!
//! [`SiteConfig`] is the full per-tenant document; [`SiteConfigPatch`] is
//! its all-optional shadow used both for in-memory updates and for
//! merging partially stored entries over defaults. Every section and leaf
//! carries a serde default, so a stored entry missing a field never
//! deserializes to an empty value where a default exists.

use serde::{Deserialize, Serialize};

/// Full configuration for one tenant slug
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: BrandSection,
    pub hero: HeroSection,
    pub contact: ContactSection,
    pub colors: ColorSection,
    pub content: ContentSection,
}

/// Dealership identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandSection {
    #[serde(default = "default_brand_name")]
    pub name: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
    #[serde(default)]
    pub logo_url: Option<String>,
}

fn default_brand_name() -> String {
    "Your Dealership".to_string()
}

fn default_tagline() -> String {
    "Quality vehicles, honest service".to_string()
}

impl Default for BrandSection {
    fn default() -> Self {
        Self {
            name: default_brand_name(),
            tagline: default_tagline(),
            logo_url: None,
        }
    }
}

/// Landing-page hero block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroSection {
    #[serde(default = "default_headline")]
    pub headline: String,
    #[serde(default = "default_subheadline")]
    pub subheadline: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_cta_label")]
    pub cta_label: String,
}

fn default_headline() -> String {
    "Find your next vehicle".to_string()
}

fn default_subheadline() -> String {
    "Browse our hand-picked inventory and drive away today".to_string()
}

fn default_cta_label() -> String {
    "Browse inventory".to_string()
}

impl Default for HeroSection {
    fn default() -> Self {
        Self {
            headline: default_headline(),
            subheadline: default_subheadline(),
            image_url: None,
            cta_label: default_cta_label(),
        }
    }
}

/// Contact details shown site-wide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSection {
    pub phone: String,
    pub email: String,
    pub address: String,
    #[serde(default = "default_hours")]
    pub hours: String,
}

fn default_hours() -> String {
    "Mon-Sat 9am-6pm".to_string()
}

impl Default for ContactSection {
    fn default() -> Self {
        Self {
            phone: String::new(),
            email: String::new(),
            address: String::new(),
            hours: default_hours(),
        }
    }
}

/// Primary/accent color pair consumed by the theming engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSection {
    #[serde(default = "default_primary")]
    pub primary: String,
    #[serde(default = "default_accent")]
    pub accent: String,
}

fn default_primary() -> String {
    // Matches the violet stock preset pair
    "#7C3AED".to_string()
}

fn default_accent() -> String {
    "#F97316".to_string()
}

impl Default for ColorSection {
    fn default() -> Self {
        Self {
            primary: default_primary(),
            accent: default_accent(),
        }
    }
}

/// Free-form page content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ContentSection {
    pub about: String,
    pub services: Vec<String>,
    pub footer_note: String,
}

/// Partial update to a [`SiteConfig`].
///
/// Sections merge independently; leaves that are `None` keep the current
/// value. Also the deserialization target for stored entries, which makes
/// a partial entry on disk merge over the supplied defaults instead of
/// zeroing absent sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfigPatch {
    pub brand: Option<BrandPatch>,
    pub hero: Option<HeroPatch>,
    pub contact: Option<ContactPatch>,
    pub colors: Option<ColorPatch>,
    pub content: Option<ContentPatch>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandPatch {
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroPatch {
    pub headline: Option<String>,
    pub subheadline: Option<String>,
    pub image_url: Option<String>,
    pub cta_label: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactPatch {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub hours: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorPatch {
    pub primary: Option<String>,
    pub accent: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentPatch {
    pub about: Option<String>,
    pub services: Option<Vec<String>>,
    pub footer_note: Option<String>,
}

impl SiteConfig {
    /// Merge a partial config into this one, section by section.
    ///
    /// Does not persist; call the store's `save` explicitly.
    pub fn apply(&mut self, patch: SiteConfigPatch) {
        if let Some(brand) = patch.brand {
            merge(&mut self.brand.name, brand.name);
            merge(&mut self.brand.tagline, brand.tagline);
            if brand.logo_url.is_some() {
                self.brand.logo_url = brand.logo_url;
            }
        }
        if let Some(hero) = patch.hero {
            merge(&mut self.hero.headline, hero.headline);
            merge(&mut self.hero.subheadline, hero.subheadline);
            if hero.image_url.is_some() {
                self.hero.image_url = hero.image_url;
            }
            merge(&mut self.hero.cta_label, hero.cta_label);
        }
        if let Some(contact) = patch.contact {
            merge(&mut self.contact.phone, contact.phone);
            merge(&mut self.contact.email, contact.email);
            merge(&mut self.contact.address, contact.address);
            merge(&mut self.contact.hours, contact.hours);
        }
        if let Some(colors) = patch.colors {
            merge(&mut self.colors.primary, colors.primary);
            merge(&mut self.colors.accent, colors.accent);
        }
        if let Some(content) = patch.content {
            merge(&mut self.content.about, content.about);
            merge(&mut self.content.services, content.services);
            merge(&mut self.content.footer_note, content.footer_note);
        }
    }
}

fn merge<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}
