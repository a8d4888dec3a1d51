//! Forecourt site configuration store
//!
//! Durable, slug-keyed tenant configuration: each dealer slug owns one
//! [`SiteConfig`] (brand, hero, contact, colors, content) held in a
//! key-value [`StorageBackend`].
//!
//! The store is a best-effort cache, not a source of truth: reads that
//! fail or fail to parse fall back to the supplied defaults, and write
//! failures are logged and swallowed. Partial stored entries deep-merge
//! per top-level section over the defaults, so a tenant that only ever
//! customized `colors` keeps default copy everywhere else.
//!
//! # Quick Start
//!
//! ```rust
//! use forecourt_store::{ConfigStore, MemoryBackend, SiteConfigPatch, ColorPatch};
//!
//! let mut store = ConfigStore::new(MemoryBackend::new());
//!
//! let mut config = store.load(Some("acme-motors"));
//! config.apply(SiteConfigPatch {
//!     colors: Some(ColorPatch {
//!         primary: Some("#2563EB".into()),
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! });
//! store.save(Some("acme-motors"), &config);
//! ```

pub mod backend;
pub mod config;
pub mod error;
pub mod store;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use config::{
    BrandPatch, BrandSection, ColorPatch, ColorSection, ContactPatch, ContactSection,
    ContentPatch, ContentSection, HeroPatch, HeroSection, SiteConfig, SiteConfigPatch,
};
pub use error::StoreError;
pub use store::{storage_key, ConfigStore, NAMESPACE, PLACEHOLDER_SLUG};
