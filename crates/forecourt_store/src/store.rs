//! Slug-keyed configuration store
//!
//! One storage key per tenant slug under a shared namespace. Reads that
//! fail or fail to parse fall back to the supplied defaults; writes are
//! best-effort. A namespace-wide purge backs the full-site reset utility.

use crate::backend::StorageBackend;
use crate::config::{SiteConfig, SiteConfigPatch};
use crate::error::Result;

/// Namespace prefix shared by every tenant entry
pub const NAMESPACE: &str = "site-config";

/// Slug used when none is provided, so unnamed previews in the same
/// storage root do not collide with real tenants
pub const PLACEHOLDER_SLUG: &str = "preview";

/// Storage key for a tenant slug.
///
/// Slugs are normalized to lowercase alphanumerics and dashes; the result
/// is filesystem-safe by construction.
pub fn storage_key(slug: Option<&str>) -> String {
    let slug = slug
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(PLACEHOLDER_SLUG);
    let slug: String = slug
        .chars()
        .map(|c| match c.to_ascii_lowercase() {
            c @ ('a'..='z' | '0'..='9' | '-') => c,
            _ => '-',
        })
        .collect();
    format!("{NAMESPACE}.{slug}")
}

/// Per-tenant configuration store over a storage backend
pub struct ConfigStore<B: StorageBackend> {
    backend: B,
    defaults: SiteConfig,
}

impl<B: StorageBackend> ConfigStore<B> {
    /// Store with the stock [`SiteConfig`] defaults
    pub fn new(backend: B) -> Self {
        Self::with_defaults(backend, SiteConfig::default())
    }

    /// Store with caller-supplied defaults (e.g. a preset-derived config)
    pub fn with_defaults(backend: B, defaults: SiteConfig) -> Self {
        Self { backend, defaults }
    }

    pub fn defaults(&self) -> &SiteConfig {
        &self.defaults
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Load a tenant's configuration.
    ///
    /// Missing or unreadable entries yield the defaults untouched. A
    /// stored entry is parsed as a partial document and merged over the
    /// defaults section by section, so leaves absent from storage keep
    /// their default value.
    pub fn load(&self, slug: Option<&str>) -> SiteConfig {
        let key = storage_key(slug);
        let raw = match self.backend.read(&key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return self.defaults.clone(),
            Err(err) => {
                tracing::debug!(%key, %err, "config read failed, using defaults");
                return self.defaults.clone();
            }
        };

        match serde_json::from_str::<SiteConfigPatch>(&raw) {
            Ok(patch) => {
                let mut config = self.defaults.clone();
                config.apply(patch);
                config
            }
            Err(err) => {
                tracing::debug!(%key, %err, "stored config unparsable, using defaults");
                self.defaults.clone()
            }
        }
    }

    /// Persist a tenant's full configuration.
    ///
    /// Best-effort: serialization or write failures are logged and
    /// swallowed, never surfaced to the caller.
    pub fn save(&mut self, slug: Option<&str>, config: &SiteConfig) {
        let key = storage_key(slug);
        let json = match serde_json::to_string_pretty(config) {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(%key, %err, "config serialization failed, not persisted");
                return;
            }
        };
        if let Err(err) = self.backend.write(&key, &json) {
            tracing::warn!(%key, %err, "config write failed, not persisted");
        }
    }

    /// Remove a tenant's stored entry and return the defaults.
    pub fn reset(&mut self, slug: Option<&str>) -> SiteConfig {
        let key = storage_key(slug);
        match self.backend.remove(&key) {
            Ok(removed) => {
                if removed {
                    tracing::debug!(%key, "stored config removed");
                }
            }
            Err(err) => tracing::warn!(%key, %err, "config remove failed"),
        }
        self.defaults.clone()
    }

    /// Remove every entry in the configuration namespace, across all
    /// tenants. Returns how many entries were removed.
    pub fn purge_namespace(&mut self) -> Result<usize> {
        let prefix = format!("{NAMESPACE}.");
        let keys = self.backend.keys()?;
        let mut removed = 0;
        for key in keys.iter().filter(|k| k.starts_with(&prefix)) {
            if self.backend.remove(key)? {
                removed += 1;
            }
        }
        tracing::debug!(removed, "configuration namespace purged");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;
    use crate::config::{ColorPatch, SiteConfigPatch};

    #[test]
    fn test_storage_key_scheme() {
        assert_eq!(storage_key(Some("acme-motors")), "site-config.acme-motors");
        assert_eq!(storage_key(Some("Acme Motors!")), "site-config.acme-motors-");
        assert_eq!(storage_key(None), "site-config.preview");
        assert_eq!(storage_key(Some("")), "site-config.preview");
        assert_eq!(storage_key(Some("  ")), "site-config.preview");
    }

    #[test]
    fn test_load_on_empty_store_returns_defaults() {
        let store = ConfigStore::new(MemoryBackend::new());
        assert_eq!(store.defaults(), &SiteConfig::default());
        assert_eq!(store.load(Some("acme")), SiteConfig::default());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let mut store = ConfigStore::new(MemoryBackend::new());

        let mut config = store.load(Some("acme"));
        config.brand.name = "Acme Motors".into();
        config.colors.primary = "#2563EB".into();
        store.save(Some("acme"), &config);

        assert_eq!(store.load(Some("acme")), config);
    }

    #[test]
    fn test_partial_stored_entry_merges_over_defaults() {
        let mut store = ConfigStore::new(MemoryBackend::new());

        let mut config = store.load(Some("acme"));
        config.apply(SiteConfigPatch {
            colors: Some(ColorPatch {
                primary: Some("#111111".into()),
                accent: None,
            }),
            ..Default::default()
        });
        store.save(Some("acme"), &config);

        let loaded = store.load(Some("acme"));
        let defaults = SiteConfig::default();
        assert_eq!(loaded.colors.primary, "#111111");
        assert_eq!(loaded.colors.accent, defaults.colors.accent);
        assert_eq!(loaded.brand, defaults.brand);
        assert_eq!(loaded.hero, defaults.hero);
        assert_eq!(loaded.content, defaults.content);
    }

    #[test]
    fn test_reset_then_load_returns_defaults() {
        let mut store = ConfigStore::new(MemoryBackend::new());

        let mut config = store.load(Some("acme"));
        config.brand.name = "Acme Motors".into();
        store.save(Some("acme"), &config);

        assert_eq!(store.reset(Some("acme")), SiteConfig::default());
        assert_eq!(store.load(Some("acme")), SiteConfig::default());
    }

    #[test]
    fn test_slugs_do_not_collide() {
        let mut store = ConfigStore::new(MemoryBackend::new());

        let mut first = store.load(Some("acme"));
        first.brand.name = "Acme Motors".into();
        store.save(Some("acme"), &first);

        let mut second = store.load(None);
        second.brand.name = "Preview Lot".into();
        store.save(None, &second);

        assert_eq!(store.load(Some("acme")).brand.name, "Acme Motors");
        assert_eq!(store.load(None).brand.name, "Preview Lot");
    }

    #[test]
    fn test_purge_removes_every_tenant() {
        let mut store = ConfigStore::new(MemoryBackend::new());
        store.save(Some("acme"), &SiteConfig::default());
        store.save(Some("globex"), &SiteConfig::default());
        store.save(None, &SiteConfig::default());

        assert_eq!(store.purge_namespace().unwrap(), 3);
        assert!(store.backend().keys().unwrap().is_empty());
        assert_eq!(store.load(Some("acme")), SiteConfig::default());
    }
}
