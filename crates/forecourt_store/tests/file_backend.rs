use forecourt_store::{
    ColorPatch, ConfigStore, FileBackend, SiteConfig, SiteConfigPatch, StorageBackend,
};

fn store_in(dir: &std::path::Path) -> ConfigStore<FileBackend> {
    ConfigStore::new(FileBackend::new(dir).unwrap())
}

#[test]
fn save_then_fresh_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = store_in(dir.path());
    let mut config = store.load(Some("acme-motors"));
    config.brand.name = "Acme Motors".into();
    config.apply(SiteConfigPatch {
        colors: Some(ColorPatch {
            primary: Some("#2563EB".into()),
            accent: Some("#0EA5E9".into()),
        }),
        ..Default::default()
    });
    store.save(Some("acme-motors"), &config);

    // A fresh store over the same directory sees the same value
    let reopened = store_in(dir.path());
    assert_eq!(reopened.load(Some("acme-motors")), config);
}

#[test]
fn unparsable_entry_on_disk_loads_as_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("site-config.acme.json"),
        "{ this is not json",
    )
    .unwrap();

    let store = store_in(dir.path());
    assert_eq!(store.load(Some("acme")), SiteConfig::default());
}

#[test]
fn reset_removes_the_entry_file() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = store_in(dir.path());
    store.save(Some("acme"), &SiteConfig::default());
    assert!(dir.path().join("site-config.acme.json").exists());

    store.reset(Some("acme"));
    assert!(!dir.path().join("site-config.acme.json").exists());
    assert_eq!(store.load(Some("acme")), SiteConfig::default());
}

#[test]
fn purge_clears_the_namespace_but_not_other_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("unrelated.json"), "{}").unwrap();

    let mut store = store_in(dir.path());
    store.save(Some("acme"), &SiteConfig::default());
    store.save(Some("globex"), &SiteConfig::default());
    store.save(None, &SiteConfig::default());

    assert_eq!(store.purge_namespace().unwrap(), 3);
    assert_eq!(store.backend().keys().unwrap(), vec!["unrelated"]);
}

#[test]
fn missing_directory_is_created_on_open() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("data").join("tenants");

    let mut store = ConfigStore::new(FileBackend::new(&nested).unwrap());
    assert_eq!(store.backend().root(), nested);
    store.save(Some("acme"), &SiteConfig::default());
    assert!(nested.join("site-config.acme.json").exists());
}
