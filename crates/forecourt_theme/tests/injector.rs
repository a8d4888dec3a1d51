use forecourt_theme::{
    build_palette, shared_registry, ThemeInjection, DEFAULT_SCOPE_ATTR, THEME_STYLE_ID,
};

#[test]
fn successive_applies_leave_exactly_one_element() {
    let registry = shared_registry();
    let violet = build_palette("#7C3AED", "#F97316");
    let cobalt = build_palette("#2563EB", "#0EA5E9");

    let injection = ThemeInjection::apply(&registry, &violet, DEFAULT_SCOPE_ATTR);
    injection.reapply(&cobalt, DEFAULT_SCOPE_ATTR);

    let doc = registry.read().unwrap();
    assert_eq!(doc.len(), 1);
    let css = doc.get(THEME_STYLE_ID).unwrap();
    assert!(css.contains(&format!("--primary: {};", cobalt.primary_hsl)));
    assert!(!css.contains(&format!("--primary: {};", violet.primary_hsl)));
}

#[test]
fn two_handles_still_mean_one_element() {
    let registry = shared_registry();
    let violet = build_palette("#7C3AED", "#F97316");
    let cobalt = build_palette("#2563EB", "#0EA5E9");

    let first = ThemeInjection::apply(&registry, &violet, DEFAULT_SCOPE_ATTR);
    let second = ThemeInjection::apply(&registry, &cobalt, DEFAULT_SCOPE_ATTR);

    {
        let doc = registry.read().unwrap();
        assert_eq!(doc.len(), 1);
        assert!(doc
            .get(THEME_STYLE_ID)
            .unwrap()
            .contains(&format!("--primary: {};", cobalt.primary_hsl)));
    }

    // First teardown removes the element; the second is a no-op
    drop(first);
    assert!(!registry.read().unwrap().contains(THEME_STYLE_ID));
    drop(second);
    assert!(registry.read().unwrap().is_empty());
}

#[test]
fn drop_removes_the_themed_element() {
    let registry = shared_registry();
    let palette = build_palette("#059669", "#10B981");

    {
        let _injection = ThemeInjection::apply(&registry, &palette, DEFAULT_SCOPE_ATTR);
        assert!(registry.read().unwrap().contains(THEME_STYLE_ID));
    }

    assert!(registry.read().unwrap().is_empty());
}

#[test]
fn injection_leaves_unrelated_elements_alone() {
    let registry = shared_registry();
    registry
        .write()
        .unwrap()
        .apply("site-base", "body { margin: 0; }".into());

    let palette = build_palette("#DC2626", "#F59E0B");
    let injection = ThemeInjection::apply(&registry, &palette, DEFAULT_SCOPE_ATTR);
    assert_eq!(registry.read().unwrap().len(), 2);

    injection.release();
    let doc = registry.read().unwrap();
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.get("site-base"), Some("body { margin: 0; }"));
}
