//! Integration tests for template resolution and rendering.

use std::fs;

use serde_json::json;
use strata_templates::{
    BuiltinTemplates, PathResolver, PlaceholderRenderer, RenderBackend, ResolveContext,
    TemplateError, Variables,
};
use tempfile::tempdir;

fn variables(value: serde_json::Value) -> Variables {
    value.as_object().cloned().unwrap_or_default()
}

#[test]
fn test_render_shipped_template() {
    let resolver = PathResolver::new(BuiltinTemplates::shipped());
    let root = tempdir().unwrap();
    let ctx = ResolveContext::new(root.path(), root.path());

    let path = resolver.resolve(Some("v3s"), "index.vue", ctx).unwrap();
    let text = fs::read_to_string(path).unwrap();

    let vars = variables(json!({
        "name": "index",
        "identifier": "UserIndex",
        "logical_path": "user/index",
        "content": "User list page"
    }));
    let rendered = PlaceholderRenderer::new().render(&text, &vars).unwrap();

    assert!(rendered.contains("defineOptions({ name: 'UserIndex' })"));
    assert!(rendered.contains("// route: /user/index"));
    assert!(rendered.contains("ref('User list page')"));
    // Vue's own interpolation is not a known variable and survives rendering.
    assert!(rendered.contains("<h1>{{ title }}</h1>"));
}

#[test]
fn test_root_relative_ignores_depth() {
    let root = tempdir().unwrap();
    fs::create_dir_all(root.path().join("shared")).unwrap();
    fs::write(root.path().join("shared/base"), "base").unwrap();

    let resolver = PathResolver::new(BuiltinTemplates::shipped());
    let deep = root.path().join("a").join("b").join("c");

    let from_deep = resolver
        .resolve(Some("/shared/base"), "f", ResolveContext::new(&deep, root.path()))
        .unwrap();
    let from_top = resolver
        .resolve(
            Some("/shared/base"),
            "f",
            ResolveContext::new(root.path(), root.path()),
        )
        .unwrap();

    assert_eq!(from_deep, from_top);
}

#[test]
fn test_context_relative_depends_on_module() {
    let root = tempdir().unwrap();
    for module in ["moduleA", "moduleB"] {
        let dir = root.path().join(module);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("local.tpl"), module).unwrap();
    }

    let resolver = PathResolver::new(BuiltinTemplates::shipped());
    let a_dir = root.path().join("moduleA");
    let b_dir = root.path().join("moduleB");

    let a = resolver
        .resolve(Some("local.tpl"), "f", ResolveContext::new(&a_dir, root.path()))
        .unwrap();
    let b = resolver
        .resolve(Some("local.tpl"), "f", ResolveContext::new(&b_dir, root.path()))
        .unwrap();

    assert_ne!(a, b);
}

#[test]
fn test_root_relative_missing() {
    let root = tempdir().unwrap();
    let resolver = PathResolver::new(BuiltinTemplates::shipped());

    let err = resolver
        .resolve(
            Some("/shared/missing.vue"),
            "f",
            ResolveContext::new(root.path(), root.path()),
        )
        .unwrap_err();

    assert!(matches!(err, TemplateError::TemplateNotFound(p) if p == root.path().join("shared/missing.vue")));
}
