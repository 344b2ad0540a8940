//! Built-in template aliases.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Alias and file name of every template shipped with the tool.
const SHIPPED: [(&str, &str); 3] = [("v2", "v2.vue"), ("v3", "v3.vue"), ("v3s", "v3s.vue")];

/// Fixed mapping from symbolic template names to absolute template paths.
#[derive(Debug, Clone)]
pub struct BuiltinTemplates {
    templates: BTreeMap<String, PathBuf>,
    templates_path: PathBuf,
}

impl BuiltinTemplates {
    /// Templates shipped alongside this crate.
    pub fn shipped() -> Self {
        Self::in_dir(Self::shipped_dir())
    }

    /// Directory holding the shipped template files.
    pub fn shipped_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")
    }

    /// Register the built-in aliases against another templates directory.
    pub fn in_dir(templates_path: impl Into<PathBuf>) -> Self {
        let templates_path = templates_path.into();
        let templates = SHIPPED
            .iter()
            .map(|(alias, file)| (alias.to_string(), templates_path.join(file)))
            .collect();

        Self {
            templates,
            templates_path,
        }
    }

    /// Register one more alias, replacing any existing one of the same name.
    pub fn with_alias(mut self, alias: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.templates.insert(alias.into(), path.into());
        self
    }

    /// Get the path registered for an alias.
    pub fn get(&self, alias: &str) -> Option<&Path> {
        self.templates.get(alias).map(PathBuf::as_path)
    }

    /// Check if an alias is registered.
    pub fn exists(&self, alias: &str) -> bool {
        self.templates.contains_key(alias)
    }

    /// Registered aliases in sorted order.
    pub fn aliases(&self) -> Vec<&str> {
        self.templates.keys().map(String::as_str).collect()
    }

    /// Registered aliases whose template file is absent on disk.
    pub fn missing(&self) -> Vec<(&str, &Path)> {
        self.templates
            .iter()
            .filter(|(_, path)| !path.is_file())
            .map(|(alias, path)| (alias.as_str(), path.as_path()))
            .collect()
    }

    /// Directory the aliases point into.
    pub fn templates_path(&self) -> &Path {
        &self.templates_path
    }
}
