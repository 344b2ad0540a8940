//! Configuration tree model and loading.
//!
//! A configuration document is a nested mapping. Every mapping that carries
//! both a `template` and a `field` key describes one output file; any other
//! mapping is a directory. String values are written out verbatim.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use strata_templates::Variables;

use crate::error::{CoreError, CoreResult};

/// Key holding a file node's template reference.
pub const TEMPLATE_KEY: &str = "template";

/// Key holding a file node's field bag.
pub const FIELD_KEY: &str = "field";

/// Marker key `toml` uses when a datetime is deserialized into a generic value.
const TOML_DATETIME_KEY: &str = "$__toml_private_datetime";

/// A node of the configuration tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigNode {
    Directory(DirectoryNode),
    File(FileNode),
    /// File whose content is given inline.
    Literal(String),
}

/// Directory entries in declaration order. Keys are unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectoryNode {
    entries: Vec<(String, ConfigNode)>,
}

impl DirectoryNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry. A repeated key replaces the earlier node in place.
    pub fn insert(&mut self, key: impl Into<String>, node: ConfigNode) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = node,
            None => self.entries.push((key, node)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, node: ConfigNode) -> Self {
        self.insert(key, node);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ConfigNode> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, n)| n)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &ConfigNode)> {
        self.entries.iter().map(|(k, n)| (k.as_str(), n))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One output file rendered from a template.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileNode {
    /// Template reference; `None` when the document left it null.
    pub template: Option<String>,
    /// Caller-declared variables for the template.
    pub fields: Variables,
}

impl FileNode {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: Some(template.into()),
            fields: Variables::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }
}

impl From<DirectoryNode> for ConfigNode {
    fn from(dir: DirectoryNode) -> Self {
        ConfigNode::Directory(dir)
    }
}

impl From<FileNode> for ConfigNode {
    fn from(file: FileNode) -> Self {
        ConfigNode::File(file)
    }
}

impl ConfigNode {
    /// Classify a parsed document. The root must be a mapping.
    pub fn from_value(value: Value) -> CoreResult<Self> {
        match value {
            Value::Object(_) => node_from_value(Vec::new(), value),
            other => Err(CoreError::ambiguity(
                &[],
                format!("expected a mapping at the root, found {}", kind(&other)),
            )),
        }
    }

    pub fn as_directory(&self) -> Option<&DirectoryNode> {
        match self {
            ConfigNode::Directory(dir) => Some(dir),
            _ => None,
        }
    }
}

fn node_from_value(path: Vec<String>, value: Value) -> CoreResult<ConfigNode> {
    match value {
        Value::String(text) => Ok(ConfigNode::Literal(text)),
        Value::Object(_) if toml_datetime(&value).is_some() => Err(CoreError::ambiguity(
            &path,
            "expected a mapping or a string, found a datetime",
        )),
        Value::Object(mut map) => {
            let has_template = map.contains_key(TEMPLATE_KEY);
            let has_field = map.contains_key(FIELD_KEY);

            match (has_template, has_field) {
                (true, true) => {
                    let template = match map.remove(TEMPLATE_KEY) {
                        Some(Value::String(s)) => Some(s),
                        Some(Value::Null) | None => None,
                        Some(other) => {
                            return Err(CoreError::ambiguity(
                                &path,
                                format!("`{TEMPLATE_KEY}` must be a string, found {}", kind(&other)),
                            ))
                        }
                    };
                    let fields = match map.remove(FIELD_KEY) {
                        Some(Value::Object(fields)) => fields
                            .into_iter()
                            .map(|(name, value)| (name, normalize_field(value)))
                            .collect(),
                        Some(other) => {
                            return Err(CoreError::ambiguity(
                                &path,
                                format!("`{FIELD_KEY}` must be a mapping, found {}", kind(&other)),
                            ))
                        }
                        None => Variables::new(),
                    };
                    for extra in map.keys() {
                        warn!("Ignoring unknown key '{}' on file node {}", extra, path.join("/"));
                    }
                    Ok(ConfigNode::File(FileNode { template, fields }))
                }
                (true, false) | (false, true) => {
                    let (present, absent) = if has_template {
                        (TEMPLATE_KEY, FIELD_KEY)
                    } else {
                        (FIELD_KEY, TEMPLATE_KEY)
                    };
                    Err(CoreError::ambiguity(
                        &path,
                        format!("has `{present}` but no `{absent}`; a file needs both"),
                    ))
                }
                (false, false) => {
                    let mut dir = DirectoryNode::new();
                    for (key, child) in map {
                        validate_key(&path, &key)?;
                        let mut child_path = path.clone();
                        child_path.push(key.clone());
                        dir.insert(key, node_from_value(child_path, child)?);
                    }
                    Ok(ConfigNode::Directory(dir))
                }
            }
        }
        other => Err(CoreError::ambiguity(
            &path,
            format!("expected a mapping or a string, found {}", kind(&other)),
        )),
    }
}

/// Check that a key names a single entry inside its parent directory.
pub fn validate_key(path: &[String], key: &str) -> CoreResult<()> {
    let reason = if key.is_empty() {
        Some("empty key")
    } else if key == "." || key == ".." {
        Some("key refers to a relative directory")
    } else if key.contains('/') || key.contains('\\') || Path::new(key).is_absolute() {
        Some("key contains a path separator")
    } else {
        None
    };

    match reason {
        Some(reason) => {
            let mut key_path = path.to_vec();
            key_path.push(key.to_string());
            Err(CoreError::ambiguity(&key_path, reason))
        }
        None => Ok(()),
    }
}

/// The datetime text when `value` is a deserialized TOML datetime.
fn toml_datetime(value: &Value) -> Option<&str> {
    match value {
        Value::Object(map) if map.len() == 1 => map.get(TOML_DATETIME_KEY).and_then(Value::as_str),
        _ => None,
    }
}

/// Replace TOML datetimes inside a field value with their text form.
fn normalize_field(value: Value) -> Value {
    if let Some(text) = toml_datetime(&value) {
        return Value::String(text.to_string());
    }
    match value {
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_field).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(name, value)| (name, normalize_field(value)))
                .collect(),
        ),
        other => other,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a mapping",
    }
}

/// Load a configuration document from a `.json`, `.yaml`/`.yml` or `.toml` file.
pub fn load_config(path: &Path) -> CoreResult<ConfigNode> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    debug!("Loading configuration from {:?}", path);
    let content = fs::read_to_string(path)?;

    let value: Value = match extension.as_deref() {
        Some("json") => serde_json::from_str(&content)?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
        Some("toml") => toml::from_str(&content)?,
        _ => return Err(CoreError::UnsupportedFormat(path.to_path_buf())),
    };

    ConfigNode::from_value(value)
}
