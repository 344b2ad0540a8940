//! The render contract and the default placeholder backend.
//!
//! Any templating backend plugs in behind [`RenderBackend`]: it receives the
//! raw template text plus the variable bag of one file and returns the final
//! text. Backends must be deterministic for fixed inputs.

use regex::{Captures, Regex};
use serde_json::Value;

use crate::error::TemplateResult;

/// Ordered variable bag handed to a backend.
pub type Variables = serde_json::Map<String, Value>;

/// Turns template text plus variables into output text.
pub trait RenderBackend: Send + Sync {
    fn render(&self, template: &str, variables: &Variables) -> TemplateResult<String>;
}

/// Substitutes `{{ key }}` placeholders.
///
/// Placeholders without a matching variable are left verbatim, so a template
/// that mentions `{{ unknown }}` renders with that token intact.
pub struct PlaceholderRenderer {
    variable_pattern: Regex,
}

impl Default for PlaceholderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaceholderRenderer {
    /// Create a new placeholder renderer.
    pub fn new() -> Self {
        Self {
            // {{name}} or {{ name }}
            variable_pattern: Regex::new(r"\{\{\s*([a-zA-Z_][a-zA-Z0-9_]*)\s*\}\}")
                .expect("placeholder pattern is valid"),
        }
    }

    /// Render content by replacing every known placeholder.
    pub fn render_content(&self, content: &str, variables: &Variables) -> String {
        self.variable_pattern
            .replace_all(content, |caps: &Captures| match variables.get(&caps[1]) {
                Some(value) => value_to_text(value),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}

impl RenderBackend for PlaceholderRenderer {
    fn render(&self, template: &str, variables: &Variables) -> TemplateResult<String> {
        Ok(self.render_content(template, variables))
    }
}

/// Text inserted for a variable value.
fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
