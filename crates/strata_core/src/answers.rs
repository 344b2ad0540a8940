//! Answer providers turn user input into a finished configuration tree.

use crate::config::{ConfigNode, DirectoryNode, FileNode};
use crate::error::{CoreError, CoreResult};

/// Extension given to generated module pages.
const PAGE_EXTENSION: &str = "vue";

/// Supplies the configuration tree for a run.
pub trait AnswerProvider {
    fn answers(&self) -> CoreResult<ConfigNode>;
}

/// Non-interactive answers for generating module pages.
///
/// Produces `{ <module>: { "<file>.vue": { template, field: { content } } } }`
/// for every module and file name.
#[derive(Debug, Clone)]
pub struct ModuleAnswers {
    modules: Vec<String>,
    files: Vec<String>,
    template: String,
    content: Option<String>,
}

impl ModuleAnswers {
    pub fn new(modules: Vec<String>, template: impl Into<String>) -> Self {
        Self {
            modules,
            files: vec!["index".to_string()],
            template: template.into(),
            content: None,
        }
    }

    pub fn with_files(mut self, files: Vec<String>) -> Self {
        self.files = files;
        self
    }

    /// Use one description for every page instead of the per-page defaults.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Split a comma-separated list, dropping blank items.
    pub fn parse_list(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}

impl AnswerProvider for ModuleAnswers {
    fn answers(&self) -> CoreResult<ConfigNode> {
        if self.modules.is_empty() {
            return Err(CoreError::ambiguity(&[], "no module names given"));
        }
        if self.files.is_empty() {
            return Err(CoreError::ambiguity(&[], "no file names given"));
        }

        let mut root = DirectoryNode::new();
        for module in &self.modules {
            let mut pages = DirectoryNode::new();
            for file in &self.files {
                let content = self
                    .content
                    .clone()
                    .unwrap_or_else(|| default_content(module, file));
                pages.insert(
                    format!("{file}.{PAGE_EXTENSION}"),
                    FileNode::new(self.template.clone())
                        .with_field("content", content)
                        .into(),
                );
            }
            root.insert(module.clone(), pages.into());
        }
        Ok(root.into())
    }
}

/// Default description for a page.
pub fn default_content(module: &str, file: &str) -> String {
    match file {
        "index" => format!("{module} list page"),
        "edit" => format!("Edit {module}"),
        "detail" => format!("{module} detail page"),
        "create" => format!("Create {module}"),
        _ => format!("{module} page"),
    }
}
