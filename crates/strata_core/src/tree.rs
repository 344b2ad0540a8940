//! The resolved render tree.

use std::path::{Path, PathBuf};

use strata_templates::Variables;

/// Bound unit of work: the template to read and the variables to render it with.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSpec {
    pub template: PathBuf,
    pub variables: Variables,
}

/// A node of the resolved tree.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderNode {
    Directory(RenderTree),
    File(RenderSpec),
    Literal(String),
}

/// Directory of resolved nodes, in configuration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderTree {
    entries: Vec<(String, RenderNode)>,
}

impl RenderTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, node: RenderNode) {
        self.entries.push((key.into(), node));
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &RenderNode)> {
        self.entries.iter().map(|(k, n)| (k.as_str(), n))
    }

    pub fn get(&self, key: &str) -> Option<&RenderNode> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, n)| n)
    }

    /// Number of files the tree will write.
    pub fn file_count(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, node)| match node {
                RenderNode::Directory(tree) => tree.file_count(),
                RenderNode::File(_) | RenderNode::Literal(_) => 1,
            })
            .sum()
    }

    /// Every templated file with its path relative to the tree root.
    pub fn files(&self) -> Vec<(PathBuf, &RenderSpec)> {
        let mut files = Vec::new();
        self.collect_files(Path::new(""), &mut files);
        files
    }

    fn collect_files<'a>(&'a self, prefix: &Path, out: &mut Vec<(PathBuf, &'a RenderSpec)>) {
        for (key, node) in &self.entries {
            let path = prefix.join(key);
            match node {
                RenderNode::Directory(tree) => tree.collect_files(&path, out),
                RenderNode::File(spec) => out.push((path, spec)),
                RenderNode::Literal(_) => {}
            }
        }
    }
}
