//! Configuration tree to render tree.
//!
//! The walk is depth-first and pre-order. Each directory hands its children
//! a fresh breadcrumb, so naming for one file never depends on its siblings.
//! Any unresolvable template aborts the whole build.

use std::path::{Path, PathBuf};

use tracing::debug;

use strata_templates::{PathResolver, ResolveContext};

use crate::config::{validate_key, ConfigNode, DirectoryNode, FileNode};
use crate::error::{CoreError, CoreResult};
use crate::naming::derived_variables;
use crate::tree::{RenderNode, RenderSpec, RenderTree};

/// Builds render trees from configuration trees.
pub struct TreeBuilder {
    resolver: PathResolver,
    project_root: PathBuf,
}

impl TreeBuilder {
    /// Create a builder resolving root-relative references against `project_root`.
    pub fn new(resolver: PathResolver, project_root: impl Into<PathBuf>) -> Self {
        Self {
            resolver,
            project_root: project_root.into(),
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Resolve every file of `root`. The root must be a directory.
    pub fn build(&self, root: &ConfigNode) -> CoreResult<RenderTree> {
        match root {
            ConfigNode::Directory(dir) => self.build_directory(dir, &[], &self.project_root),
            _ => Err(CoreError::ambiguity(
                &[],
                "the configuration root must be a directory",
            )),
        }
    }

    fn build_directory(
        &self,
        dir: &DirectoryNode,
        breadcrumb: &[String],
        current_dir: &Path,
    ) -> CoreResult<RenderTree> {
        let mut tree = RenderTree::new();

        for (key, node) in dir.entries() {
            validate_key(breadcrumb, key)?;
            let rendered = match node {
                ConfigNode::Directory(child) => {
                    let mut child_crumbs = breadcrumb.to_vec();
                    child_crumbs.push(key.to_string());
                    let child_dir = current_dir.join(key);
                    RenderNode::Directory(self.build_directory(child, &child_crumbs, &child_dir)?)
                }
                ConfigNode::File(file) => {
                    RenderNode::File(self.build_file(file, key, breadcrumb, current_dir)?)
                }
                ConfigNode::Literal(text) => RenderNode::Literal(text.clone()),
            };
            tree.push(key, rendered);
        }

        Ok(tree)
    }

    fn build_file(
        &self,
        file: &FileNode,
        key: &str,
        breadcrumb: &[String],
        current_dir: &Path,
    ) -> CoreResult<RenderSpec> {
        let mut variables = derived_variables(breadcrumb, key);
        for (name, value) in &file.fields {
            variables.insert(name.clone(), value.clone());
        }

        let context = ResolveContext::new(current_dir, &self.project_root);
        let template = self
            .resolver
            .resolve(file.template.as_deref(), key, context)?;

        debug!("Bound {}/{} to {:?}", breadcrumb.join("/"), key, template);
        Ok(RenderSpec {
            template,
            variables,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::{IDENTIFIER_VAR, LOGICAL_PATH_VAR};
    use strata_templates::{BuiltinTemplates, TemplateError};

    fn builder() -> TreeBuilder {
        TreeBuilder::new(
            PathResolver::new(BuiltinTemplates::in_dir("/opt/strata/templates")),
            "/work/app",
        )
    }

    fn spec<'a>(tree: &'a RenderTree, path: &[&str]) -> &'a RenderSpec {
        let (last, dirs) = path.split_last().unwrap();
        let mut current = tree;
        for dir in dirs {
            match current.get(dir) {
                Some(RenderNode::Directory(child)) => current = child,
                other => panic!("expected directory at {dir}, found {other:?}"),
            }
        }
        match current.get(last) {
            Some(RenderNode::File(spec)) => spec,
            other => panic!("expected file at {last}, found {other:?}"),
        }
    }

    #[test]
    fn test_one_spec_per_leaf() {
        let config = ConfigNode::from(
            DirectoryNode::new()
                .with(
                    "user",
                    DirectoryNode::new()
                        .with("index.vue", FileNode::new("v3").into())
                        .with("edit.vue", FileNode::new("v2").into())
                        .into(),
                )
                .with(
                    "order",
                    DirectoryNode::new()
                        .with("detail.vue", FileNode::new("v3s").into())
                        .into(),
                ),
        );

        let tree = builder().build(&config).unwrap();
        assert_eq!(tree.file_count(), 3);
        assert_eq!(tree.files().len(), 3);

        let detail = spec(&tree, &["order", "detail.vue"]);
        assert_eq!(detail.template, PathBuf::from("/opt/strata/templates/v3s.vue"));
        assert_eq!(detail.variables[IDENTIFIER_VAR], "OrderDetail");
        assert_eq!(detail.variables[LOGICAL_PATH_VAR], "order/detail");
    }

    #[test]
    fn test_sibling_rename_does_not_affect_naming() {
        let make = |sibling: &str| {
            ConfigNode::from(
                DirectoryNode::new().with(
                    "user",
                    DirectoryNode::new()
                        .with(sibling, DirectoryNode::new().with("x.vue", FileNode::new("v3").into()).into())
                        .with("index.vue", FileNode::new("v3").into())
                        .into(),
                ),
            )
        };

        let first = builder().build(&make("profile")).unwrap();
        let second = builder().build(&make("settings")).unwrap();

        assert_eq!(
            spec(&first, &["user", "index.vue"]),
            spec(&second, &["user", "index.vue"])
        );
        assert_eq!(
            spec(&first, &["user", "index.vue"]).variables[IDENTIFIER_VAR],
            "UserIndex"
        );
    }

    #[test]
    fn test_declared_fields_win_on_collision() {
        let config = ConfigNode::from(DirectoryNode::new().with(
            "index.vue",
            FileNode::new("v3")
                .with_field("identifier", "Custom")
                .with_field("content", "Home")
                .into(),
        ));

        let tree = builder().build(&config).unwrap();
        let index = spec(&tree, &["index.vue"]);
        assert_eq!(index.variables[IDENTIFIER_VAR], "Custom");
        assert_eq!(index.variables["content"], "Home");
        assert_eq!(index.variables[LOGICAL_PATH_VAR], "index");
    }

    #[test]
    fn test_missing_reference_aborts_build() {
        let config = ConfigNode::from(
            DirectoryNode::new()
                .with("ok.vue", FileNode::new("v3").into())
                .with(
                    "user",
                    DirectoryNode::new()
                        .with("index.vue", ConfigNode::File(FileNode::default()))
                        .into(),
                ),
        );

        let err = builder().build(&config).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Template(TemplateError::InvalidReference { ref key }) if key == "index.vue"
        ));
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_escaping_key_rejected_before_resolution() {
        let config = ConfigNode::from(
            DirectoryNode::new().with(
                "..",
                DirectoryNode::new()
                    .with("index.vue", FileNode::new("v3").into())
                    .into(),
            ),
        );

        let err = builder().build(&config).unwrap_err();
        assert!(matches!(err, CoreError::StructuralAmbiguity { ref path, .. } if path == ".."));
    }

    #[test]
    fn test_root_must_be_directory() {
        let err = builder()
            .build(&ConfigNode::Literal("text".to_string()))
            .unwrap_err();
        assert!(matches!(err, CoreError::StructuralAmbiguity { .. }));
    }
}
