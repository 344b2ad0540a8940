//! Template reference resolution.
//!
//! A reference is checked against three scopes in fixed order:
//! - a built-in alias (`v3`), never checked on disk
//! - a root-relative path (`/shared/page.vue`), joined to the project root
//! - anything else, joined to the directory of the node being built

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::builtin::BuiltinTemplates;
use crate::error::{TemplateError, TemplateResult};

/// Leading sentinel marking a reference as relative to the project root.
const ROOT_SENTINEL: char = '/';

/// Directory context a reference is resolved in.
#[derive(Debug, Clone, Copy)]
pub struct ResolveContext<'a> {
    /// Directory mirroring the node's position in the configuration tree.
    pub current_dir: &'a Path,
    /// Directory the tool was invoked from.
    pub project_root: &'a Path,
}

impl<'a> ResolveContext<'a> {
    pub fn new(current_dir: &'a Path, project_root: &'a Path) -> Self {
        Self {
            current_dir,
            project_root,
        }
    }
}

/// Resolves template references to existing template files.
#[derive(Debug, Clone)]
pub struct PathResolver {
    builtins: BuiltinTemplates,
}

impl PathResolver {
    /// Create a new resolver over a set of built-in aliases.
    pub fn new(builtins: BuiltinTemplates) -> Self {
        Self { builtins }
    }

    pub fn builtins(&self) -> &BuiltinTemplates {
        &self.builtins
    }

    /// Resolve the template reference of the node named `key`.
    pub fn resolve(
        &self,
        reference: Option<&str>,
        key: &str,
        context: ResolveContext<'_>,
    ) -> TemplateResult<PathBuf> {
        let reference = match reference.map(str::trim) {
            Some(r) if !r.is_empty() => r,
            _ => {
                return Err(TemplateError::InvalidReference {
                    key: key.to_string(),
                })
            }
        };

        if let Some(path) = self.builtins.get(reference) {
            debug!("Template '{}' resolved to built-in {:?}", reference, path);
            return Ok(path.to_path_buf());
        }

        let candidate = match reference.strip_prefix(ROOT_SENTINEL) {
            Some(relative) => context.project_root.join(relative),
            None => context.current_dir.join(reference),
        };

        if !candidate.is_file() {
            return Err(TemplateError::TemplateNotFound(candidate));
        }

        debug!("Template '{}' resolved to {:?}", reference, candidate);
        Ok(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn resolver() -> PathResolver {
        PathResolver::new(BuiltinTemplates::in_dir("/opt/strata/templates"))
    }

    #[test]
    fn test_builtin_alias_skips_disk() {
        let root = tempdir().unwrap();
        let ctx = ResolveContext::new(root.path(), root.path());

        let path = resolver().resolve(Some("v3s"), "index.vue", ctx).unwrap();
        assert_eq!(path, PathBuf::from("/opt/strata/templates/v3s.vue"));
    }

    #[test]
    fn test_root_relative() {
        let root = tempdir().unwrap();
        fs::create_dir_all(root.path().join("shared")).unwrap();
        fs::write(root.path().join("shared/base.vue"), "base").unwrap();

        let deep = root.path().join("a/b/c");
        let ctx = ResolveContext::new(&deep, root.path());
        let path = resolver().resolve(Some("/shared/base.vue"), "x", ctx).unwrap();
        assert_eq!(path, root.path().join("shared/base.vue"));
    }

    #[test]
    fn test_context_relative() {
        let root = tempdir().unwrap();
        let module = root.path().join("user");
        fs::create_dir_all(&module).unwrap();
        fs::write(module.join("local.tpl"), "local").unwrap();

        let ctx = ResolveContext::new(&module, root.path());
        let path = resolver().resolve(Some("local.tpl"), "index.vue", ctx).unwrap();
        assert_eq!(path, module.join("local.tpl"));
    }

    #[test]
    fn test_missing_file_reports_full_path() {
        let root = tempdir().unwrap();
        let ctx = ResolveContext::new(root.path(), root.path());

        let err = resolver().resolve(Some("nope.tpl"), "index.vue", ctx).unwrap_err();
        match err {
            TemplateError::TemplateNotFound(path) => assert_eq!(path, root.path().join("nope.tpl")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_reference() {
        let root = tempdir().unwrap();
        let ctx = ResolveContext::new(root.path(), root.path());

        for reference in [None, Some(""), Some("   ")] {
            let err = resolver().resolve(reference, "index.vue", ctx).unwrap_err();
            assert!(matches!(err, TemplateError::InvalidReference { ref key } if key == "index.vue"));
        }
    }
}
