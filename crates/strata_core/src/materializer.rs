//! Writing a render tree to disk.
//!
//! Existing directories are reused and existing files overwritten in place;
//! nothing is ever removed. Work is sequential in configuration order.
//! A file that fails to render is recorded and skipped. A directory that
//! cannot be created skips its own subtree only.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::Arc;

use tokio::fs;
use tracing::{error, info};

use strata_templates::RenderBackend;

use crate::error::{CoreError, CoreResult};
use crate::tree::{RenderNode, RenderSpec, RenderTree};

/// Outcome of one materialization run.
#[derive(Debug, Default)]
pub struct MaterializeReport {
    /// Directories that did not exist and were created.
    pub created_dirs: Vec<PathBuf>,
    /// Directories that already existed.
    pub reused_dirs: Vec<PathBuf>,
    /// Files written, in write order.
    pub written_files: Vec<PathBuf>,
    /// `DirectoryCreateFailure` and `RenderFailure` entries.
    pub failures: Vec<CoreError>,
}

impl MaterializeReport {
    /// Whether any subtree was skipped because its directory could not be created.
    pub fn has_aborts(&self) -> bool {
        self.failures
            .iter()
            .any(|e| matches!(e, CoreError::DirectoryCreateFailure { .. }))
    }

    /// Number of files that failed to render or write.
    pub fn failed_files(&self) -> usize {
        self.failures
            .iter()
            .filter(|e| matches!(e, CoreError::RenderFailure { .. }))
            .count()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Writes render trees through a render backend.
pub struct Materializer {
    backend: Arc<dyn RenderBackend>,
}

impl Materializer {
    pub fn new(backend: Arc<dyn RenderBackend>) -> Self {
        Self { backend }
    }

    /// Write `tree` below `root`. Only a failure to create `root` itself is returned as an error.
    pub async fn materialize(&self, root: &Path, tree: &RenderTree) -> CoreResult<MaterializeReport> {
        let mut report = MaterializeReport::default();
        self.ensure_directory(root, &mut report).await?;
        self.write_entries(root, tree, &mut report).await;

        info!(
            "Materialized {} file(s) under {:?} ({} failure(s))",
            report.written_files.len(),
            root,
            report.failures.len()
        );
        Ok(report)
    }

    fn write_entries<'a>(
        &'a self,
        dir: &'a Path,
        tree: &'a RenderTree,
        report: &'a mut MaterializeReport,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        Box::pin(async move {
            for (key, node) in tree.entries() {
                let path = dir.join(key);
                match node {
                    RenderNode::Directory(child) => {
                        match self.ensure_directory(&path, report).await {
                            Ok(()) => self.write_entries(&path, child, report).await,
                            Err(e) => {
                                error!("{}", e);
                                report.failures.push(e);
                            }
                        }
                    }
                    RenderNode::File(spec) => {
                        let result = match self.render(spec, &path).await {
                            Ok(text) => self.write_file(&path, &text).await,
                            Err(e) => Err(e),
                        };
                        self.record_file(path, result, report);
                    }
                    RenderNode::Literal(text) => {
                        let result = self.write_file(&path, text).await;
                        self.record_file(path, result, report);
                    }
                }
            }
        })
    }

    async fn ensure_directory(&self, path: &Path, report: &mut MaterializeReport) -> CoreResult<()> {
        let exists = fs::metadata(path)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false);

        if exists {
            info!("Directory exists, updating contents: {:?}", path);
            report.reused_dirs.push(path.to_path_buf());
            return Ok(());
        }

        fs::create_dir_all(path)
            .await
            .map_err(|source| CoreError::DirectoryCreateFailure {
                path: path.to_path_buf(),
                source,
            })?;
        info!("Created directory: {:?}", path);
        report.created_dirs.push(path.to_path_buf());
        Ok(())
    }

    async fn render(&self, spec: &RenderSpec, output: &Path) -> CoreResult<String> {
        let text = fs::read_to_string(&spec.template)
            .await
            .map_err(|e| CoreError::RenderFailure {
                path: output.to_path_buf(),
                message: format!("cannot read template {}: {}", spec.template.display(), e),
            })?;

        self.backend
            .render(&text, &spec.variables)
            .map_err(|e| CoreError::RenderFailure {
                path: output.to_path_buf(),
                message: format!("template {}: {}", spec.template.display(), e),
            })
    }

    async fn write_file(&self, path: &Path, content: &str) -> CoreResult<()> {
        fs::write(path, content)
            .await
            .map_err(|e| CoreError::RenderFailure {
                path: path.to_path_buf(),
                message: format!("cannot write file: {}", e),
            })
    }

    fn record_file(&self, path: PathBuf, result: CoreResult<()>, report: &mut MaterializeReport) {
        match result {
            Ok(()) => {
                info!("Wrote file: {:?}", path);
                report.written_files.push(path);
            }
            Err(e) => {
                error!("{}", e);
                report.failures.push(e);
            }
        }
    }
}
