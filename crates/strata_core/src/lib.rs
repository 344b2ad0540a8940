//! # strata_core
//!
//! Structure resolution and rendering engine for strata.
//!
//! # Architecture
//!
//! - **Config**: the configuration tree, directories and file leaves
//! - **Builder**: walks the configuration and binds every leaf to a template
//! - **Tree**: the resolved render tree, one `RenderSpec` per file
//! - **Materializer**: writes a render tree to disk without removing anything
//! - **Answers**: non-interactive providers of configuration trees
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use strata_core::{load_config, Materializer, TreeBuilder};
//! use strata_templates::{BuiltinTemplates, PathResolver, PlaceholderRenderer};
//!
//! let config = load_config(Path::new("layout.yaml"))?;
//! let builder = TreeBuilder::new(PathResolver::new(BuiltinTemplates::shipped()), project_root);
//! let tree = builder.build(&config)?;
//!
//! let materializer = Materializer::new(Arc::new(PlaceholderRenderer::new()));
//! let report = materializer.materialize(&output_root, &tree).await?;
//! ```

pub mod answers;
pub mod builder;
pub mod config;
pub mod error;
pub mod materializer;
pub mod naming;
pub mod tree;

pub use answers::{default_content, AnswerProvider, ModuleAnswers};
pub use builder::TreeBuilder;
pub use config::{load_config, ConfigNode, DirectoryNode, FileNode, FIELD_KEY, TEMPLATE_KEY};
pub use error::{CoreError, CoreResult};
pub use materializer::{MaterializeReport, Materializer};
pub use naming::{CAMEL_IDENTIFIER_VAR, IDENTIFIER_VAR, LOGICAL_PATH_VAR, NAME_VAR};
pub use tree::{RenderNode, RenderSpec, RenderTree};
