//! # strata_templates
//!
//! Template lookup and rendering for strata.
//!
//! This crate knows where a template lives and how variables get into it:
//!
//! - Built-in aliases shipped with the tool (`v2`, `v3`, `v3s`)
//! - Resolution of root-relative and node-relative template references
//! - The render contract and its default `{{ placeholder }}` backend
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use strata_templates::{BuiltinTemplates, PathResolver, ResolveContext};
//!
//! let resolver = PathResolver::new(BuiltinTemplates::shipped());
//! let root = Path::new("/work/app");
//! let user_dir = root.join("user");
//! let ctx = ResolveContext::new(&user_dir, root);
//!
//! let template = resolver.resolve(Some("v3"), "index.vue", ctx).unwrap();
//! ```

pub mod builtin;
pub mod error;
pub mod renderer;
pub mod resolver;

pub use builtin::BuiltinTemplates;
pub use error::{TemplateError, TemplateResult};
pub use renderer::{PlaceholderRenderer, RenderBackend, Variables};
pub use resolver::{PathResolver, ResolveContext};
