//! # ptk_templates
//!
//! Data loading, context merging and template rendering for ptk.
//!
//! Rendering a template is a three step pipeline:
//!
//! - **Load**: every `--data` descriptor (`file://`, `yaml://`, `json://`) is
//!   parsed into a [`Document`]
//! - **Merge**: documents are folded into a [`RenderContext`] in order; nested
//!   mappings merge deeply and the first value seen for a leaf is kept
//! - **Render**: the template is evaluated against the context with the
//!   `base64encode` filter available
//!
//! ## Example
//!
//! ```rust
//! use ptk_templates::{load_document, RenderContext, TemplateRenderer};
//!
//! let documents = vec![
//!     load_document("yaml://app: {name: api}").unwrap(),
//!     load_document(r#"json://{"app": {"port": 8080}}"#).unwrap(),
//! ];
//! let context = RenderContext::from_documents(&documents);
//!
//! let rendered = TemplateRenderer::new()
//!     .render("{{ app.name }}:{{ app.port }}", &context)
//!     .unwrap();
//! assert_eq!(rendered, "api:8080");
//! ```

pub mod context;
pub mod error;
pub mod filters;
pub mod loader;
pub mod renderer;

pub use context::{merge_mappings, RenderContext};
pub use error::{TemplateError, TemplateResult};
pub use loader::{load_document, parse_document, DataSource, Document};
pub use renderer::{read_template, render_template, TemplateRenderer};
