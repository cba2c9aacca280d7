//! # ptk_core
//!
//! Stream filters and path utilities for ptk.
//!
//! - **lines**: per-line filters over standard input (existence check,
//!   append, regex replace)
//! - **path**: ancestor listing for a path

pub mod error;
pub mod lines;
pub mod path;

pub use error::{CoreError, CoreResult};
pub use lines::{append, process_lines, ExistenceFilter, LineReplacer};
pub use path::parents;
