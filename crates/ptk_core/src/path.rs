//! Path helpers.

use std::path::{Path, PathBuf};

/// The path followed by each of its ancestors, ending at the root.
///
/// Relative paths end at `.` rather than an empty path.
pub fn parents(path: &Path) -> Vec<PathBuf> {
    let mut chain: Vec<PathBuf> = path
        .ancestors()
        .map(|p| {
            if p.as_os_str().is_empty() {
                PathBuf::from(".")
            } else {
                p.to_path_buf()
            }
        })
        .collect();

    // `.` has itself as a parent once the empty path is mapped.
    chain.dedup();
    chain
}
