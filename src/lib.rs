pub mod app;
pub mod cli;
pub mod core;
pub mod error;
pub mod fs;
pub mod models;
pub mod output;
pub mod prefs;

use std::path::Path;

/// Name printed on the first line of the tree.
///
/// Paths without a final component (`.`, `..`, `/`) are resolved first so
/// the real directory name is shown.
pub fn root_display_name(root_path: &Path) -> String {
    if let Some(name) = root_path.file_name() {
        return name.to_string_lossy().into_owned();
    }

    std::fs::canonicalize(root_path)
        .ok()
        .and_then(|resolved| {
            resolved
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| root_path.as_os_str().to_string_lossy().into_owned())
}
