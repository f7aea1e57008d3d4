pub mod content;
pub mod exclude;
pub mod pattern;
pub mod render;
pub mod walk;

use std::path::Path;

use crate::error::WalkError;
use crate::fs::FileSystem;
use crate::models::ContentPair;

pub use exclude::ExclusionRules;
pub use walk::{CancelFlag, ErrorPolicy, WalkOptions};

/// A rendered tree plus the file contents captured while walking it.
#[derive(Debug)]
pub struct RenderResult {
    /// Root name on the first line, then one line per entry; every line ends in `\n`.
    pub tree_text: String,
    pub contents: Vec<ContentPair>,
    /// Listing failures that were skipped rather than aborting the walk.
    pub failures: Vec<WalkError>,
}

/// Walk `root` and render it as a tree diagram.
pub async fn render_tree<F: FileSystem>(
    fs: &F,
    root: &Path,
    rules: &ExclusionRules,
    options: &WalkOptions,
) -> Result<RenderResult, WalkError> {
    if !fs.is_dir(root).await {
        return Err(WalkError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let output = walk::walk_dir(fs, root, rules, options).await?;

    let mut tree_text = crate::root_display_name(root);
    tree_text.push('\n');
    tree_text.push_str(&render::render_lines(&output.tree.lines()));

    Ok(RenderResult {
        tree_text,
        contents: output.contents,
        failures: output.failures,
    })
}
