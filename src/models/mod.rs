mod content;
mod entry;
mod rules;
mod tree;

pub use content::{ContentPair, FileContent};
pub use entry::{EntryKind, FsEntry};
pub use rules::{DEFAULT_EXCLUDE_DIRS, DEFAULT_EXCLUDE_FILES, ExclusionRuleSet};
pub use tree::{DirTree, TreeLine, TreeNode};
