use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::WalkError;
use crate::fs::FileSystem;
use crate::models::{ContentPair, DirTree, EntryKind, FsEntry, TreeNode};

use super::content;
use super::exclude::ExclusionRules;

/// What to do when a subdirectory cannot be listed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ErrorPolicy {
    /// Keep the directory in the tree, annotate it, record the failure and move on.
    #[default]
    Skip,
    /// Stop the walk and return the listing error.
    Abort,
}

/// Cooperative cancellation, checked before every directory visit.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Configuration options for directory traversal.
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// Whether to show only directories
    pub dirs_only: bool,
    /// Whether to capture the text of every rendered file
    pub show_contents: bool,
    /// Maximum depth to traverse (None means unlimited)
    pub max_depth: Option<usize>,
    /// Maximum number of rendered entries before the walk gives up
    pub max_entries: Option<usize>,
    pub on_error: ErrorPolicy,
    pub cancel: Option<CancelFlag>,
}

#[derive(Debug, Default)]
pub struct WalkOutput {
    pub tree: DirTree,
    /// Captured file contents in traversal order.
    pub contents: Vec<ContentPair>,
    /// Subdirectories that could not be listed under [`ErrorPolicy::Skip`].
    pub failures: Vec<WalkError>,
}

struct WalkContext<'a, F> {
    fs: &'a F,
    rules: &'a ExclusionRules,
    options: &'a WalkOptions,
}

#[derive(Default)]
struct WalkState {
    entries_seen: usize,
    contents: Vec<ContentPair>,
    failures: Vec<WalkError>,
}

/// Walk a directory tree with the given exclusions and options.
///
/// This is the public entry point that starts traversal at depth 0.
/// Failing to list `root` itself is always an error, whatever the policy.
pub async fn walk_dir<F: FileSystem>(
    fs: &F,
    root: &Path,
    rules: &ExclusionRules,
    options: &WalkOptions,
) -> Result<WalkOutput, WalkError> {
    let ctx = WalkContext { fs, rules, options };
    let mut state = WalkState::default();

    let children = walk_dir_internal(&ctx, &mut state, root, Path::new(""), 0).await?;

    Ok(WalkOutput {
        tree: DirTree { children },
        contents: state.contents,
        failures: state.failures,
    })
}

/// Internal recursive function that tracks current depth and the relative path of `dir`.
async fn walk_dir_internal<F: FileSystem>(
    ctx: &WalkContext<'_, F>,
    state: &mut WalkState,
    dir: &Path,
    relative: &Path,
    current_depth: usize,
) -> Result<Vec<TreeNode>, WalkError> {
    if ctx.options.cancel.as_ref().is_some_and(CancelFlag::is_cancelled) {
        return Err(WalkError::Cancelled);
    }

    log::debug!("listing {}", dir.display());
    let entries = ctx
        .fs
        .read_dir(dir)
        .await
        .map_err(|source| WalkError::ListDir {
            path: dir.to_path_buf(),
            source,
        })?;

    let entries = filter_and_sort(entries, relative, ctx.rules, ctx.options.dirs_only);

    let mut children = Vec::with_capacity(entries.len());
    for (entry_relative, entry) in entries {
        state.entries_seen += 1;
        if let Some(limit) = ctx.options.max_entries
            && state.entries_seen > limit
        {
            return Err(WalkError::EntryLimit { limit });
        }

        let mut node = TreeNode {
            name: entry.name,
            kind: entry.kind,
            error: None,
            children: Vec::new(),
        };

        match entry.kind {
            EntryKind::Directory => {
                // Note: max_depth 1 means "show 1 level of children", so at depth 0 we do not recurse
                let should_recurse = ctx
                    .options
                    .max_depth
                    .is_none_or(|max| current_depth + 1 < max);

                if should_recurse {
                    let subtree = Box::pin(walk_dir_internal(
                        ctx,
                        state,
                        &entry.path,
                        &entry_relative,
                        current_depth + 1,
                    ))
                    .await;

                    match subtree {
                        Ok(grandchildren) => node.children = grandchildren,
                        Err(WalkError::ListDir { path, source })
                            if ctx.options.on_error == ErrorPolicy::Skip =>
                        {
                            log::warn!("skipping {}: {source}", path.display());
                            node.error = Some(source.to_string());
                            state.failures.push(WalkError::ListDir { path, source });
                        }
                        Err(err) => return Err(err),
                    }
                }
            }
            EntryKind::File if ctx.options.show_contents => {
                capture_into(ctx, state, &entry.path, &entry_relative).await;
            }
            // Symlinks are never descended; a link to a regular file is still read
            EntryKind::Symlink if ctx.options.show_contents => {
                if ctx.fs.is_file(&entry.path).await {
                    capture_into(ctx, state, &entry.path, &entry_relative).await;
                }
            }
            EntryKind::File | EntryKind::Symlink | EntryKind::Other => {}
        }

        children.push(node);
    }

    Ok(children)
}

async fn capture_into<F: FileSystem>(
    ctx: &WalkContext<'_, F>,
    state: &mut WalkState,
    path: &Path,
    relative: &Path,
) {
    let content = content::capture(ctx.fs, path).await;
    state.contents.push(ContentPair {
        relative_path: relative.to_string_lossy().into_owned(),
        content,
    });
}

/// Drop excluded entries, sort the survivors by name, then apply `dirs_only`.
/// Each survivor is paired with its path relative to the scan root.
fn filter_and_sort(
    entries: Vec<FsEntry>,
    relative: &Path,
    rules: &ExclusionRules,
    dirs_only: bool,
) -> Vec<(PathBuf, FsEntry)> {
    let mut kept: Vec<(PathBuf, FsEntry)> = entries
        .into_iter()
        .filter_map(|entry| {
            let entry_relative = relative.join(&entry.name);
            let excluded = rules.excludes(
                &entry_relative.to_string_lossy(),
                &entry.name,
                entry.kind,
            );
            (!excluded).then_some((entry_relative, entry))
        })
        .collect();

    kept.sort_by(|(_, a), (_, b)| a.name.cmp(&b.name));

    if dirs_only {
        kept.retain(|(_, entry)| entry.kind.is_dir());
    }

    kept
}
