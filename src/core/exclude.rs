//! Exclusion matching against entries discovered during a walk.
//!
//! `exclude_dirs` patterns are tried three ways against an entry's path
//! relative to the scan root:
//!
//! 1. exact equality with the whole relative path,
//! 2. glob match of the whole relative path, for patterns containing a separator,
//! 3. glob match of any single component of the relative path.
//!
//! The third tier is unanchored: `build` excludes `build`, `src/build` and
//! `a/b/build/c` alike. `exclude_files` patterns only ever see a file's basename.

use std::collections::HashSet;
use std::path::MAIN_SEPARATOR;

use crate::models::{EntryKind, ExclusionRuleSet};

use super::pattern::CompiledPatterns;

#[derive(Debug)]
pub struct ExclusionRules {
    exact_paths: HashSet<String>,
    path_patterns: CompiledPatterns,
    component_patterns: CompiledPatterns,
    file_patterns: CompiledPatterns,
}

impl ExclusionRules {
    pub fn compile(rules: &ExclusionRuleSet) -> anyhow::Result<Self> {
        let path_shaped = rules
            .exclude_dirs
            .iter()
            .filter(|pattern| has_separator(pattern));

        Ok(Self {
            exact_paths: rules.exclude_dirs.iter().cloned().collect(),
            path_patterns: CompiledPatterns::new(path_shaped)?,
            component_patterns: CompiledPatterns::new(&rules.exclude_dirs)?,
            file_patterns: CompiledPatterns::new(&rules.exclude_files)?,
        })
    }

    /// Whether the directory rules exclude the entry at `relative_path`.
    pub fn excludes_path(&self, relative_path: &str) -> bool {
        if self.exact_paths.contains(relative_path) {
            return true;
        }

        if self.path_patterns.matches(relative_path) {
            return true;
        }

        !self.component_patterns.is_empty()
            && relative_path
                .split(MAIN_SEPARATOR)
                .any(|component| self.component_patterns.matches(component))
    }

    pub fn excludes_file_name(&self, name: &str) -> bool {
        self.file_patterns.matches(name)
    }

    /// Full decision for one entry. Directories are never checked against file patterns.
    pub fn excludes(&self, relative_path: &str, name: &str, kind: EntryKind) -> bool {
        if self.excludes_path(relative_path) {
            return true;
        }

        !kind.is_dir() && self.excludes_file_name(name)
    }
}

fn has_separator(pattern: &str) -> bool {
    pattern.contains('/') || pattern.contains(MAIN_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(dirs: &[&str], files: &[&str]) -> ExclusionRules {
        let mut set = ExclusionRuleSet::empty();
        set.exclude_dirs(dirs.iter().copied());
        set.exclude_files(files.iter().copied());
        ExclusionRules::compile(&set).unwrap()
    }

    fn join(parts: &[&str]) -> String {
        parts.join(&MAIN_SEPARATOR.to_string())
    }

    #[test]
    fn bare_name_matches_anywhere() {
        let rules = rules(&["node_modules"], &[]);
        assert!(rules.excludes_path("node_modules"));
        assert!(rules.excludes_path(&join(&["pkg", "node_modules"])));
        assert!(rules.excludes_path(&join(&["pkg", "node_modules", "x.js"])));
        assert!(!rules.excludes_path(&join(&["pkg", "src"])));
    }

    #[test]
    fn path_shaped_pattern_is_anchored_to_root() {
        let rules = rules(&["src/build"], &[]);
        assert!(rules.excludes_path(&join(&["src", "build"])));
        assert!(!rules.excludes_path(&join(&["lib", "build"])));
        assert!(!rules.excludes_path("build"));
    }

    #[test]
    fn path_glob_matches_full_relative_path() {
        let rules = rules(&["docs/*.tmp"], &[]);
        assert!(rules.excludes_path(&join(&["docs", "a.tmp"])));
        assert!(!rules.excludes_path(&join(&["src", "a.tmp"])));
    }

    #[test]
    fn component_glob_matches_any_segment() {
        let rules = rules(&["*.egg-info"], &[]);
        assert!(rules.excludes_path(&join(&["lib", "pkg.egg-info"])));
        assert!(!rules.excludes_path(&join(&["lib", "pkg"])));
    }

    #[test]
    fn file_patterns_only_apply_to_files() {
        let rules = rules(&[], &["LICENSE", "*.log"]);
        assert!(rules.excludes("LICENSE", "LICENSE", EntryKind::File));
        assert!(!rules.excludes("README_LICENSE", "README_LICENSE", EntryKind::File));
        assert!(rules.excludes(&join(&["a", "run.log"]), "run.log", EntryKind::File));
        assert!(!rules.excludes("logs.log", "logs.log", EntryKind::Directory));
    }

    #[test]
    fn directory_patterns_apply_to_files_too() {
        let rules = rules(&["secret*"], &[]);
        assert!(rules.excludes("secret.txt", "secret.txt", EntryKind::File));
    }

    #[test]
    fn flat_listing_filtered_and_sorted() {
        let rules = rules(&[], &["LICENSE"]);
        let mut kept: Vec<&str> = ["b.txt", "LICENSE", "a.txt", "README_LICENSE"]
            .into_iter()
            .filter(|name| !rules.excludes(name, name, EntryKind::File))
            .collect();
        kept.sort();
        assert_eq!(kept, vec!["README_LICENSE", "a.txt", "b.txt"]);
    }
}
