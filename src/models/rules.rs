use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &[
    "venv",
    "env",
    "node_modules",
    "dist",
    ".idea",
    ".expo",
    ".git",
    "__pycache__",
];

pub const DEFAULT_EXCLUDE_FILES: &[&str] = &["LICENSE"];

/// The two exclusion pattern sets, in the shape they are persisted.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ExclusionRuleSet {
    #[serde(rename = "EXCLUDE_DIRS", default = "default_exclude_dirs")]
    pub exclude_dirs: BTreeSet<String>,
    #[serde(rename = "EXCLUDE_FILES", default = "default_exclude_files")]
    pub exclude_files: BTreeSet<String>,
}

fn default_exclude_dirs() -> BTreeSet<String> {
    DEFAULT_EXCLUDE_DIRS.iter().map(|s| (*s).to_owned()).collect()
}

fn default_exclude_files() -> BTreeSet<String> {
    DEFAULT_EXCLUDE_FILES.iter().map(|s| (*s).to_owned()).collect()
}

impl Default for ExclusionRuleSet {
    fn default() -> Self {
        Self {
            exclude_dirs: default_exclude_dirs(),
            exclude_files: default_exclude_files(),
        }
    }
}

impl ExclusionRuleSet {
    pub fn empty() -> Self {
        Self {
            exclude_dirs: BTreeSet::new(),
            exclude_files: BTreeSet::new(),
        }
    }

    pub fn exclude_dirs<I, S>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_dirs.extend(patterns.into_iter().map(Into::into));
    }

    pub fn exclude_files<I, S>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_files.extend(patterns.into_iter().map(Into::into));
    }

    pub fn include_dirs<I, S>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pattern in patterns {
            self.exclude_dirs.remove(pattern.as_ref());
        }
    }

    pub fn include_files<I, S>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pattern in patterns {
            self.exclude_files.remove(pattern.as_ref());
        }
    }
}
