//! Persistence of exclusion preferences as a small JSON document:
//!
//! ```json
//! {
//!     "EXCLUDE_DIRS": [".git", "node_modules"],
//!     "EXCLUDE_FILES": ["LICENSE"]
//! }
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::PrefsError;
use crate::models::ExclusionRuleSet;

pub const PREFS_FILE_NAME: &str = "prefs.json";
const FALLBACK_PREFS_FILE: &str = "dir_tree_prefs.json";

/// Default location: `<config dir>/printdirtree/prefs.json`, or a file in
/// the working directory when no config dir is known.
pub fn default_prefs_path() -> PathBuf {
    match dirs::config_dir() {
        Some(dir) => dir.join("printdirtree").join(PREFS_FILE_NAME),
        None => PathBuf::from(FALLBACK_PREFS_FILE),
    }
}

#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored rule set. A missing file yields the built-in defaults.
    pub fn load(&self) -> Result<ExclusionRuleSet, PrefsError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("no preferences at {}, using defaults", self.path.display());
                return Ok(ExclusionRuleSet::default());
            }
            Err(source) => {
                return Err(PrefsError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&raw).map_err(|source| PrefsError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Like [`load`](Self::load), but any failure degrades to the defaults with a warning.
    pub fn load_or_default(&self) -> ExclusionRuleSet {
        self.load().unwrap_or_else(|err| {
            log::warn!("{err}. Using default preferences.");
            ExclusionRuleSet::default()
        })
    }

    pub fn save(&self, rules: &ExclusionRuleSet) -> Result<(), PrefsError> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        rules.serialize(&mut serializer)?;
        buf.push(b'\n');

        let write = |source| PrefsError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(write)?;
        }
        fs::write(&self.path, buf).map_err(write)?;

        log::debug!("saved preferences to {}", self.path.display());
        Ok(())
    }
}
