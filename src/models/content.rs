use std::fmt;

/// Captured text of a file, or the placeholder shown in its place.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FileContent {
    Text(String),
    Binary,
    Unreadable(String),
}

impl fmt::Display for FileContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileContent::Text(text) => f.write_str(text),
            FileContent::Binary => f.write_str("[Binary file]"),
            FileContent::Unreadable(reason) => write!(f, "[Error reading file: {reason}]"),
        }
    }
}

/// A file's path relative to the scan root paired with its captured content.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContentPair {
    pub relative_path: String,
    pub content: FileContent,
}
