use std::path::Path;

use crate::fs::FileSystem;
use crate::models::FileContent;

/// Read a file for the content dump. Never fails: undecodable bytes become
/// [`FileContent::Binary`] and I/O errors become [`FileContent::Unreadable`].
pub async fn capture<F: FileSystem>(fs: &F, path: &Path) -> FileContent {
    match fs.read_file(path).await {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(text) => FileContent::Text(text.trim().to_owned()),
            Err(_) => FileContent::Binary,
        },
        Err(err) => {
            log::debug!("could not read {}: {err}", path.display());
            FileContent::Unreadable(err.to_string())
        }
    }
}
