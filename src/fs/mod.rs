mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::MockFileSystem;

use async_trait::async_trait;
use std::io;
use std::path::Path;

use crate::models::FsEntry;

#[async_trait]
pub trait FileSystem: Send + Sync {
    /// List the immediate children of `dir`, in no particular order.
    async fn read_dir(&self, dir: &Path) -> io::Result<Vec<FsEntry>>;

    /// Whether `path` exists and is a directory, following symlinks.
    async fn is_dir(&self, path: &Path) -> bool;

    /// Whether `path` exists and is a regular file, following symlinks.
    async fn is_file(&self, path: &Path) -> bool;

    async fn read_file(&self, path: &Path) -> io::Result<Vec<u8>>;
}
