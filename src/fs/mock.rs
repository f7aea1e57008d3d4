use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::models::FsEntry;

use super::FileSystem;

#[derive(Clone, Debug)]
enum Response {
    Ok(Vec<FsEntry>),
    Err(io::ErrorKind, String),
}

#[derive(Clone, Default)]
pub struct MockFileSystem {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    responses: HashMap<PathBuf, Response>,
    files: HashMap<PathBuf, Result<Vec<u8>, String>>,
    calls: Vec<PathBuf>,
}

impl MockFileSystem {
    pub fn set_dir_entries(&self, dir: impl Into<PathBuf>, entries: Vec<FsEntry>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.responses.insert(dir.into(), Response::Ok(entries));
    }

    pub fn set_error(&self, dir: impl Into<PathBuf>, message: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.responses.insert(
            dir.into(),
            Response::Err(io::ErrorKind::PermissionDenied, message.into()),
        );
    }

    pub fn set_file(&self, path: impl Into<PathBuf>, bytes: impl Into<Vec<u8>>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.files.insert(path.into(), Ok(bytes.into()));
    }

    pub fn set_file_error(&self, path: impl Into<PathBuf>, message: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.files.insert(path.into(), Err(message.into()));
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.calls.clone()
    }
}

#[async_trait]
impl FileSystem for MockFileSystem {
    async fn read_dir(&self, dir: &Path) -> io::Result<Vec<FsEntry>> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.calls.push(dir.to_path_buf());

        match inner.responses.get(dir) {
            Some(Response::Ok(entries)) => Ok(entries.clone()),
            Some(Response::Err(kind, message)) => Err(io::Error::new(*kind, message.clone())),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no mock response for {}", dir.display()),
            )),
        }
    }

    async fn is_dir(&self, path: &Path) -> bool {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.responses.contains_key(path)
    }

    async fn is_file(&self, path: &Path) -> bool {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.files.contains_key(path)
    }

    async fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        let inner = self.inner.lock().expect("mock fs lock");
        match inner.files.get(path) {
            Some(Ok(bytes)) => Ok(bytes.clone()),
            Some(Err(message)) => Err(io::Error::other(message.clone())),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no mock file for {}", path.display()),
            )),
        }
    }
}
