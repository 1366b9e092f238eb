use crate::loader::error::LoadingError;
use crate::loader::file::File;
use crate::loader::{FileStream, Filter, LoaderTrait};
use async_stream::try_stream;
use async_walkdir::{DirEntry, Filtering, WalkDir};
use chrono::{DateTime, Utc};
use futures::StreamExt;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Reads banks from a directory tree.
#[derive(Clone, Debug)]
pub struct FileSystemLoader {
    base_path: PathBuf,
}

impl FileSystemLoader {
    #[must_use]
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.as_os_str().is_empty() {
            self.base_path.clone()
        } else {
            self.base_path.join(path)
        }
    }
}

impl LoaderTrait for FileSystemLoader {
    fn load_dir<'a, P: AsRef<Path>>(&'a self, path: P, filter: Filter) -> FileStream<'a> {
        let root = self.resolve(path.as_ref());
        tracing::trace!(?root, "walking bank directory");
        let mut walker = WalkDir::new(&root).filter(move |entry| keep(entry, filter));
        Box::pin(try_stream! {
            while let Some(entry) = walker.next().await {
                let entry = entry?;
                let path = entry.path();
                let file_type = entry.file_type().await.map_err(|e| LoadingError::read(&path, e))?;
                if file_type.is_file() {
                    yield read(&path).await?;
                }
            }
        })
    }

    async fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<File, LoadingError> {
        let path = self.resolve(path.as_ref());
        if !fs::try_exists(&path).await.map_err(|e| LoadingError::read(&path, e))? {
            return Err(LoadingError::NotFound(path));
        }
        read(&path).await
    }
}

async fn read(path: &Path) -> Result<File, LoadingError> {
    tracing::trace!(?path, "reading bank file");
    let content = fs::read(path).await.map_err(|e| LoadingError::read(path, e))?;
    let modified = fs::metadata(path)
        .await
        .and_then(|metadata| metadata.modified())
        .map_err(|e| LoadingError::read(path, e))?;
    Ok(File::new(
        path.to_string_lossy().into_owned(),
        Some(DateTime::<Utc>::from(modified)),
        content,
    ))
}

async fn keep(entry: DirEntry, filter: Filter) -> Filtering {
    match entry.file_type().await {
        Ok(file_type) if file_type.is_dir() => Filtering::Continue,
        Ok(_) if filter.apply(entry.path()) => Filtering::Continue,
        Ok(_) => Filtering::Ignore,
        Err(error) => {
            tracing::warn!(path = ?entry.path(), %error, "skipping entry with unreadable file type");
            Filtering::Ignore
        }
    }
}
