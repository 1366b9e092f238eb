use crate::loader::error::LoadingError;
use crate::loader::file::File;
use crate::loader::{FileStream, Filter, LoaderTrait};
use std::path::Path;

/// A file compiled into the binary, usually through `include_bytes!`.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedFile {
    pub path: &'static str,
    pub content: &'static [u8],
}

/// Serves files from a static table instead of the file system.
///
/// Paths are matched component-wise, so `load_dir("banks", ..)` yields
/// `banks/a.yaml` but not `banks-old/a.yaml`.
#[derive(Clone, Debug)]
pub struct EmbeddedLoader {
    files: &'static [EmbeddedFile],
}

impl EmbeddedLoader {
    #[must_use]
    pub fn new(files: &'static [EmbeddedFile]) -> Self {
        Self { files }
    }

    fn find(&self, path: &Path) -> Option<&'static EmbeddedFile> {
        self.files.iter().find(|file| Path::new(file.path) == path)
    }
}

fn to_file(file: &EmbeddedFile) -> File {
    File::new(file.path.to_owned(), None, file.content.to_vec())
}

impl LoaderTrait for EmbeddedLoader {
    fn load_dir<'a, P: AsRef<Path>>(&'a self, path: P, filter: Filter) -> FileStream<'a> {
        let prefix = path.as_ref().to_path_buf();
        tracing::trace!(?prefix, "listing embedded banks");
        let files = self
            .files
            .iter()
            .filter(move |file| {
                let path = Path::new(file.path);
                path.starts_with(&prefix) && filter.apply(path)
            })
            .map(|file| Ok::<_, LoadingError>(to_file(file)));
        Box::pin(futures::stream::iter(files))
    }

    async fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<File, LoadingError> {
        let path = path.as_ref();
        self.find(path)
            .map(to_file)
            .ok_or_else(|| LoadingError::NotFound(path.to_path_buf()))
    }
}
