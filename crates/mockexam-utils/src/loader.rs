use crate::loader::embedded::EmbeddedLoader;
use crate::loader::error::LoadingError;
use crate::loader::file::File;
use crate::loader::file_system::FileSystemLoader;
use futures::Stream;
use std::path::Path;
use std::pin::Pin;

pub mod embedded;
pub mod error;
pub mod file;
pub mod file_system;

pub type FileStream<'a> = Pin<Box<dyn Stream<Item = Result<File, LoadingError>> + Send + 'a>>;

/// Which files `load_dir` yields, by extension.
#[derive(Debug, Clone, Copy, Default)]
pub enum Filter {
    Yaml,
    #[default]
    Any,
}

impl Filter {
    pub fn apply<P: AsRef<Path>>(&self, path: P) -> bool {
        match self {
            Filter::Any => true,
            Filter::Yaml => path
                .as_ref()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml")),
        }
    }
}

/// Where question banks come from.
#[derive(Clone, Debug)]
pub enum Loader {
    FileSystem(FileSystemLoader),
    Embedded(EmbeddedLoader),
}

impl Loader {
    #[must_use]
    pub fn file_system<P: AsRef<Path>>(base_path: P) -> Self {
        Loader::FileSystem(FileSystemLoader::new(base_path.as_ref().to_path_buf()))
    }
}

impl LoaderTrait for Loader {
    fn load_dir<'a, P: AsRef<Path>>(&'a self, path: P, filter: Filter) -> FileStream<'a> {
        match self {
            Loader::FileSystem(loader) => loader.load_dir(path, filter),
            Loader::Embedded(loader) => loader.load_dir(path, filter),
        }
    }

    async fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<File, LoadingError> {
        match self {
            Loader::FileSystem(loader) => loader.load_file(path).await,
            Loader::Embedded(loader) => loader.load_file(path).await,
        }
    }
}

pub trait LoaderTrait {
    /// Every file below `path` accepted by `filter`, in no particular order.
    fn load_dir<'a, P: AsRef<Path>>(&'a self, path: P, filter: Filter) -> FileStream<'a>;

    fn load_file<P: AsRef<Path>>(&self, path: P) -> impl Future<Output = Result<File, LoadingError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter() {
        assert!(Filter::Yaml.apply("banks/first-aid.exam.yaml"));
        assert!(Filter::Yaml.apply("banks/first-aid.exam.yml"));
        assert!(Filter::Yaml.apply("banks/FIRST-AID.YAML"));
        assert!(!Filter::Yaml.apply("banks/first-aid.exam.json"));
        assert!(!Filter::Yaml.apply("banks/README"));
        assert!(Filter::Any.apply("anything.txt"));
        assert!(Filter::Any.apply("no_extension"));
    }
}
