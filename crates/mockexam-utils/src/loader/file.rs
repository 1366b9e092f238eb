use chrono::{DateTime, Utc};
use std::fmt;
use xxhash_rust::xxh3::xxh3_64;

/// xxh3 digest of a file's bytes, printed as hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash(u64);

impl ContentHash {
    #[must_use]
    pub fn of(data: &[u8]) -> Self {
        Self(xxh3_64(data))
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0.to_be_bytes()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    /// Path of the file as given to or found by the loader.
    pub key: String,
    /// Absent for embedded files.
    pub last_modified: Option<DateTime<Utc>>,
    pub hash: ContentHash,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub metadata: FileMetadata,
    pub content: Vec<u8>,
}

impl File {
    pub(crate) fn new(key: String, last_modified: Option<DateTime<Utc>>, content: Vec<u8>) -> Self {
        let metadata = FileMetadata {
            key,
            last_modified,
            hash: ContentHash::of(&content),
        };
        File { metadata, content }
    }
}
