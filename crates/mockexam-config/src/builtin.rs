use crate::exam::{self, ExamCatalog, error::ExamError};
use mockexam_utils::loader::Loader;
use mockexam_utils::loader::embedded::{EmbeddedFile, EmbeddedLoader};

static BANKS: &[EmbeddedFile] = &[
    EmbeddedFile {
        path: "banks/first-aid-at-work.exam.yaml",
        content: include_bytes!("../banks/first-aid-at-work.exam.yaml"),
    },
    EmbeddedFile {
        path: "banks/instrumentation.exam.yaml",
        content: include_bytes!("../banks/instrumentation.exam.yaml"),
    },
];

/// Loader over the question banks compiled into this crate.
#[must_use]
pub fn loader() -> Loader {
    Loader::Embedded(EmbeddedLoader::new(BANKS))
}

pub async fn catalog() -> Result<ExamCatalog, ExamError> {
    exam::load(loader()).await
}
