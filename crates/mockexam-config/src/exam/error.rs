use mockexam_utils::loader::error::LoadingError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuestionError {
    #[error("answer index {value} out of range, expected 0..={max}")]
    AnswerOutOfRange { value: usize, max: usize },
}

#[derive(Error, Debug)]
pub enum ExamError {
    #[error(transparent)]
    Loading(#[from] LoadingError),

    #[error("Invalid exam file {key}: {source}")]
    InvalidFile { key: String, source: serde_yml::Error },

    #[error("Exam {exam_id} declares no categories")]
    NoCategories { exam_id: String },

    #[error("Exam {exam_id} declares category {category:?} more than once")]
    DuplicateCategory { exam_id: String, category: String },

    #[error("Exam {exam_id} has pass threshold {value}, expected 0..=100")]
    PassThresholdOutOfRange { exam_id: String, value: u8 },

    #[error("Exam {exam_id} requests zero questions")]
    ZeroTotalQuestions { exam_id: String },

    #[error("The requested exam was not found: {0}")]
    ExamNotFound(String),
}
