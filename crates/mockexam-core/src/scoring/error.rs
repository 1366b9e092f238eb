use mockexam_config::exam::error::QuestionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("Answer given for question {0}, which is not part of the attempt")]
    UnknownQuestion(u32),

    #[error("Invalid answer for question {question_id}: {source}")]
    InvalidAnswer { question_id: u32, source: QuestionError },
}
