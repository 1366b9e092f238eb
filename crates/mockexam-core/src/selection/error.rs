use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SelectionError {
    #[error("At least one question has to be requested")]
    ZeroCount,

    #[error("No categories to balance the selection across")]
    NoCategories,

    #[error("Category {0:?} was requested more than once")]
    DuplicateCategory(String),

    #[error("Invalid difficulty mix: {0}")]
    InvalidDifficultyMix(String),
}
