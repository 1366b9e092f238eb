use crate::exam::question::{DifficultyMix, Question};
use schemars::JsonSchema;
use serde::Deserialize;

pub(crate) type QuestionV01 = Question;

#[derive(Deserialize, Debug, Clone, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ExamV01 {
    /// # Unique identifier for the exam
    /// e.g. "first-aid-at-work"
    pub id: String,
    /// # Title of the exam
    /// A human-readable title shown to the candidate.
    pub title: String,
    /// # Number of questions drawn for one attempt
    pub total_questions: usize,
    /// # Time limit in seconds
    pub time_limit: u32,
    /// # Percentage of correct answers needed to pass
    pub pass_threshold: u8,
    #[serde(default)]
    /// # Path the frontend navigates to after the exam
    pub exit_path: Option<String>,
    /// # Categories the questions are balanced across
    /// Order matters: it is the order categories are reported in.
    pub categories: Vec<String>,
    #[serde(default)]
    /// # Relative weights of basic, intermediate and advanced questions
    /// Applied inside every category. Omit for a uniform draw.
    pub difficulty_mix: Option<DifficultyMix>,
    #[serde(default)]
    /// # The question bank
    pub questions: Vec<QuestionV01>,
}
