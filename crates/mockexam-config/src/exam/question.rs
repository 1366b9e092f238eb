use crate::exam::error::QuestionError;
use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use strum::{EnumIter, IntoStaticStr};

/// Number of answer options every question carries.
pub const OPTION_COUNT: usize = 4;

#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema, EnumIter, IntoStaticStr,
    strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Difficulty {
    Basic,
    Intermediate,
    Advanced,
}

/// Zero-based index of the correct option, always within `0..OPTION_COUNT`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub struct AnswerIndex(u8);

impl AnswerIndex {
    #[must_use]
    pub fn get(self) -> usize {
        usize::from(self.0)
    }
}

impl TryFrom<u8> for AnswerIndex {
    type Error = QuestionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if usize::from(value) < OPTION_COUNT {
            Ok(Self(value))
        } else {
            Err(QuestionError::AnswerOutOfRange {
                value: usize::from(value),
                max: OPTION_COUNT - 1,
            })
        }
    }
}

impl TryFrom<usize> for AnswerIndex {
    type Error = QuestionError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| QuestionError::AnswerOutOfRange {
                value,
                max: OPTION_COUNT - 1,
            })
            .and_then(Self::try_from)
    }
}

impl From<AnswerIndex> for u8 {
    fn from(index: AnswerIndex) -> Self {
        index.0
    }
}

impl JsonSchema for AnswerIndex {
    fn schema_name() -> Cow<'static, str> {
        "AnswerIndex".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "integer",
            "minimum": 0,
            "maximum": OPTION_COUNT - 1,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Question {
    /// # Unique identifier of the question within its bank
    pub id: u32,
    /// # The question text
    pub question: String,
    /// # The four answer options, in display order
    pub options: [String; OPTION_COUNT],
    /// # Zero-based index into `options` of the correct answer
    pub correct_answer: AnswerIndex,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// # Rationale shown after answering
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// # Course section the question belongs to
    /// e.g. "Module 2"
    pub section: Option<String>,
    pub difficulty: Difficulty,
    /// # Topic of the question
    /// Finer grained than the category
    pub topic: String,
    /// # Category of the question
    /// Must be one of the categories declared by the exam
    pub category: String,
}

impl Question {
    #[must_use]
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_answer.get()]
    }

    #[must_use]
    pub fn is_correct(&self, choice: AnswerIndex) -> bool {
        self.correct_answer == choice
    }
}

/// Relative weights for the difficulty spread inside one category.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct DifficultyMix {
    #[serde(default)]
    pub basic: f64,
    #[serde(default)]
    pub intermediate: f64,
    #[serde(default)]
    pub advanced: f64,
}

impl DifficultyMix {
    #[must_use]
    pub fn weight(&self, difficulty: Difficulty) -> f64 {
        match difficulty {
            Difficulty::Basic => self.basic,
            Difficulty::Intermediate => self.intermediate,
            Difficulty::Advanced => self.advanced,
        }
    }
}
