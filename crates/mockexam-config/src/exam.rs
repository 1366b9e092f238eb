use crate::exam::error::ExamError;
use crate::exam::question::{DifficultyMix, Question};
use crate::exam::v01::exam::ExamV01;
use futures::StreamExt;
use indexmap::IndexMap;
use mockexam_utils::loader::{Filter, Loader, LoaderTrait};
use schemars::JsonSchema;
use serde::Serialize;
use serde_derive::Deserialize;
use std::collections::HashSet;
use std::time::Duration;

pub mod error;
pub mod question;
pub mod v01;

#[derive(Deserialize, Debug, JsonSchema)]
#[serde(tag = "version")]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub enum VersionConfig {
    #[serde(rename = "0.1")]
    V01 { exam: ExamV01 },
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ExamConfig {
    pub exam_id: String,
    pub exam_title: String,
    pub total_questions: usize,
    pub time_limit: u32,
    pub pass_threshold: u8,
    pub exit_path: Option<String>,
    pub categories: Vec<String>,
    pub difficulty_mix: Option<DifficultyMix>,
}

impl ExamConfig {
    #[must_use]
    pub fn time_limit(&self) -> Duration {
        Duration::from_secs(u64::from(self.time_limit))
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct Exam {
    pub config: ExamConfig,
    pub questions: Vec<Question>,
}

impl TryFrom<ExamV01> for Exam {
    type Error = ExamError;

    fn try_from(v01: ExamV01) -> Result<Self, Self::Error> {
        if v01.categories.is_empty() {
            return Err(ExamError::NoCategories { exam_id: v01.id });
        }
        let mut seen = HashSet::new();
        if let Some(duplicate) = v01.categories.iter().find(|category| !seen.insert(category.as_str())) {
            return Err(ExamError::DuplicateCategory {
                category: duplicate.clone(),
                exam_id: v01.id,
            });
        }
        if v01.pass_threshold > 100 {
            return Err(ExamError::PassThresholdOutOfRange {
                exam_id: v01.id,
                value: v01.pass_threshold,
            });
        }
        if v01.total_questions == 0 {
            return Err(ExamError::ZeroTotalQuestions { exam_id: v01.id });
        }

        // Content defects are reported, not rejected. The selector skips such questions.
        for question in &v01.questions {
            if !seen.contains(question.category.as_str()) {
                tracing::warn!(
                    exam_id = %v01.id,
                    question_id = question.id,
                    category = %question.category,
                    "question category is not declared by the exam"
                );
            }
        }

        Ok(Self {
            config: ExamConfig {
                exam_id: v01.id,
                exam_title: v01.title,
                total_questions: v01.total_questions,
                time_limit: v01.time_limit,
                pass_threshold: v01.pass_threshold,
                exit_path: v01.exit_path,
                categories: v01.categories,
                difficulty_mix: v01.difficulty_mix,
            },
            questions: v01.questions,
        })
    }
}

impl Exam {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.config.exam_id
    }

    #[must_use]
    pub fn config(&self) -> &ExamConfig {
        &self.config
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Number of bank questions per declared category, in declaration order.
    #[must_use]
    pub fn category_sizes(&self) -> IndexMap<&str, usize> {
        let mut sizes: IndexMap<&str, usize> =
            self.config.categories.iter().map(|category| (category.as_str(), 0)).collect();
        for question in &self.questions {
            if let Some(size) = sizes.get_mut(question.category.as_str()) {
                *size += 1;
            }
        }
        sizes
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExamCatalog {
    pub exams: IndexMap<String, Exam>,
}

impl ExamCatalog {
    #[must_use]
    pub fn get(&self, exam_id: &str) -> Option<&Exam> {
        self.exams.get(exam_id)
    }

    pub fn exam(&self, exam_id: &str) -> Result<&Exam, ExamError> {
        self.get(exam_id)
            .ok_or_else(|| ExamError::ExamNotFound(exam_id.to_owned()))
    }

    #[must_use]
    pub fn exams(&self) -> &IndexMap<String, Exam> {
        &self.exams
    }

    #[must_use]
    pub fn ids(&self) -> HashSet<&String> {
        self.exams.keys().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exams.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exams.is_empty()
    }
}

pub fn parse(key: &str, content: &[u8]) -> Result<Exam, ExamError> {
    let VersionConfig::V01 { exam } =
        serde_yml::from_slice::<VersionConfig>(content).map_err(|source| ExamError::InvalidFile {
            key: key.to_owned(),
            source,
        })?;
    exam.try_into()
}

pub async fn load(loader: Loader) -> Result<ExamCatalog, ExamError> {
    tracing::debug!("Loading exams");
    let mut files = vec![];
    let mut stream = loader.load_dir("", Filter::Yaml);
    while let Some(file) = stream.next().await {
        let file = file?;
        let exam = parse(&file.metadata.key, &file.content)?;
        tracing::trace!(
            key = %file.metadata.key,
            hash = %file.metadata.hash,
            modified = ?file.metadata.last_modified,
            "parsed exam file"
        );
        files.push((file.metadata.key, exam));
    }
    // Directory walks have no stable order.
    files.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut exams = IndexMap::new();
    for (key, exam) in files {
        tracing::debug!(
            exam_id = exam.id(),
            %key,
            questions = exam.questions.len(),
            "loaded exam"
        );
        if let Some(previous) = exams.insert(exam.id().to_owned(), exam) {
            tracing::warn!(exam_id = previous.id(), %key, "exam defined more than once, keeping the latest");
        }
    }
    Ok(ExamCatalog { exams })
}
