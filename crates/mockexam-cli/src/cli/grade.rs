use crate::cli::catalog;
use crate::cli::draw::Attempt;
use crate::opt::Grade;
use anyhow::{Context, Error, bail};
use mockexam_config::exam::Exam;
use mockexam_config::exam::question::Question;
use mockexam_core::scoring::{ExamResult, score_attempt};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::Path;

/// The part of a drawn question `grade` needs back.
#[derive(Deserialize, Debug)]
pub(crate) struct AttemptQuestion {
    id: u32,
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, Error> {
    let content = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_slice(&content).with_context(|| format!("Invalid JSON in {}", path.display()))
}

/// Questions of `exam` that make up the attempt.
///
/// With a drawn attempt these are its questions in drawn order. Without one
/// only the answered questions are taken, in bank order.
fn attempt_questions<'e>(
    exam: &'e Exam,
    attempt: Option<&Attempt<AttemptQuestion>>,
    answers: &HashMap<u32, usize>,
) -> Result<Vec<&'e Question>, Error> {
    let Some(attempt) = attempt else {
        let mut answered: Vec<&Question> = Vec::new();
        for question in exam.questions() {
            if answers.contains_key(&question.id) && !answered.iter().any(|q| q.id == question.id) {
                answered.push(question);
            }
        }
        return Ok(answered);
    };

    if attempt.exam_id != exam.id() {
        bail!("Attempt belongs to exam {}, not {}", attempt.exam_id, exam.id());
    }
    attempt
        .questions
        .iter()
        .map(|drawn| {
            exam.questions()
                .iter()
                .find(|q| q.id == drawn.id)
                .with_context(|| format!("Question {} is not in exam {}", drawn.id, exam.id()))
        })
        .collect()
}

pub(crate) fn grade_answers(
    exam: &Exam,
    attempt: Option<&Attempt<AttemptQuestion>>,
    answers: &HashMap<u32, usize>,
) -> Result<ExamResult, Error> {
    let questions = attempt_questions(exam, attempt, answers)?;
    Ok(score_attempt(exam.config(), &questions, answers)?)
}

pub(crate) async fn grade(opt: Grade) -> Result<(), Error> {
    let catalog = catalog(opt.path.as_deref()).await?;
    let exam = catalog.exam(&opt.exam)?;
    let answers: HashMap<u32, usize> = read_json(&opt.answers).await?;
    let attempt: Option<Attempt<AttemptQuestion>> = match &opt.attempt {
        Some(path) => Some(read_json(path).await?),
        None => None,
    };

    let result = grade_answers(exam, attempt.as_ref(), &answers)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
