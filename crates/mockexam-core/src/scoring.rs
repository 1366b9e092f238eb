use crate::scoring::error::ScoringError;
use indexmap::IndexMap;
use mockexam_config::exam::ExamConfig;
use mockexam_config::exam::question::{AnswerIndex, Question};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

pub mod error;

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryScore {
    pub correct: usize,
    pub total: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AnswerReview {
    pub question_id: u32,
    pub chosen: Option<usize>,
    pub correct_answer: usize,
    pub is_correct: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ExamResult {
    pub exam_id: String,
    pub correct: usize,
    pub total: usize,
    /// Share of correct answers, `0.0..=100.0`.
    pub percentage: f64,
    pub passed: bool,
    /// Per category in the exam's declaration order. Categories outside the
    /// declaration are appended in the order they are met.
    pub categories: IndexMap<String, CategoryScore>,
    /// One entry per question of the attempt, in attempt order.
    pub answers: Vec<AnswerReview>,
}

/// Scores an attempt over the drawn `questions`.
///
/// `answers` maps question ids to the chosen zero-based option. Questions
/// without an answer count as incorrect. An empty attempt scores 0% and
/// does not pass.
pub fn score_attempt(
    config: &ExamConfig,
    questions: &[&Question],
    answers: &HashMap<u32, usize>,
) -> Result<ExamResult, ScoringError> {
    let attempt: HashSet<u32> = questions.iter().map(|q| q.id).collect();
    if let Some(&unknown) = answers.keys().find(|id| !attempt.contains(*id)) {
        return Err(ScoringError::UnknownQuestion(unknown));
    }

    let mut categories: IndexMap<String, CategoryScore> = config
        .categories
        .iter()
        .map(|category| (category.clone(), CategoryScore::default()))
        .collect();
    let mut reviews = Vec::with_capacity(questions.len());
    let mut correct = 0;

    for question in questions {
        let chosen = answers
            .get(&question.id)
            .map(|&choice| AnswerIndex::try_from(choice))
            .transpose()
            .map_err(|source| ScoringError::InvalidAnswer {
                question_id: question.id,
                source,
            })?;
        let is_correct = chosen.is_some_and(|choice| question.is_correct(choice));

        let score = categories.entry(question.category.clone()).or_default();
        score.total += 1;
        if is_correct {
            score.correct += 1;
            correct += 1;
        }
        reviews.push(AnswerReview {
            question_id: question.id,
            chosen: chosen.map(AnswerIndex::get),
            correct_answer: question.correct_answer.get(),
            is_correct,
        });
    }

    let total = questions.len();
    // Integer comparison, so 16 of 20 passes an 80% threshold exactly.
    let passed = total > 0 && correct * 100 >= usize::from(config.pass_threshold) * total;
    #[allow(clippy::cast_precision_loss)]
    let percentage = if total == 0 {
        0.0
    } else {
        correct as f64 * 100.0 / total as f64
    };

    tracing::debug!(exam_id = %config.exam_id, correct, total, passed, "scored attempt");
    Ok(ExamResult {
        exam_id: config.exam_id.clone(),
        correct,
        total,
        percentage,
        passed,
        categories,
        answers: reviews,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockexam_config::exam::question::Difficulty;
    use test_log::test;

    fn question(id: u32, category: &str, correct_answer: u8) -> Question {
        Question {
            id,
            question: format!("Question {id}?"),
            options: ["A".into(), "B".into(), "C".into(), "D".into()],
            correct_answer: correct_answer.try_into().unwrap(),
            explanation: None,
            section: None,
            difficulty: Difficulty::Basic,
            topic: "Topic".to_owned(),
            category: category.to_owned(),
        }
    }

    fn config(pass_threshold: u8) -> ExamConfig {
        ExamConfig {
            exam_id: "first-aid-at-work".to_owned(),
            exam_title: "First Aid at Work".to_owned(),
            total_questions: 5,
            time_limit: 600,
            pass_threshold,
            exit_path: None,
            categories: vec!["Primary Survey".to_owned(), "Bleeding".to_owned()],
            difficulty_mix: None,
        }
    }

    fn bank() -> Vec<Question> {
        vec![
            question(1, "Primary Survey", 0),
            question(2, "Bleeding", 1),
            question(3, "Primary Survey", 2),
            question(4, "Bleeding", 3),
            question(5, "Bleeding", 0),
        ]
    }

    #[test]
    fn test_scores_per_category() {
        let bank = bank();
        let attempt: Vec<&Question> = bank.iter().collect();
        let answers = HashMap::from([(1, 0), (2, 1), (3, 0), (4, 3)]);

        let result = score_attempt(&config(60), &attempt, &answers).unwrap();
        assert_eq!(result.correct, 3);
        assert_eq!(result.total, 5);
        assert_eq!(result.percentage, 60.0);
        assert!(result.passed);
        assert_eq!(result.categories["Primary Survey"], CategoryScore { correct: 1, total: 2 });
        assert_eq!(result.categories["Bleeding"], CategoryScore { correct: 2, total: 3 });

        let unanswered = result.answers.iter().find(|review| review.question_id == 5).unwrap();
        assert_eq!(unanswered.chosen, None);
        assert!(!unanswered.is_correct);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let bank = bank();
        let attempt: Vec<&Question> = bank.iter().collect();
        let answers = HashMap::from([(1, 0), (2, 1), (3, 2), (4, 3)]);
        assert!(score_attempt(&config(80), &attempt, &answers).unwrap().passed);
        assert!(!score_attempt(&config(81), &attempt, &answers).unwrap().passed);
    }

    #[test]
    fn test_empty_attempt_fails() {
        let result = score_attempt(&config(0), &[], &HashMap::new()).unwrap();
        assert_eq!(result.total, 0);
        assert_eq!(result.percentage, 0.0);
        assert!(!result.passed);
        assert_eq!(result.categories.len(), 2);
    }

    #[test]
    fn test_answer_for_question_outside_attempt() {
        let bank = bank();
        let attempt: Vec<&Question> = bank.iter().take(2).collect();
        let answers = HashMap::from([(5, 0)]);
        assert!(matches!(
            score_attempt(&config(80), &attempt, &answers),
            Err(ScoringError::UnknownQuestion(5))
        ));
    }

    #[test]
    fn test_option_out_of_range() {
        let bank = bank();
        let attempt: Vec<&Question> = bank.iter().collect();
        let answers = HashMap::from([(2, 4)]);
        assert!(matches!(
            score_attempt(&config(80), &attempt, &answers),
            Err(ScoringError::InvalidAnswer { question_id: 2, .. })
        ));
    }

    #[test]
    fn test_result_json_shape() {
        let bank = bank();
        let attempt: Vec<&Question> = bank.iter().take(2).collect();
        let answers = HashMap::from([(1, 0)]);
        let result = score_attempt(&config(50), &attempt, &answers).unwrap();

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["exam_id"], "first-aid-at-work");
        assert_eq!(json["percentage"], 50.0);
        assert_eq!(json["passed"], true);
        assert_eq!(json["categories"]["Primary Survey"]["correct"], 1);
        assert_eq!(json["categories"]["Bleeding"]["total"], 1);
        assert_eq!(json["answers"][0]["question_id"], 1);
        assert_eq!(json["answers"][0]["chosen"], 0);
        assert_eq!(json["answers"][1]["chosen"], serde_json::Value::Null);
        assert_eq!(json["answers"][1]["correct_answer"], 1);
        assert_eq!(json["answers"][1]["is_correct"], false);
    }

    #[test]
    fn test_undeclared_category_is_appended() {
        let stray = question(9, "Burns", 1);
        let attempt = vec![&stray];
        let result = score_attempt(&config(50), &attempt, &HashMap::from([(9, 1)])).unwrap();
        assert_eq!(
            result.categories.keys().collect::<Vec<_>>(),
            vec!["Primary Survey", "Bleeding", "Burns"]
        );
        assert!(result.passed);
    }
}
