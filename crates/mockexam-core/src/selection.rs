use crate::selection::error::SelectionError;
use indexmap::IndexMap;
use mockexam_config::exam::ExamConfig;
use mockexam_config::exam::question::{DifficultyMix, Question};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use typed_builder::TypedBuilder;

mod difficulty;
pub mod error;
mod quota;

/// What to draw from a bank for one exam attempt.
#[derive(TypedBuilder, Debug, Clone)]
pub struct SelectionRequest<'a> {
    categories: &'a [String],
    count: usize,
    #[builder(default, setter(strip_option))]
    difficulty_mix: Option<DifficultyMix>,
}

impl<'a> SelectionRequest<'a> {
    /// Request as configured for the exam: its categories, default size and difficulty mix.
    #[must_use]
    pub fn for_exam(config: &'a ExamConfig) -> Self {
        Self {
            categories: &config.categories,
            count: config.total_questions,
            difficulty_mix: config.difficulty_mix,
        }
    }

    #[must_use]
    pub fn with_count(self, count: usize) -> Self {
        Self { count, ..self }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        self.categories
    }

    fn validate(&self) -> Result<(), SelectionError> {
        if self.count == 0 {
            return Err(SelectionError::ZeroCount);
        }
        if self.categories.is_empty() {
            return Err(SelectionError::NoCategories);
        }
        let mut seen = HashSet::new();
        if let Some(duplicate) = self.categories.iter().find(|category| !seen.insert(category.as_str())) {
            return Err(SelectionError::DuplicateCategory(duplicate.clone()));
        }
        if let Some(mix) = &self.difficulty_mix {
            difficulty::validate(mix)?;
        }
        Ok(())
    }
}

/// Draws questions spread as evenly as possible across the requested categories.
///
/// The result holds `min(count, available)` questions, where `available` is
/// the number of distinct ids in the bank belonging to a requested category.
/// Categories that run short hand their share to the others, so a sparse
/// category does not shrink the exam as long as the bank as a whole can fill
/// it. Questions of unrequested categories are ignored and a repeated id is
/// only considered once (first occurrence wins). The order is shuffled.
///
/// A short bank is not an error: the caller gets fewer questions.
pub fn select_balanced<'q, R: Rng + ?Sized>(
    bank: &'q [Question],
    request: &SelectionRequest<'_>,
    rng: &mut R,
) -> Result<Vec<&'q Question>, SelectionError> {
    request.validate()?;

    let mut pools: IndexMap<&str, Vec<&'q Question>> = request
        .categories
        .iter()
        .map(|category| (category.as_str(), Vec::new()))
        .collect();
    let mut seen = HashSet::new();
    let mut skipped = 0_usize;
    for question in bank {
        let Some(pool) = pools.get_mut(question.category.as_str()) else {
            skipped += 1;
            continue;
        };
        if seen.insert(question.id) {
            pool.push(question);
        } else {
            tracing::debug!(question_id = question.id, "skipping repeated question id");
        }
    }
    if skipped > 0 {
        tracing::trace!(skipped, "questions outside the requested categories");
    }

    let available: Vec<usize> = pools.values().map(Vec::len).collect();
    let allocation = quota::allocate(&available, request.count, rng);

    let mut selection = Vec::with_capacity(allocation.iter().sum());
    for ((category, pool), n) in pools.iter().zip(allocation) {
        tracing::trace!(category, available = pool.len(), drawn = n, "category allocation");
        selection.extend(difficulty::draw(pool, n, request.difficulty_mix.as_ref(), rng));
    }
    selection.shuffle(rng);

    if selection.len() < request.count {
        tracing::debug!(
            requested = request.count,
            selected = selection.len(),
            "bank cannot fill the requested count"
        );
    }
    Ok(selection)
}

/// Draws `count` questions uniformly from the whole bank, ignoring categories.
///
/// Used for plain module banks that carry no category balance. Repeated ids
/// are considered once.
pub fn select_random<'q, R: Rng + ?Sized>(
    bank: &'q [Question],
    count: usize,
    rng: &mut R,
) -> Result<Vec<&'q Question>, SelectionError> {
    if count == 0 {
        return Err(SelectionError::ZeroCount);
    }
    let mut seen = HashSet::new();
    let mut unique: Vec<&'q Question> = bank.iter().filter(|q| seen.insert(q.id)).collect();
    unique.shuffle(rng);
    unique.truncate(count);
    Ok(unique)
}
