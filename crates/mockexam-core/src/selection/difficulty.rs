use crate::selection::error::SelectionError;
use mockexam_config::exam::question::{Difficulty, DifficultyMix, Question};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use strum::IntoEnumIterator;

pub(crate) fn validate(mix: &DifficultyMix) -> Result<(), SelectionError> {
    let mut total = 0.0;
    for difficulty in Difficulty::iter() {
        let weight = mix.weight(difficulty);
        if !weight.is_finite() || weight < 0.0 {
            return Err(SelectionError::InvalidDifficultyMix(format!(
                "weight for {difficulty} must be a non-negative number, got {weight}"
            )));
        }
        total += weight;
    }
    if total <= 0.0 {
        return Err(SelectionError::InvalidDifficultyMix(
            "at least one weight must be positive".to_owned(),
        ));
    }
    Ok(())
}

/// Largest-remainder split of `n` over the mix weights.
fn targets(mix: &DifficultyMix, n: usize) -> Vec<(Difficulty, usize)> {
    let total: f64 = Difficulty::iter().map(|d| mix.weight(d)).sum();
    #[allow(clippy::cast_precision_loss)]
    let exact: Vec<(Difficulty, f64)> = Difficulty::iter()
        .map(|d| (d, n as f64 * mix.weight(d) / total))
        .collect();

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let mut targets: Vec<(Difficulty, usize)> = exact.iter().map(|&(d, x)| (d, x.floor() as usize)).collect();
    let assigned: usize = targets.iter().map(|(_, t)| t).sum();

    let mut by_fraction: Vec<usize> = (0..exact.len()).collect();
    by_fraction.sort_by(|&a, &b| {
        let fa = exact[a].1 - exact[a].1.floor();
        let fb = exact[b].1 - exact[b].1.floor();
        fb.total_cmp(&fa)
    });
    for &i in by_fraction.iter().take(n.saturating_sub(assigned)) {
        targets[i].1 += 1;
    }
    targets
}

/// Draws `n` questions from one category pool without replacement.
///
/// Without a mix the draw is uniform. With a mix each difficulty gets its
/// target share as far as the pool allows, and whatever a difficulty cannot
/// supply is filled uniformly from the rest of the pool.
pub(crate) fn draw<'q, R: Rng + ?Sized>(
    pool: &[&'q Question],
    n: usize,
    mix: Option<&DifficultyMix>,
    rng: &mut R,
) -> Vec<&'q Question> {
    let Some(mix) = mix else {
        return pool.choose_multiple(rng, n).copied().collect();
    };

    let mut taken: Vec<&'q Question> = Vec::with_capacity(n);
    let mut rest: Vec<&'q Question> = Vec::new();
    for (difficulty, target) in targets(mix, n) {
        let mut tier: Vec<&'q Question> = pool.iter().copied().filter(|q| q.difficulty == difficulty).collect();
        tier.shuffle(rng);
        let left = tier.split_off(target.min(tier.len()));
        if tier.len() < target {
            tracing::trace!(%difficulty, target, available = tier.len(), "difficulty tier short");
        }
        taken.extend(tier);
        rest.extend(left);
    }

    let shortfall = n.saturating_sub(taken.len());
    taken.extend(rest.choose_multiple(rng, shortfall).copied());
    taken
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn mix(basic: f64, intermediate: f64, advanced: f64) -> DifficultyMix {
        DifficultyMix {
            basic,
            intermediate,
            advanced,
        }
    }

    fn question(id: u32, difficulty: Difficulty) -> Question {
        Question {
            id,
            question: format!("Question {id}?"),
            options: ["A".into(), "B".into(), "C".into(), "D".into()],
            correct_answer: 0_u8.try_into().unwrap(),
            explanation: None,
            section: None,
            difficulty,
            topic: "Sensors".to_owned(),
            category: "Sensors & Transmitters".to_owned(),
        }
    }

    fn count(questions: &[&Question], difficulty: Difficulty) -> usize {
        questions.iter().filter(|q| q.difficulty == difficulty).count()
    }

    #[test]
    fn test_targets_follow_largest_remainder() {
        let mix = mix(1.0, 2.0, 1.0);
        // 2.5 / 5 / 2.5: the tie on the fraction goes to the easier tier.
        assert_eq!(
            targets(&mix, 10),
            vec![
                (Difficulty::Basic, 3),
                (Difficulty::Intermediate, 5),
                (Difficulty::Advanced, 2)
            ]
        );
        assert_eq!(
            targets(&mix, 4),
            vec![
                (Difficulty::Basic, 1),
                (Difficulty::Intermediate, 2),
                (Difficulty::Advanced, 1)
            ]
        );
        assert_eq!(targets(&mix, 0).iter().map(|(_, t)| t).sum::<usize>(), 0);
    }

    #[test]
    fn test_targets_sum_to_n() {
        let mix = mix(1.0, 1.0, 1.0);
        for n in 0..50 {
            assert_eq!(targets(&mix, n).iter().map(|(_, t)| t).sum::<usize>(), n);
        }
    }

    #[test]
    fn test_validate() {
        assert!(validate(&mix(0.35, 0.45, 0.2)).is_ok());
        assert!(validate(&mix(0.0, 1.0, 0.0)).is_ok());
        assert!(validate(&mix(0.0, 0.0, 0.0)).is_err());
        assert!(validate(&mix(-0.1, 1.0, 0.0)).is_err());
        assert!(validate(&mix(f64::NAN, 1.0, 0.0)).is_err());
        assert!(validate(&mix(f64::INFINITY, 1.0, 0.0)).is_err());
    }

    #[test]
    fn test_draw_respects_mix() {
        let bank: Vec<Question> = (0..30)
            .map(|id| {
                let difficulty = match id % 3 {
                    0 => Difficulty::Basic,
                    1 => Difficulty::Intermediate,
                    _ => Difficulty::Advanced,
                };
                question(id, difficulty)
            })
            .collect();
        let pool: Vec<&Question> = bank.iter().collect();
        let mut rng = StdRng::seed_from_u64(11);

        let drawn = draw(&pool, 10, Some(&mix(1.0, 2.0, 1.0)), &mut rng);
        assert_eq!(drawn.len(), 10);
        assert_eq!(count(&drawn, Difficulty::Basic), 3);
        assert_eq!(count(&drawn, Difficulty::Intermediate), 5);
        assert_eq!(count(&drawn, Difficulty::Advanced), 2);
    }

    #[test]
    fn test_draw_fills_short_tiers() {
        // Only one advanced question, but the mix asks for advanced only.
        let bank: Vec<Question> = vec![
            question(1, Difficulty::Advanced),
            question(2, Difficulty::Basic),
            question(3, Difficulty::Basic),
            question(4, Difficulty::Intermediate),
        ];
        let pool: Vec<&Question> = bank.iter().collect();
        let mut rng = StdRng::seed_from_u64(12);

        let drawn = draw(&pool, 3, Some(&mix(0.0, 0.0, 1.0)), &mut rng);
        assert_eq!(drawn.len(), 3);
        assert_eq!(count(&drawn, Difficulty::Advanced), 1);
        let mut ids: Vec<u32> = drawn.iter().map(|q| q.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_draw_without_mix_is_uniform_subset() {
        let bank: Vec<Question> = (0..8).map(|id| question(id, Difficulty::Basic)).collect();
        let pool: Vec<&Question> = bank.iter().collect();
        let mut rng = StdRng::seed_from_u64(13);

        let mut hits = [0_usize; 8];
        for _ in 0..4000 {
            for q in draw(&pool, 2, None, &mut rng) {
                hits[q.id as usize] += 1;
            }
        }
        // 8000 draws over 8 questions.
        assert!(hits.iter().all(|&n| (850..=1150).contains(&n)), "{hits:?}");
    }
}
