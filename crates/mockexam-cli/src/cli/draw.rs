use crate::cli::catalog;
use crate::opt::Draw;
use anyhow::{Error, bail};
use mockexam_config::exam::Exam;
use mockexam_config::exam::question::Question;
use mockexam_core::selection::{SelectionRequest, select_balanced, select_random};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// One drawn attempt as printed by `draw` and read back by `grade`.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct Attempt<Q> {
    pub(crate) exam_id: String,
    pub(crate) exam_title: String,
    pub(crate) time_limit: u32,
    pub(crate) pass_threshold: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) exit_path: Option<String>,
    pub(crate) questions: Vec<Q>,
}

/// Draws `count` questions of `exam`, or its configured number when `None`.
pub(crate) fn draw_attempt<'e, R: Rng + ?Sized>(
    exam: &'e Exam,
    count: Option<usize>,
    unbalanced: bool,
    rng: &mut R,
) -> Result<Attempt<&'e Question>, Error> {
    let config = exam.config();
    let count = count.unwrap_or(config.total_questions);
    let questions = if unbalanced {
        select_random(exam.questions(), count, rng)?
    } else {
        let request = SelectionRequest::for_exam(config).with_count(count);
        select_balanced(exam.questions(), &request, rng)?
    };
    if questions.is_empty() {
        bail!("Exam {} has no questions to draw", config.exam_id);
    }
    tracing::debug!(exam_id = %config.exam_id, drawn = questions.len(), "drew attempt");

    Ok(Attempt {
        exam_id: config.exam_id.clone(),
        exam_title: config.exam_title.clone(),
        time_limit: config.time_limit,
        pass_threshold: config.pass_threshold,
        exit_path: config.exit_path.clone(),
        questions,
    })
}

pub(crate) async fn draw(opt: Draw) -> Result<(), Error> {
    let catalog = catalog(opt.path.as_deref()).await?;
    let exam = catalog.exam(&opt.exam)?;

    let mut rng = match opt.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let attempt = draw_attempt(exam, opt.count, opt.unbalanced, &mut rng)?;
    println!("{}", serde_json::to_string_pretty(&attempt)?);
    Ok(())
}
