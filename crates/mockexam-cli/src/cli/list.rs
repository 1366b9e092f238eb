use crate::cli::catalog;
use crate::opt::List;
use anyhow::Error;

pub(crate) async fn list(opt: List) -> Result<(), Error> {
    let catalog = catalog(opt.path.as_deref()).await?;
    if catalog.is_empty() {
        println!("No exams found");
        return Ok(());
    }
    for exam in catalog.exams().values() {
        let config = exam.config();
        println!(
            "{}: {} ({} of {} questions, {} min, pass at {}%)",
            config.exam_id,
            config.exam_title,
            config.total_questions,
            exam.questions().len(),
            config.time_limit().as_secs() / 60,
            config.pass_threshold,
        );
        for (category, size) in exam.category_sizes() {
            println!("  {category}: {size}");
        }
    }
    Ok(())
}
