pub(crate) mod opt;

mod draw;
mod grade;
mod list;
mod schema;

use crate::opt::Commands;
use anyhow::{Context, Error};
use mockexam_config::exam::ExamCatalog;
use mockexam_utils::loader::Loader;
use std::path::Path;

pub(crate) async fn exec(command: Commands) -> Result<(), Error> {
    match command {
        Commands::List(o) => list::list(o).await,
        Commands::Draw(o) => draw::draw(o).await,
        Commands::Grade(o) => grade::grade(o).await,
        Commands::Schema(o) => schema::exec(o),
    }
}

/// Exams below `path`, or the banks compiled into the binary.
async fn catalog(path: Option<&Path>) -> Result<ExamCatalog, Error> {
    match path {
        Some(path) => mockexam_config::exam::load(Loader::file_system(path))
            .await
            .with_context(|| format!("Failed to load exams from {}", path.display())),
        None => mockexam_config::builtin::catalog()
            .await
            .context("Failed to load the builtin exams"),
    }
}
