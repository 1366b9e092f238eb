use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mockexam", about = "Draw and grade balanced mock exams")]
pub(crate) struct Cli {
    /// Log at debug level (`RUST_LOG` still takes precedence)
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// List the available exams
    List(List),

    /// Draw the questions of one attempt
    Draw(Draw),

    /// Score answers given for an attempt
    Grade(Grade),

    /// Write the JSON schema of the exam file format
    Schema(Schema),
}

#[derive(Debug, Parser)]
pub(crate) struct List {
    /// Folder with exam files, the builtin banks are used when omitted
    pub(crate) path: Option<PathBuf>,
}

#[derive(Debug, Parser)]
pub(crate) struct Draw {
    pub(crate) path: Option<PathBuf>,

    #[arg(short, long)]
    pub(crate) exam: String,

    /// Defaults to the exam's configured number of questions
    #[arg(short, long)]
    pub(crate) count: Option<usize>,

    #[arg(short, long)]
    pub(crate) seed: Option<u64>,

    /// Ignore categories and draw uniformly from the whole bank
    #[arg(long)]
    pub(crate) unbalanced: bool,
}

#[derive(Debug, Parser)]
pub(crate) struct Grade {
    pub(crate) path: Option<PathBuf>,

    #[arg(short, long)]
    pub(crate) exam: String,

    /// JSON object mapping question ids to the chosen option index
    #[arg(short, long)]
    pub(crate) answers: PathBuf,

    /// Output of `draw`. Without it only the answered questions are scored.
    #[arg(long)]
    pub(crate) attempt: Option<PathBuf>,
}

#[derive(Debug, Parser)]
pub(crate) struct Schema {
    #[arg(required = true)]
    pub(crate) output_folder: String,
}
