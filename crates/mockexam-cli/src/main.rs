mod cli;

use anyhow::Result;
use clap::Parser;
use cli::opt;
use mockexam_utils::tracing::TracingConfig;
use std::io::IsTerminal;
use tracing::level_filters::LevelFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let opt = opt::Cli::parse();
    mockexam_utils::tracing::setup(
        TracingConfig::builder()
            .package(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .default_level(if opt.debug { LevelFilter::DEBUG } else { LevelFilter::WARN })
            .ansi(std::io::stderr().is_terminal())
            .build(),
    )?;
    cli::exec(opt.command).await
}
