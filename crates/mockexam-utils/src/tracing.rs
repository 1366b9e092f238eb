use thiserror::Error;
use tracing_core::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use typed_builder::TypedBuilder;

#[derive(TypedBuilder, Debug)]
pub struct TracingConfig {
    /// Name and version of the binary, logged once the subscriber is up.
    pub package: &'static str,
    pub version: &'static str,
    /// Applies when `RUST_LOG` does not set a level.
    #[builder(default = LevelFilter::INFO)]
    pub default_level: LevelFilter,
    /// Colored output, usually only when stderr is a terminal.
    #[builder(default = false)]
    pub ansi: bool,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    TracingInit(#[from] tracing_subscriber::util::TryInitError),
}

/// Installs the global subscriber. `RUST_LOG` overrides `default_level`.
pub fn setup(config: TracingConfig) -> Result<(), Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(config.ansi)
                .with_writer(std::io::stderr),
        )
        .with(
            EnvFilter::builder()
                .with_default_directive(config.default_level.into())
                .from_env_lossy(),
        )
        .try_init()?;
    tracing::debug!(
        package = config.package,
        version = config.version,
        level = %config.default_level,
        "tracing initialized"
    );
    Ok(())
}
