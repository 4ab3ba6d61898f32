//! Device Control console
//!
//! An interactive console for driving a simulated audio interface. Reads
//! one command per line from stdin, applies it through the command layer
//! and echoes change notifications; `--test` runs the built-in self-test
//! suite instead of the interactive loop.

mod repl;
mod selftest;
mod settings;

use std::env;
use std::path::PathBuf;

use anyhow::bail;
use settings::ConsoleConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parsed launch arguments
struct CliOptions {
    /// Run the self-test suite instead of the interactive loop
    self_test: bool,
    /// Optional configuration file
    config_path: Option<PathBuf>,
}

impl CliOptions {
    fn parse(mut args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let mut options = Self {
            self_test: false,
            config_path: None,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--test" => options.self_test = true,
                "--config" => match args.next() {
                    Some(path) => options.config_path = Some(PathBuf::from(path)),
                    None => bail!("--config requires a file path"),
                },
                other => bail!("unknown argument: {other} (expected --test or --config <path>)"),
            }
        }

        Ok(options)
    }
}

fn main() -> anyhow::Result<()> {
    let options = CliOptions::parse(env::args().skip(1))?;

    // Load config before tracing init so a configured filter applies to
    // every log line.
    let config = match &options.config_path {
        Some(path) => ConsoleConfig::load(path)?,
        None => ConsoleConfig::default(),
    };

    init_tracing(config.log_filter.as_deref());

    tracing::info!("Starting Device Control console");

    if options.self_test {
        // Exit code stays 0 whatever the suite reports; the printed
        // summary is the harness contract.
        selftest::run();
        return Ok(());
    }

    repl::run(config.device)
}

/// Initialize logging on stderr, leaving stdout to the command protocol
fn init_tracing(config_filter: Option<&str>) {
    let fallback = config_filter.unwrap_or("devcon=info,dc_device=info,dc_command=info");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
