//! prand command-line entry point.

use std::error::Error;
use std::io::Write;

use prand_cli::config::Config;
use prand_cli::draw;
use prand_core::Prand;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr so stdout carries only drawn values.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = Config::from_env()?;
    tracing::info!(kind = %config.kind, count = config.count, "Starting prand");

    let mut rng = match config.seed {
        Some(seed) => Prand::new(seed),
        None => Prand::from_os_seed(),
    };
    tracing::info!(seed = rng.state(), "Generator seeded");

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    draw::stream(&config, &mut rng, &mut out)?;
    out.flush()?;

    Ok(())
}
