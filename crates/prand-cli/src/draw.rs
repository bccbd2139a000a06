//! Drawing configured values from a generator.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use prand_core::{DeterministicRng, range};
use tracing::{debug, instrument};

use crate::config::{Config, Kind};
use crate::error::CliError;

/// A single drawn value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    /// From `next_uint`.
    Uint(u64),
    /// From `next_int`.
    Int(i64),
    /// From `next_double`.
    Double(f64),
    /// From `next_float`.
    Float(f32),
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uint(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

fn parse_bound<T: FromStr>(name: &str, raw: &str, kind: Kind) -> Result<T, CliError>
where
    T::Err: fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| CliError::Config(format!("{name} must be a valid {kind} bound: {e}")))
}

/// Parsed bounds for one kind, already checked to form a usable range.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Bounds {
    Uint(u64, u64),
    Int(i64, i64),
    Double(f64, f64),
    Float(f32, f32),
}

impl Bounds {
    fn parse(config: &Config) -> Result<Self, CliError> {
        let kind = config.kind;
        let bounds = match kind {
            Kind::Uint => {
                let min = parse_bound("PRAND_MIN", &config.min, kind)?;
                let max = parse_bound("PRAND_MAX", &config.max, kind)?;
                range::check_uint(min, max)?;
                Self::Uint(min, max)
            }
            Kind::Int => {
                let min = parse_bound("PRAND_MIN", &config.min, kind)?;
                let max = parse_bound("PRAND_MAX", &config.max, kind)?;
                range::check_int(min, max)?;
                Self::Int(min, max)
            }
            Kind::Double => {
                let min = parse_bound("PRAND_MIN", &config.min, kind)?;
                let max = parse_bound("PRAND_MAX", &config.max, kind)?;
                range::check_double(min, max)?;
                Self::Double(min, max)
            }
            Kind::Float => {
                let min = parse_bound("PRAND_MIN", &config.min, kind)?;
                let max = parse_bound("PRAND_MAX", &config.max, kind)?;
                range::check_float(min, max)?;
                Self::Float(min, max)
            }
        };
        Ok(bounds)
    }

    fn sample(self, rng: &mut dyn DeterministicRng) -> Sample {
        match self {
            Self::Uint(min, max) => Sample::Uint(rng.next_uint(min, max)),
            Self::Int(min, max) => Sample::Int(rng.next_int(min, max)),
            Self::Double(min, max) => Sample::Double(rng.next_double(min, max)),
            Self::Float(min, max) => Sample::Float(rng.next_float(min, max)),
        }
    }
}

/// Draws `config.count` values of `config.kind` from `rng`.
///
/// Bounds are parsed and checked before any word is consumed, whatever the
/// count, so a rejected range leaves `rng` untouched.
///
/// # Errors
///
/// Returns `CliError::Config` if a bound does not parse for the kind, and
/// `CliError::Range` if the bounds do not form a non-empty finite range.
#[instrument(skip(rng), fields(kind = %config.kind, count = config.count))]
pub fn draw(config: &Config, rng: &mut dyn DeterministicRng) -> Result<Vec<Sample>, CliError> {
    let bounds = Bounds::parse(config)?;
    // The count is user input; let the vector grow as values arrive.
    let mut samples = Vec::new();
    for _ in 0..config.count {
        samples.push(bounds.sample(rng));
    }

    debug!(drawn = samples.len(), "draw complete");
    Ok(samples)
}

/// Draws `config.count` values and writes each one to `out` as it is drawn,
/// one per line. Memory use does not depend on the count.
///
/// # Errors
///
/// Returns the same errors as [`draw`] before anything is written, and
/// `CliError::Output` if writing fails.
#[instrument(skip(rng, out), fields(kind = %config.kind, count = config.count))]
pub fn stream(
    config: &Config,
    rng: &mut dyn DeterministicRng,
    out: &mut impl Write,
) -> Result<usize, CliError> {
    let bounds = Bounds::parse(config)?;
    for _ in 0..config.count {
        writeln!(out, "{}", bounds.sample(rng))?;
    }

    debug!(drawn = config.count, "stream complete");
    Ok(config.count)
}

/// Writes one sample per line.
///
/// # Errors
///
/// Returns `CliError::Output` if writing fails.
pub fn write_samples(out: &mut impl Write, samples: &[Sample]) -> Result<(), CliError> {
    for sample in samples {
        writeln!(out, "{sample}")?;
    }
    Ok(())
}
