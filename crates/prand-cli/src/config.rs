//! Configuration read from environment variables.

use std::fmt;
use std::str::FromStr;

use crate::error::CliError;

/// Which accessor to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// `u64` in `[min, max)`.
    Uint,
    /// `i64` in `[min, max)`.
    Int,
    /// `f64` in `[min, max)`.
    Double,
    /// `f32` in `[min, max)`.
    Float,
}

impl FromStr for Kind {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uint" => Ok(Self::Uint),
            "int" => Ok(Self::Int),
            "double" => Ok(Self::Double),
            "float" => Ok(Self::Float),
            other => Err(CliError::Config(format!(
                "PRAND_KIND must be one of uint, int, double, float (got {other:?})"
            ))),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Uint => "uint",
            Self::Int => "int",
            Self::Double => "double",
            Self::Float => "float",
        };
        f.write_str(name)
    }
}

/// Runtime configuration for the `prand` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Accessor to draw from.
    pub kind: Kind,
    /// Lower bound, unparsed until the kind is known.
    pub min: String,
    /// Upper bound, unparsed until the kind is known.
    pub max: String,
    /// Number of values to draw.
    pub count: usize,
    /// Explicit seed; `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Config` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Config` if a variable is present but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CliError> {
        let kind = lookup("PRAND_KIND")
            .unwrap_or_else(|| "uint".to_string())
            .parse()?;
        let min = lookup("PRAND_MIN").unwrap_or_else(|| "0".to_string());
        let max = lookup("PRAND_MAX").unwrap_or_else(|| "100".to_string());
        let count = lookup("PRAND_COUNT")
            .unwrap_or_else(|| "1".to_string())
            .trim()
            .parse()
            .map_err(|e| CliError::Config(format!("PRAND_COUNT must be a valid usize: {e}")))?;
        let seed = lookup("PRAND_SEED").map(|s| parse_seed(&s)).transpose()?;

        Ok(Self {
            kind,
            min,
            max,
            count,
            seed,
        })
    }
}

/// Parses a seed written in decimal or as `0x`-prefixed hex.
///
/// # Errors
///
/// Returns `CliError::Config` if `raw` is not a valid `u64`.
pub fn parse_seed(raw: &str) -> Result<u64, CliError> {
    let raw = raw.trim();
    let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16),
        None => raw.replace('_', "").parse(),
    };
    parsed.map_err(|e| CliError::Config(format!("PRAND_SEED must be a valid u64: {e}")))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(
            config,
            Config {
                kind: Kind::Uint,
                min: "0".to_string(),
                max: "100".to_string(),
                count: 1,
                seed: None,
            }
        );
    }

    #[test]
    fn test_reads_every_variable() {
        let config = Config::from_lookup(lookup_from(&[
            ("PRAND_KIND", "Float"),
            ("PRAND_MIN", "-2.0"),
            ("PRAND_MAX", "2.0"),
            ("PRAND_COUNT", "16"),
            ("PRAND_SEED", "0xDEADBEEF"),
        ]))
        .unwrap();

        assert_eq!(config.kind, Kind::Float);
        assert_eq!(config.min, "-2.0");
        assert_eq!(config.max, "2.0");
        assert_eq!(config.count, 16);
        assert_eq!(config.seed, Some(0xDEAD_BEEF));
    }

    #[test]
    fn test_rejects_unknown_kind() {
        let result = Config::from_lookup(lookup_from(&[("PRAND_KIND", "complex")]));
        match result {
            Err(CliError::Config(msg)) => assert!(msg.contains("complex")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_invalid_count() {
        let result = Config::from_lookup(lookup_from(&[("PRAND_COUNT", "-1")]));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_parse_seed_accepts_decimal_and_hex() {
        assert_eq!(parse_seed("12345").unwrap(), 12_345);
        assert_eq!(parse_seed(" 0x00ff ").unwrap(), 255);
        assert_eq!(parse_seed("0XDEAD_BEEF").unwrap(), 0xDEAD_BEEF);
        assert_eq!(parse_seed("18446744073709551615").unwrap(), u64::MAX);
    }

    #[test]
    fn test_parse_seed_rejects_garbage() {
        assert!(parse_seed("seed").is_err());
        assert!(parse_seed("0x").is_err());
        assert!(parse_seed("18446744073709551616").is_err());
    }

    #[test]
    fn test_kind_display_round_trips_through_parse() {
        for kind in [Kind::Uint, Kind::Int, Kind::Double, Kind::Float] {
            assert_eq!(kind.to_string().parse::<Kind>().unwrap(), kind);
        }
    }
}
