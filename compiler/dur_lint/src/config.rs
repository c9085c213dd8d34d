//! Lint configuration.

use thiserror::Error;

/// Name of the strict conversion flag, without leading dashes.
pub const FORBID_IMPROPER_CONVERSIONS: &str = "forbid-improper-conversions";

/// Behaviour switches for one lint run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LintConfig {
    /// Report `time.Duration(n)` conversions of integers that are never
    /// multiplied by a unit, instead of trusting every explicit conversion.
    pub forbid_improper_conversions: bool,
}

/// Error parsing driver flags.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown flag `{0}`")]
    UnknownFlag(String),

    #[error("invalid value `{value}` for `--{flag}` (expected `true` or `false`)")]
    InvalidValue { flag: &'static str, value: String },
}

impl LintConfig {
    /// Configuration with improper conversions forbidden.
    pub fn strict() -> Self {
        LintConfig {
            forbid_improper_conversions: true,
        }
    }

    /// Parse driver flags.
    ///
    /// Accepts `--forbid-improper-conversions` and
    /// `--forbid-improper-conversions=<bool>`; later flags override earlier
    /// ones.
    pub fn from_flags<S: AsRef<str>>(args: &[S]) -> Result<Self, ConfigError> {
        let mut config = LintConfig::default();

        for arg in args {
            let arg = arg.as_ref();
            let Some(flag) = arg.strip_prefix("--") else {
                return Err(ConfigError::UnknownFlag(arg.to_string()));
            };

            if flag == FORBID_IMPROPER_CONVERSIONS {
                config.forbid_improper_conversions = true;
            } else if let Some(value) = flag
                .strip_prefix(FORBID_IMPROPER_CONVERSIONS)
                .and_then(|rest| rest.strip_prefix('='))
            {
                config.forbid_improper_conversions = parse_bool(value).ok_or_else(|| {
                    ConfigError::InvalidValue {
                        flag: FORBID_IMPROPER_CONVERSIONS,
                        value: value.to_string(),
                    }
                })?;
            } else {
                return Err(ConfigError::UnknownFlag(arg.to_string()));
            }
        }

        Ok(config)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
