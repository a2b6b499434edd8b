//! Application configuration
//!
//! Everything is optional; an absent file or table means defaults.
//!
//! ```toml
//! max_guesses = 6
//! codec_key = 1592642165
//!
//! [daily]
//! epoch = "2025-01-01"
//! utc_offset_minutes = 0
//! salt = 42
//!
//! [hints]
//! definition_seconds = [0, 30, 60]
//! definition_guesses = [0, 2, 4]
//! letter_start_seconds = 90
//! letter_interval_seconds = 30
//! letter_order = "edges_first"
//! ```

use crate::game::DEFAULT_MAX_GUESSES;
use crate::hints::{HintConfig, HintConfigError};
use crate::selection::codec::DEFAULT_KEY;
use crate::selection::daily::{DEFAULT_SALT, default_epoch};
use crate::selection::{DailySchedule, WordIdCodec};
use chrono::{FixedOffset, NaiveDate};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Largest accepted UTC offset, in minutes
const MAX_OFFSET_MINUTES: i32 = 14 * 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("max_guesses must be at least 1")]
    ZeroGuesses,
    #[error("utc_offset_minutes {0} is outside -840..=840")]
    InvalidOffset(i32),
    #[error(transparent)]
    Hints(#[from] HintConfigError),
}

/// Daily schedule settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DailyConfig {
    /// First day of the schedule, `YYYY-MM-DD`
    pub epoch: NaiveDate,
    /// Fixed offset of the reference timezone
    pub utc_offset_minutes: i32,
    pub salt: u64,
}

impl Default for DailyConfig {
    fn default() -> Self {
        Self {
            epoch: default_epoch(),
            utc_offset_minutes: 0,
            salt: DEFAULT_SALT,
        }
    }
}

impl DailyConfig {
    fn offset(&self) -> Result<FixedOffset, ConfigError> {
        if self.utc_offset_minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(ConfigError::InvalidOffset(self.utc_offset_minutes));
        }
        FixedOffset::east_opt(self.utc_offset_minutes * 60)
            .ok_or(ConfigError::InvalidOffset(self.utc_offset_minutes))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub max_guesses: usize,
    pub codec_key: u32,
    pub daily: DailyConfig,
    pub hints: HintConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_guesses: DEFAULT_MAX_GUESSES,
            codec_key: DEFAULT_KEY,
            daily: DailyConfig::default(),
            hints: HintConfig::default(),
        }
    }
}

impl AppConfig {
    /// Read and validate a TOML file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, does not parse, or
    /// fails [`validate`](Self::validate).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Defaults, or the file at `path` when given
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Parse and validate TOML text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML or unknown keys, and
    /// the validation errors of [`validate`](Self::validate).
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Rejects zero guesses, offsets beyond ±14 hours and unusable hint
    /// thresholds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_guesses == 0 {
            return Err(ConfigError::ZeroGuesses);
        }
        self.daily.offset()?;
        self.hints.validate()?;
        Ok(())
    }

    /// Daily schedule described by the `[daily]` table
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidOffset` for an out-of-range offset.
    pub fn schedule(&self) -> Result<DailySchedule, ConfigError> {
        Ok(DailySchedule::new(self.daily.epoch, self.daily.offset()?, self.daily.salt))
    }

    #[must_use]
    pub const fn codec(&self) -> WordIdCodec {
        WordIdCodec::new(self.codec_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hints::LetterOrder;

    #[test]
    fn empty_text_is_default() {
        assert_eq!(AppConfig::from_toml_str("").unwrap(), AppConfig::default());
        assert_eq!(AppConfig::load_or_default(None).unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            max_guesses = 8

            [daily]
            epoch = "2026-01-01"
            utc_offset_minutes = -300

            [hints]
            letter_order = "edges_first"
            "#,
        )
        .unwrap();

        assert_eq!(config.max_guesses, 8);
        assert_eq!(config.codec_key, DEFAULT_KEY);
        assert_eq!(config.daily.epoch, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        assert_eq!(config.daily.salt, DEFAULT_SALT);
        assert_eq!(config.hints.letter_order, LetterOrder::EdgesFirst);
        assert_eq!(config.hints.letter_start_seconds, 90);
        assert!(config.schedule().is_ok());
    }

    #[test]
    fn rejects_zero_guesses() {
        let err = AppConfig::from_toml_str("max_guesses = 0").unwrap_err();
        assert!(matches!(err, ConfigError::ZeroGuesses));
    }

    #[test]
    fn rejects_out_of_range_offset() {
        let err = AppConfig::from_toml_str("[daily]\nutc_offset_minutes = 900").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOffset(900)));
    }

    #[test]
    fn rejects_descending_thresholds() {
        let err = AppConfig::from_toml_str("[hints]\ndefinition_seconds = [0, 60, 30]").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Hints(HintConfigError::NotAscending("definition_seconds"))
        ));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = AppConfig::from_toml_str("max_guesess = 6").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = AppConfig::load(Path::new("/no/such/purrdle.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
