//! Session settings.
//!
//! Settings come from an optional TOML file; every field has a default, so
//! an empty or missing file yields the standard counter:
//!
//! ```toml
//! [counter]
//! min = -999999
//! max = 999999
//! milestone_every = 10
//!
//! [history]
//! recent = 10
//! ```

use crate::core::{Bounds, DEFAULT_RECENT, MAX, MIN};
use crate::effects::DEFAULT_MILESTONE_EVERY;
use serde::{Deserialize, Serialize};
use std::path::Path;
use stillwater::validation::Validation;
use tracing::debug;

mod error;
mod rules;

pub use error::{SettingsError, SettingsViolation};
pub use rules::validate;

/// Top-level settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub counter: CounterSettings,
    pub history: HistorySettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterSettings {
    pub min: i64,
    pub max: i64,
    pub milestone_every: i64,
}

impl Default for CounterSettings {
    fn default() -> Self {
        Self {
            min: MIN,
            max: MAX,
            milestone_every: DEFAULT_MILESTONE_EVERY,
        }
    }
}

impl CounterSettings {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.min, self.max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Records shown in the recent view
    pub recent: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            recent: DEFAULT_RECENT,
        }
    }
}

impl Settings {
    /// Parse and validate settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(text)?;
        settings.validated()
    }

    /// Load settings from `path`, or use defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded settings file");
        Self::from_toml_str(&text)
    }

    /// Return the settings unchanged if they pass validation.
    pub fn validated(self) -> Result<Self, SettingsError> {
        match validate(&self) {
            Validation::Success(_) => Ok(self),
            Validation::Failure(errors) => Err(SettingsError::Invalid(
                errors.iter().cloned().collect(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_text_gives_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.counter.bounds(), Bounds::default());
        assert_eq!(settings.history.recent, 10);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let settings = Settings::from_toml_str("[history]\nrecent = 3\n").unwrap();
        assert_eq!(settings.history.recent, 3);
        assert_eq!(settings.counter, CounterSettings::default());
    }

    #[test]
    fn invalid_settings_list_every_violation() {
        let err = Settings::from_toml_str(
            "[counter]\nmilestone_every = 0\n[history]\nrecent = 0\n",
        )
        .unwrap_err();

        match err {
            SettingsError::Invalid(violations) => {
                assert_eq!(
                    violations,
                    vec![
                        SettingsViolation::MilestoneNotPositive { every: 0 },
                        SettingsViolation::RecentIsZero,
                    ]
                );
            }
            other => panic!("Expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Settings::from_toml_str("[counter\nmin = ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn load_without_path_uses_defaults() {
        assert_eq!(Settings::load(None).unwrap(), Settings::default());
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[counter]\nmin = -50\nmax = 50").unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.counter.bounds(), Bounds::new(-50, 50));
    }

    #[test]
    fn load_missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, SettingsError::Read { .. }));
    }
}
