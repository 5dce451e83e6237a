//! Settings error types.

use std::path::PathBuf;
use thiserror::Error;

/// A single rule a settings value broke.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SettingsViolation {
    #[error("counter.min ({min}) must be below counter.max ({max})")]
    EmptyRange { min: i64, max: i64 },

    #[error("counter.min ({min}) must not be above zero")]
    MinAboveZero { min: i64 },

    #[error("counter.max ({max}) must not be below zero")]
    MaxBelowZero { max: i64 },

    #[error("counter.milestone_every ({every}) must be positive")]
    MilestoneNotPositive { every: i64 },

    #[error("history.recent must be at least 1")]
    RecentIsZero,
}

/// Errors that can occur when loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid settings: {}", list(.0))]
    Invalid(Vec<SettingsViolation>),
}

fn list(violations: &[SettingsViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
