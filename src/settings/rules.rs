//! Settings validation that reports every violation at once.

use crate::settings::error::SettingsViolation;
use crate::settings::Settings;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<SettingsViolation>>;

fn check(ok: bool, violation: impl FnOnce() -> SettingsViolation) -> Check {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

/// Validate settings, accumulating ALL violations.
///
/// Returns `Validation::Success(())` if every rule holds, or
/// `Validation::Failure` carrying every rule that was broken.
pub fn validate(settings: &Settings) -> Validation<(), NonEmptyVec<SettingsViolation>> {
    let counter = &settings.counter;

    let checks = vec![
        check(counter.min < counter.max, || SettingsViolation::EmptyRange {
            min: counter.min,
            max: counter.max,
        }),
        check(counter.min <= 0, || SettingsViolation::MinAboveZero {
            min: counter.min,
        }),
        check(counter.max >= 0, || SettingsViolation::MaxBelowZero {
            max: counter.max,
        }),
        check(counter.milestone_every > 0, || {
            SettingsViolation::MilestoneNotPositive {
                every: counter.milestone_every,
            }
        }),
        check(settings.history.recent > 0, || SettingsViolation::RecentIsZero),
    ];

    Validation::all_vec(checks).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{CounterSettings, HistorySettings};

    #[test]
    fn defaults_are_valid() {
        assert!(validate(&Settings::default()).is_success());
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let settings = Settings {
            counter: CounterSettings {
                min: 5,
                max: -5,
                milestone_every: 0,
            },
            history: HistorySettings { recent: 0 },
        };

        match validate(&settings) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 5);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, SettingsViolation::EmptyRange { .. })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, SettingsViolation::MinAboveZero { min: 5 })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, SettingsViolation::MaxBelowZero { max: -5 })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, SettingsViolation::MilestoneNotPositive { .. })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, SettingsViolation::RecentIsZero)));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn range_without_zero_is_rejected() {
        let settings = Settings {
            counter: CounterSettings {
                min: 1,
                max: 10,
                ..CounterSettings::default()
            },
            ..Settings::default()
        };

        let result = validate(&settings);
        assert!(result.is_failure());
        if let Validation::Failure(errors) = result {
            assert_eq!(errors.len(), 1);
        }
    }
}
