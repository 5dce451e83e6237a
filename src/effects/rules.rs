//! Notification rules attached to accepted steps.

use crate::core::Guard;
use crate::effects::notice::Notification;

/// Default spacing between milestone values.
pub const DEFAULT_MILESTONE_EVERY: i64 = 10;

/// Pure rules deciding which notifications an accepted step calls for.
///
/// - After an increment, a positive multiple of the milestone interval is a
///   milestone.
/// - After a decrement, any negative value is announced.
#[derive(Debug)]
pub struct NoticeRules {
    milestone: Guard<i64>,
    below_zero: Guard<i64>,
}

impl Default for NoticeRules {
    fn default() -> Self {
        Self::new(DEFAULT_MILESTONE_EVERY)
    }
}

impl NoticeRules {
    /// Build rules with milestones every `every` counts.
    ///
    /// `every` must be positive; settings validation enforces this before
    /// rules are built from user input.
    pub fn new(every: i64) -> Self {
        Self {
            milestone: Guard::new(move |v: &i64| *v > 0 && v % every == 0),
            below_zero: Guard::new(|v: &i64| *v < 0),
        }
    }

    pub fn after_increment(&self, value: i64) -> Vec<Notification> {
        if self.milestone.check(&value) {
            vec![Notification::milestone(value)]
        } else {
            Vec::new()
        }
    }

    pub fn after_decrement(&self, value: i64) -> Vec<Notification> {
        if self.below_zero.check(&value) {
            vec![Notification::below_zero()]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn milestones_fire_on_positive_multiples_only() {
        let rules = NoticeRules::default();

        assert_eq!(rules.after_increment(10), vec![Notification::milestone(10)]);
        assert_eq!(rules.after_increment(30).len(), 1);
        assert!(rules.after_increment(9).is_empty());
        assert!(rules.after_increment(0).is_empty());
        assert!(rules.after_increment(-10).is_empty());
    }

    #[test]
    fn decrement_never_reports_milestones() {
        let rules = NoticeRules::default();

        assert!(rules.after_decrement(10).is_empty());
        assert!(rules.after_decrement(0).is_empty());
        assert_eq!(rules.after_decrement(-1), vec![Notification::below_zero()]);
    }

    #[test]
    fn custom_interval_is_used() {
        let rules = NoticeRules::new(3);

        assert_eq!(rules.after_increment(3).len(), 1);
        assert!(rules.after_increment(10).is_empty());
    }
}
