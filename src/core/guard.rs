//! Guard predicates over counter values.
//!
//! Guards are pure boolean functions. The session uses them to decide which
//! notifications an accepted transition calls for, keeping those conditions
//! declarative and free of side effects.

/// Pure predicate over a value of type `T`.
///
/// # Example
///
/// ```rust
/// use tally::core::Guard;
///
/// let milestone = Guard::new(|v: &i64| *v > 0 && v % 10 == 0);
///
/// assert!(milestone.check(&10));
/// assert!(!milestone.check(&0));
/// assert!(!milestone.check(&-10));
/// assert!(!milestone.check(&11));
/// ```
pub struct Guard<T> {
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Evaluate the predicate without side effects.
    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }
}

impl<T> std::fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_allows_matching_values() {
        let guard = Guard::new(|v: &i64| *v < 0);

        assert!(guard.check(&-1));
        assert!(!guard.check(&0));
        assert!(!guard.check(&1));
    }

    #[test]
    fn guard_is_deterministic() {
        let guard = Guard::new(|v: &i64| v % 10 == 0);

        let result1 = guard.check(&20);
        let result2 = guard.check(&20);

        assert_eq!(result1, result2);
    }

    #[test]
    fn guard_can_capture_configuration() {
        let every = 25;
        let guard = Guard::new(move |v: &i64| *v > 0 && v % every == 0);

        assert!(guard.check(&25));
        assert!(guard.check(&50));
        assert!(!guard.check(&10));
    }
}
