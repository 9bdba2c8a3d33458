//! Concurrency limit for concurrent traversals.

use std::num::NonZeroUsize;

use crate::error::ConfigError;

/// Maximum number of futures a concurrent traversal keeps in flight.
///
/// The default is the number of logical CPUs.
///
/// # Examples
///
/// ```rust
/// use carrier::error::ConfigError;
/// use carrier::future::Concurrency;
///
/// assert_eq!(Concurrency::new(4).get(), 4);
/// assert_eq!(Concurrency::try_new(0), Err(ConfigError::InvalidConcurrencyLimit));
/// assert!(Concurrency::default().get() >= 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Concurrency {
    limit: NonZeroUsize,
}

impl Concurrency {
    /// Creates a limit of `limit` in-flight futures.
    ///
    /// # Panics
    ///
    /// Panics if `limit` is 0. Use [`Concurrency::try_new`] to handle this case.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self::try_new(limit).expect("Concurrency: limit must be greater than 0")
    }

    /// Tries to create a limit of `limit` in-flight futures.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConcurrencyLimit`] if `limit` is 0.
    pub const fn try_new(limit: usize) -> Result<Self, ConfigError> {
        match NonZeroUsize::new(limit) {
            Some(limit) => Ok(Self { limit }),
            None => Err(ConfigError::InvalidConcurrencyLimit),
        }
    }

    /// No limit: every future is created up front.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            limit: NonZeroUsize::MAX,
        }
    }

    /// The limit as a plain number.
    #[must_use]
    pub const fn get(self) -> usize {
        self.limit.get()
    }

    /// Returns `true` for [`Concurrency::unbounded`].
    #[must_use]
    pub const fn is_unbounded(self) -> bool {
        self.limit.get() == usize::MAX
    }
}

impl Default for Concurrency {
    fn default() -> Self {
        Self {
            limit: NonZeroUsize::new(num_cpus::get()).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

impl TryFrom<usize> for Concurrency {
    type Error = ConfigError;

    fn try_from(limit: usize) -> Result<Self, Self::Error> {
        Self::try_new(limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1)]
    #[case(16)]
    fn try_new_accepts_positive_limits(#[case] limit: usize) {
        assert_eq!(Concurrency::try_new(limit).map(Concurrency::get), Ok(limit));
    }

    #[rstest]
    #[should_panic(expected = "limit must be greater than 0")]
    fn new_panics_on_zero() {
        let _ = Concurrency::new(0);
    }

    #[rstest]
    fn unbounded_reports_itself() {
        assert!(Concurrency::unbounded().is_unbounded());
        assert!(!Concurrency::new(2).is_unbounded());
    }

    #[rstest]
    fn try_from_rejects_zero() {
        assert_eq!(Concurrency::try_from(0), Err(ConfigError::InvalidConcurrencyLimit));
    }
}
