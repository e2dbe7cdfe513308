//! Salary estimation logic.

use std::sync::OnceLock;

use jobstat_types::SalaryRange;

/// Currency codes that denote roubles, as spelled by the supported providers.
///
/// Matching is case-sensitive: HeadHunter reports `RUR`, SuperJob reports `rub`.
pub const DOMESTIC_CURRENCIES: &[&str] = &["RUR", "RUB", "rub"];

/// Multiplier applied when only the lower bound is published.
const LOWER_ONLY_FACTOR: f64 = 1.2;

/// Multiplier applied when only the upper bound is published.
const UPPER_ONLY_FACTOR: f64 = 0.8;

/// Static estimator instance.
static ESTIMATOR: OnceLock<SalaryEstimator> = OnceLock::new();

/// Estimates a single salary value from a published range.
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryEstimator {
    /// Accepted spellings of the reporting currency.
    domestic: Vec<String>,
    /// Multiplier for a lone lower bound.
    lower_factor: f64,
    /// Multiplier for a lone upper bound.
    upper_factor: f64,
}

impl Default for SalaryEstimator {
    fn default() -> Self {
        Self::new(DOMESTIC_CURRENCIES.iter().copied())
    }
}

impl SalaryEstimator {
    /// Creates an estimator that accepts the given currency spellings.
    #[must_use]
    pub fn new<I, S>(domestic: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            domestic: domestic.into_iter().map(Into::into).collect(),
            lower_factor: LOWER_ONLY_FACTOR,
            upper_factor: UPPER_ONLY_FACTOR,
        }
    }

    /// Returns the global estimator instance with default settings.
    #[must_use]
    pub fn global() -> &'static Self {
        ESTIMATOR.get_or_init(Self::default)
    }

    /// Returns true if `code` is an accepted spelling of the reporting currency.
    #[must_use]
    pub fn is_domestic(&self, code: &str) -> bool {
        self.domestic.iter().any(|c| c == code)
    }

    /// Estimates a salary from a published range.
    ///
    /// Returns `None` when the range carries a foreign currency or no
    /// usable bound. A bound of `0` counts as not published.
    ///
    /// # Example
    ///
    /// ```
    /// use jobstat_estimate::SalaryEstimator;
    /// use jobstat_types::SalaryRange;
    ///
    /// let estimator = SalaryEstimator::global();
    /// let range = SalaryRange::new(Some(1000.0), Some(2000.0), Some("RUR"));
    /// assert_eq!(estimator.estimate(&range), Some(1500.0));
    /// ```
    #[must_use]
    pub fn estimate(&self, range: &SalaryRange) -> Option<f64> {
        if let Some(code) = range.currency.as_deref()
            && !self.is_domestic(code)
        {
            return None;
        }

        match (range.lower(), range.upper()) {
            (Some(from), Some(to)) => Some((from + to) / 2.0),
            (Some(from), None) => Some(from * self.lower_factor),
            (None, Some(to)) => Some(to * self.upper_factor),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rur(from: Option<f64>, to: Option<f64>) -> SalaryRange {
        SalaryRange::new(from, to, Some("RUR"))
    }

    #[test]
    fn test_both_bounds_mean() {
        let est = SalaryEstimator::global().estimate(&rur(Some(1000.0), Some(2000.0)));
        assert_relative_eq!(est.unwrap(), 1500.0);
    }

    #[test]
    fn test_lower_only() {
        let est = SalaryEstimator::global().estimate(&rur(Some(1000.0), None));
        assert_relative_eq!(est.unwrap(), 1200.0);
    }

    #[test]
    fn test_upper_only() {
        let est = SalaryEstimator::global().estimate(&rur(None, Some(1000.0)));
        assert_relative_eq!(est.unwrap(), 800.0);
    }

    #[test]
    fn test_no_bounds_unknown() {
        assert_eq!(SalaryEstimator::global().estimate(&rur(None, None)), None);
    }

    #[test]
    fn test_zero_bound_treated_as_absent() {
        let estimator = SalaryEstimator::global();
        assert_eq!(estimator.estimate(&rur(Some(0.0), Some(0.0))), None);

        let est = estimator.estimate(&rur(Some(0.0), Some(1000.0)));
        assert_relative_eq!(est.unwrap(), 800.0);
    }

    #[test]
    fn test_foreign_currency_unknown_regardless_of_bounds() {
        let estimator = SalaryEstimator::global();
        for code in ["USD", "EUR", "KZT", "rur", "Rub"] {
            for (from, to) in [
                (Some(1000.0), Some(2000.0)),
                (Some(1000.0), None),
                (None, Some(1000.0)),
                (None, None),
            ] {
                let range = SalaryRange::new(from, to, Some(code));
                assert_eq!(estimator.estimate(&range), None, "{code} {from:?} {to:?}");
            }
        }
    }

    #[test]
    fn test_domestic_spellings() {
        let estimator = SalaryEstimator::global();
        for code in DOMESTIC_CURRENCIES {
            let range = SalaryRange::new(Some(100.0), Some(300.0), Some(*code));
            assert_relative_eq!(estimator.estimate(&range).unwrap(), 200.0);
        }
    }

    #[test]
    fn test_missing_currency_is_accepted() {
        let range = SalaryRange::new(Some(50_000.0), None, None::<&str>);
        let est = SalaryEstimator::global().estimate(&range);
        assert_relative_eq!(est.unwrap(), 60_000.0);
    }

    #[test]
    fn test_custom_currency_set() {
        let estimator = SalaryEstimator::new(["KZT"]);
        assert!(estimator.is_domestic("KZT"));
        assert!(!estimator.is_domestic("RUR"));
        assert_eq!(estimator.estimate(&rur(Some(1.0), Some(2.0))), None);
    }
}
