//! Provider-neutral vacancy representation.

use serde::{Deserialize, Serialize};

/// Salary range as published by a provider.
///
/// Either bound may be missing, and providers use `0` for "not specified".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    /// Lower bound.
    pub from: Option<f64>,
    /// Upper bound.
    pub to: Option<f64>,
    /// Currency code exactly as the provider reports it.
    pub currency: Option<String>,
}

impl SalaryRange {
    /// Creates a new salary range.
    #[must_use]
    pub fn new(from: Option<f64>, to: Option<f64>, currency: Option<impl Into<String>>) -> Self {
        Self {
            from,
            to,
            currency: currency.map(Into::into),
        }
    }

    /// A range with no information at all.
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            from: None,
            to: None,
            currency: None,
        }
    }

    /// Lower bound, treating `0` as absent.
    #[must_use]
    pub fn lower(&self) -> Option<f64> {
        self.from.filter(|v| *v != 0.0)
    }

    /// Upper bound, treating `0` as absent.
    #[must_use]
    pub fn upper(&self) -> Option<f64> {
        self.to.filter(|v| *v != 0.0)
    }
}

/// A single job posting returned by a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vacancy {
    /// Provider-native identifier rendered as text.
    ///
    /// `None` when the provider omitted it; such vacancies are never
    /// deduplicated against each other.
    pub id: Option<String>,
    /// Published salary range.
    pub salary: SalaryRange,
}

impl Vacancy {
    /// Creates a new vacancy.
    #[must_use]
    pub fn new(id: Option<impl Into<String>>, salary: SalaryRange) -> Self {
        Self {
            id: id.map(Into::into),
            salary,
        }
    }

    /// Returns the identifier, if any.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bounds_are_absent() {
        let range = SalaryRange::new(Some(0.0), Some(150_000.0), Some("rub"));
        assert_eq!(range.lower(), None);
        assert_eq!(range.upper(), Some(150_000.0));
    }

    #[test]
    fn test_unknown_range() {
        let range = SalaryRange::unknown();
        assert!(range.lower().is_none());
        assert!(range.upper().is_none());
        assert!(range.currency.is_none());
    }

    #[test]
    fn test_vacancy_id() {
        let vacancy = Vacancy::new(Some("42"), SalaryRange::unknown());
        assert_eq!(vacancy.id(), Some("42"));

        let anonymous = Vacancy::new(None::<String>, SalaryRange::unknown());
        assert_eq!(anonymous.id(), None);
    }
}
