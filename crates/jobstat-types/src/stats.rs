//! Per-language statistics and provider reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate statistics for one language on one provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguageStats {
    /// Provider-reported total, summed across aliases.
    pub vacancies_found: u64,
    /// Number of merged vacancies with a computable salary.
    pub vacancies_processed: u64,
    /// Truncated mean of the computable salaries, `0` if there are none.
    pub average_salary: u64,
}

impl LanguageStats {
    /// Creates statistics from a found count and accumulated salary estimates.
    ///
    /// The average is truncated towards zero and is `0` when `processed == 0`.
    #[must_use]
    pub fn from_totals(found: u64, processed: u64, salary_sum: f64) -> Self {
        let average_salary = if processed == 0 {
            0
        } else {
            (salary_sum / processed as f64) as u64
        };
        Self {
            vacancies_found: found,
            vacancies_processed: processed,
            average_salary,
        }
    }
}

/// A language label together with its statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    /// Language label as configured (e.g. "Go").
    pub language: String,
    /// Statistics for the label.
    #[serde(flatten)]
    pub stats: LanguageStats,
}

/// Statistics for all requested languages on one provider.
///
/// Entries keep the order in which languages were requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsReport {
    /// Provider display name.
    pub provider: String,
    /// When the report was assembled.
    pub generated_at: DateTime<Utc>,
    /// Per-language entries in request order.
    pub languages: Vec<LanguageEntry>,
}

impl StatsReport {
    /// Creates an empty report for the given provider.
    #[must_use]
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            generated_at: Utc::now(),
            languages: Vec::new(),
        }
    }

    /// Appends statistics for a language.
    ///
    /// A label that is already present has its statistics replaced in place.
    pub fn insert(&mut self, language: impl Into<String>, stats: LanguageStats) {
        let language = language.into();
        match self.languages.iter_mut().find(|e| e.language == language) {
            Some(entry) => entry.stats = stats,
            None => self.languages.push(LanguageEntry { language, stats }),
        }
    }

    /// Looks up the statistics for a language label.
    #[must_use]
    pub fn get(&self, language: &str) -> Option<&LanguageStats> {
        self.languages
            .iter()
            .find(|e| e.language == language)
            .map(|e| &e.stats)
    }

    /// Iterates over `(language, stats)` pairs in request order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageStats)> {
        self.languages
            .iter()
            .map(|e| (e.language.as_str(), &e.stats))
    }

    /// Returns the number of languages in the report.
    #[must_use]
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Returns true if the report has no languages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}
