//! Per-language statistics over a job board.

use jobstat_estimate::SalaryEstimator;
use jobstat_fetch::{PageThrottle, VacancySource};
use jobstat_languages::LanguageRegistry;
use jobstat_types::{LanguageStats, Result, StatsReport, Vacancy};
use log::info;

use crate::merge_aliases;

/// Computes statistics from a found count and the vacancies to estimate.
///
/// Vacancies without a computable salary are ignored for the average.
#[must_use]
pub fn summarize(found: u64, vacancies: &[Vacancy], estimator: &SalaryEstimator) -> LanguageStats {
    let (sum, processed) = vacancies
        .iter()
        .filter_map(|v| estimator.estimate(&v.salary))
        .fold((0.0, 0u64), |(sum, n), salary| (sum + salary, n + 1));
    LanguageStats::from_totals(found, processed, sum)
}

/// Collects [`LanguageStats`] for a list of languages from one source.
///
/// Languages are processed strictly one after another; the first fetch error
/// aborts the run.
#[derive(Debug)]
pub struct StatsAggregator<'a, S: ?Sized> {
    source: &'a S,
    registry: &'a LanguageRegistry,
    estimator: &'a SalaryEstimator,
    throttle: PageThrottle,
}

impl<'a, S> StatsAggregator<'a, S>
where
    S: VacancySource + ?Sized,
{
    /// Creates an aggregator with the global estimator and default throttle.
    #[must_use]
    pub fn new(source: &'a S, registry: &'a LanguageRegistry) -> Self {
        Self {
            source,
            registry,
            estimator: SalaryEstimator::global(),
            throttle: PageThrottle::default(),
        }
    }

    /// Uses a custom salary estimator.
    #[must_use]
    pub const fn with_estimator(mut self, estimator: &'a SalaryEstimator) -> Self {
        self.estimator = estimator;
        self
    }

    /// Sets the delay between page requests.
    #[must_use]
    pub const fn with_throttle(mut self, throttle: PageThrottle) -> Self {
        self.throttle = throttle;
        self
    }

    /// Fetches, merges and summarizes a single language.
    ///
    /// # Errors
    ///
    /// Returns an error if any alias query fails.
    pub async fn language_stats(&self, language: &str) -> Result<LanguageStats> {
        let aliases = self.registry.aliases_for(language);
        let merged = merge_aliases(self.source, &aliases, self.throttle).await?;
        let stats = summarize(merged.total_found, &merged.vacancies, self.estimator);

        info!(
            "{}: {language}: found {}, merged {}, processed {}, average {}",
            self.source.name(),
            stats.vacancies_found,
            merged.len(),
            stats.vacancies_processed,
            stats.average_salary
        );
        Ok(stats)
    }

    /// Builds a report for `languages`, in the given order.
    ///
    /// # Errors
    ///
    /// Returns the first fetch error; no partial report is returned.
    pub async fn run<L: AsRef<str>>(&self, languages: &[L]) -> Result<StatsReport> {
        self.run_with_progress(languages, |_, _| {}).await
    }

    /// Like [`run`](Self::run), calling `on_language(index, label)` before
    /// each language is fetched.
    ///
    /// # Errors
    ///
    /// Returns the first fetch error; no partial report is returned.
    pub async fn run_with_progress<L, F>(
        &self,
        languages: &[L],
        mut on_language: F,
    ) -> Result<StatsReport>
    where
        L: AsRef<str>,
        F: FnMut(usize, &str),
    {
        let mut report = StatsReport::new(self.source.name());
        for (index, language) in languages.iter().enumerate() {
            let language = language.as_ref();
            on_language(index, language);
            let stats = self.language_stats(language).await?;
            report.insert(language, stats);
        }
        Ok(report)
    }
}
