//! Programming-language vacancy and salary statistics.
//!
//! This is a facade crate that re-exports functionality from the jobstat
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use jobstat_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let registry = LanguageRegistry::global();
//!     let source = HeadHunter::new(HttpClient::with_defaults()?, HeadHunterConfig::default());
//!
//!     let report = StatsAggregator::new(&source, registry)
//!         .run(registry.languages())
//!         .await?;
//!
//!     print!("{}", TableFormatter::new().render(&report, "HeadHunter Moscow"));
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/jobstat/jobstat/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use jobstat_types::*;

// Re-export language table and estimator
pub use jobstat_estimate::{DOMESTIC_CURRENCIES, SalaryEstimator};
pub use jobstat_languages::LanguageRegistry;

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use jobstat_fetch::{
    ClientConfig, DEFAULT_PAGE_DELAY, FetchError, FetchedVacancies, HEADHUNTER_URL, HeadHunter,
    HeadHunterConfig, HttpClient, PageThrottle, SUPERJOB_URL, SuperJob, SuperJobConfig,
    VacancyPage, VacancySource, fetch_all,
};

// Re-export aggregation
#[cfg(feature = "aggregate")]
pub use jobstat_aggregate::{MergedVacancies, StatsAggregator, merge_aliases, summarize};

// Re-export formatters
#[cfg(feature = "format")]
pub use jobstat_format::{
    CsvFormatter, DEFAULT_HEADERS, FormatError, Formatter, JsonFormatter, OutputFormat,
    RUSSIAN_HEADERS, TableFormatter,
};

/// Prelude module for convenient imports.
///
/// ```
/// use jobstat_lib::prelude::*;
/// ```
pub mod prelude {
    pub use jobstat_types::{
        JobstatError, LanguageStats, Result, SalaryRange, StatsReport, Vacancy,
    };

    pub use jobstat_estimate::SalaryEstimator;
    pub use jobstat_languages::LanguageRegistry;

    #[cfg(feature = "fetch")]
    pub use jobstat_fetch::{
        ClientConfig, HeadHunter, HeadHunterConfig, HttpClient, PageThrottle, SuperJob,
        SuperJobConfig, VacancySource,
    };

    #[cfg(feature = "aggregate")]
    pub use jobstat_aggregate::StatsAggregator;

    #[cfg(feature = "format")]
    pub use jobstat_format::{
        CsvFormatter, Formatter, JsonFormatter, OutputFormat, TableFormatter,
    };
}
