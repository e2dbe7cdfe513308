//! Paginated query download.

use std::time::Duration;

use jobstat_types::Vacancy;
use log::{debug, trace, warn};

use crate::{FetchError, VacancySource};

/// Default pause between successive page requests of one query.
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_millis(500);

/// Fixed delay inserted between successive page requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageThrottle {
    delay: Duration,
}

impl Default for PageThrottle {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_DELAY)
    }
}

impl PageThrottle {
    /// Creates a throttle with the given delay.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// A throttle that never waits.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            delay: Duration::ZERO,
        }
    }

    /// Returns the configured delay.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    async fn wait(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

/// Every vacancy returned for one keyword.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchedVacancies {
    /// Total reported by the first page.
    pub found: u64,
    /// Vacancies from all pages, in page order.
    pub vacancies: Vec<Vacancy>,
    /// Number of page requests issued.
    pub pages: u32,
}

impl FetchedVacancies {
    /// Returns true if no vacancies were returned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vacancies.is_empty()
    }

    /// Returns the number of vacancies returned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vacancies.len()
    }
}

/// Downloads every page of `keyword` from `source`.
///
/// Pages are requested sequentially starting at 0 until the provider stops
/// signalling further pages or [`VacancySource::max_pages`] is reached, with
/// `throttle` applied between requests. The found count comes from the first
/// page only.
///
/// # Errors
///
/// Returns the first page error; vacancies from earlier pages are discarded.
pub async fn fetch_all<S>(
    source: &S,
    keyword: &str,
    throttle: PageThrottle,
) -> Result<FetchedVacancies, FetchError>
where
    S: VacancySource + ?Sized,
{
    let mut result = FetchedVacancies::default();
    let mut page = 0;

    loop {
        if page > 0 {
            throttle.wait().await;
        }

        let batch = source.fetch_page(keyword, page).await?;
        trace!(
            "{}: {keyword:?} page {page} returned {} vacancies",
            source.name(),
            batch.vacancies.len()
        );

        if page == 0 {
            result.found = batch.found;
        }
        result.vacancies.extend(batch.vacancies);
        result.pages += 1;

        if !batch.has_more {
            break;
        }
        if result.pages >= source.max_pages() {
            warn!(
                "{}: {keyword:?} still reports more results after {} pages, stopping",
                source.name(),
                result.pages
            );
            break;
        }
        page += 1;
    }

    debug!(
        "{}: {keyword:?} found {}, fetched {} vacancies over {} pages",
        source.name(),
        result.found,
        result.vacancies.len(),
        result.pages
    );
    Ok(result)
}
