//! Merging the results of a language's search aliases.

use std::collections::HashSet;

use jobstat_fetch::{FetchError, FetchedVacancies, PageThrottle, VacancySource, fetch_all};
use jobstat_types::Vacancy;
use log::debug;

/// Vacancies for one language, combined across its aliases.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedVacancies {
    /// Sum of the found counts reported for each alias.
    ///
    /// Not deduplicated: a posting matched by two aliases counts twice.
    pub total_found: u64,
    /// Vacancies with distinct identifiers, first occurrence kept.
    pub vacancies: Vec<Vacancy>,
    seen: HashSet<String>,
}

impl MergedVacancies {
    /// Creates an empty merge.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one alias's results.
    ///
    /// The alias's found count is added to the total. Vacancies whose
    /// identifier was already merged are dropped; vacancies without an
    /// identifier are always kept. Returns the number of dropped duplicates.
    pub fn absorb(&mut self, fetched: FetchedVacancies) -> usize {
        self.total_found += fetched.found;

        let mut dropped = 0;
        for vacancy in fetched.vacancies {
            let is_new = vacancy
                .id()
                .is_none_or(|id| self.seen.insert(id.to_string()));
            if is_new {
                self.vacancies.push(vacancy);
            } else {
                dropped += 1;
            }
        }
        dropped
    }

    /// Returns the number of merged vacancies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vacancies.len()
    }

    /// Returns true if nothing was merged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vacancies.is_empty()
    }
}

/// Fetches every alias in order and merges the results.
///
/// # Errors
///
/// Returns the first fetch error; no partial merge is returned.
pub async fn merge_aliases<S>(
    source: &S,
    aliases: &[&str],
    throttle: PageThrottle,
) -> Result<MergedVacancies, FetchError>
where
    S: VacancySource + ?Sized,
{
    let mut merged = MergedVacancies::new();
    for alias in aliases {
        let fetched = fetch_all(source, alias, throttle).await?;
        let dropped = merged.absorb(fetched);
        if dropped > 0 {
            debug!(
                "{}: dropped {dropped} duplicate vacancies under alias {alias:?}",
                source.name()
            );
        }
    }
    Ok(merged)
}
