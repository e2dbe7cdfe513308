//! The job board abstraction.

use async_trait::async_trait;
use jobstat_types::Vacancy;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::FetchError;

/// One page of a listing query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VacancyPage {
    /// Total matches reported by the provider for the whole query.
    pub found: u64,
    /// Vacancies on this page.
    pub vacancies: Vec<Vacancy>,
    /// Whether the provider has further pages for the query.
    pub has_more: bool,
}

/// A job board that can be queried one page at a time.
#[async_trait]
pub trait VacancySource: Send + Sync {
    /// Display name used in logs, errors and report titles.
    fn name(&self) -> &'static str;

    /// Fetches the zero-based `page` of results for `keyword`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    async fn fetch_page(&self, keyword: &str, page: u32) -> Result<VacancyPage, FetchError>;

    /// Largest number of pages worth requesting for one query.
    ///
    /// Job boards only serve results up to a fixed depth; a continuation
    /// signal past that depth is not followed.
    fn max_pages(&self) -> u32 {
        u32::MAX
    }
}

/// Accepts a vacancy identifier sent either as a string or as a number.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
