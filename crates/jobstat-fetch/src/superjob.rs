//! SuperJob (`api.superjob.ru`) listing endpoint.

use std::fmt;

use async_trait::async_trait;
use jobstat_types::{SalaryRange, Vacancy};
use serde::Deserialize;

use crate::source::deserialize_id;
use crate::{FetchError, HttpClient, VacancyPage, VacancySource};

/// SuperJob vacancy search endpoint.
pub const SUPERJOB_URL: &str = "https://api.superjob.ru/2.0/vacancies/";

/// Header carrying the registered application key.
const APP_ID_HEADER: &str = "X-Api-App-Id";

/// Deepest result SuperJob serves for one query.
const MAX_DEPTH: u32 = 500;

/// SuperJob query settings and credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct SuperJobConfig {
    /// Listing endpoint.
    pub base_url: String,
    /// Registered application secret key.
    pub app_key: String,
    /// OAuth access token, sent as a bearer credential when present.
    pub access_token: Option<String>,
    /// Town identifier (`4` is Moscow).
    pub town: u32,
    /// Results per page (the API caps this at 100).
    pub count: u32,
}

impl SuperJobConfig {
    /// Creates settings for the public endpoint with the given application key.
    #[must_use]
    pub fn new(app_key: impl Into<String>) -> Self {
        Self {
            base_url: SUPERJOB_URL.to_string(),
            app_key: app_key.into(),
            access_token: None,
            town: 4,
            count: 100,
        }
    }
}

impl fmt::Debug for SuperJobConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuperJobConfig")
            .field("base_url", &self.base_url)
            .field("app_key", &"<redacted>")
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("town", &self.town)
            .field("count", &self.count)
            .finish()
    }
}

/// SuperJob job board.
#[derive(Debug, Clone)]
pub struct SuperJob {
    client: HttpClient,
    config: SuperJobConfig,
}

impl SuperJob {
    /// Provider display name.
    pub const NAME: &'static str = "SuperJob";

    /// Creates a SuperJob source using the shared client.
    #[must_use]
    pub const fn new(client: HttpClient, config: SuperJobConfig) -> Self {
        Self { client, config }
    }
}

#[derive(Debug, Deserialize)]
struct SearchPage {
    total: Option<u64>,
    more: Option<bool>,
    objects: Option<Vec<Object>>,
}

#[derive(Debug, Deserialize)]
struct Object {
    #[serde(default, deserialize_with = "deserialize_id")]
    id: Option<String>,
    payment_from: Option<f64>,
    payment_to: Option<f64>,
    currency: Option<String>,
}

impl Object {
    fn into_vacancy(self) -> Vacancy {
        Vacancy {
            id: self.id,
            salary: SalaryRange {
                from: self.payment_from,
                to: self.payment_to,
                currency: self.currency,
            },
        }
    }
}

impl SearchPage {
    fn into_page(self) -> VacancyPage {
        VacancyPage {
            found: self.total.unwrap_or(0),
            vacancies: self
                .objects
                .unwrap_or_default()
                .into_iter()
                .map(Object::into_vacancy)
                .collect(),
            has_more: self.more.unwrap_or(false),
        }
    }
}

#[async_trait]
impl VacancySource for SuperJob {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn fetch_page(&self, keyword: &str, page: u32) -> Result<VacancyPage, FetchError> {
        let mut request = self
            .client
            .get(&self.config.base_url)
            .header(APP_ID_HEADER, &self.config.app_key)
            .query(&[
                ("keyword", keyword.to_string()),
                ("town", self.config.town.to_string()),
                ("count", self.config.count.to_string()),
                ("page", page.to_string()),
            ]);
        if let Some(token) = &self.config.access_token {
            request = request.bearer_auth(token);
        }

        let body: SearchPage = self.client.send_json(request, Self::NAME, keyword).await?;
        Ok(body.into_page())
    }

    fn max_pages(&self) -> u32 {
        MAX_DEPTH.div_ceil(self.config.count.max(1))
    }
}
