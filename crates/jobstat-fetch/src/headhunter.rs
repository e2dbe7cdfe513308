//! HeadHunter (`api.hh.ru`) listing endpoint.

use async_trait::async_trait;
use jobstat_types::{SalaryRange, Vacancy};
use serde::Deserialize;

use crate::source::deserialize_id;
use crate::{FetchError, HttpClient, VacancyPage, VacancySource};

/// HeadHunter vacancy search endpoint.
pub const HEADHUNTER_URL: &str = "https://api.hh.ru/vacancies";

/// Deepest result HeadHunter serves for one query.
const MAX_DEPTH: u32 = 2000;

/// HeadHunter query settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadHunterConfig {
    /// Listing endpoint.
    pub base_url: String,
    /// Region identifier (`1` is Moscow).
    pub area: u32,
    /// Results per page (the API caps this at 100).
    pub per_page: u32,
}

impl Default for HeadHunterConfig {
    fn default() -> Self {
        Self {
            base_url: HEADHUNTER_URL.to_string(),
            area: 1,
            per_page: 100,
        }
    }
}

/// HeadHunter job board.
#[derive(Debug, Clone)]
pub struct HeadHunter {
    client: HttpClient,
    config: HeadHunterConfig,
}

impl HeadHunter {
    /// Provider display name.
    pub const NAME: &'static str = "HeadHunter";

    /// Creates a HeadHunter source using the shared client.
    #[must_use]
    pub const fn new(client: HttpClient, config: HeadHunterConfig) -> Self {
        Self { client, config }
    }
}

#[derive(Debug, Deserialize)]
struct SearchPage {
    found: Option<u64>,
    pages: Option<u32>,
    items: Option<Vec<Item>>,
}

#[derive(Debug, Deserialize)]
struct Item {
    #[serde(default, deserialize_with = "deserialize_id")]
    id: Option<String>,
    salary: Option<Salary>,
}

#[derive(Debug, Deserialize)]
struct Salary {
    from: Option<f64>,
    to: Option<f64>,
    currency: Option<String>,
}

impl Item {
    fn into_vacancy(self) -> Vacancy {
        let salary = self.salary.map_or_else(SalaryRange::unknown, |s| SalaryRange {
            from: s.from,
            to: s.to,
            currency: s.currency,
        });
        Vacancy {
            id: self.id,
            salary,
        }
    }
}

impl SearchPage {
    fn into_page(self, page: u32) -> VacancyPage {
        let pages = self.pages.unwrap_or(0);
        VacancyPage {
            found: self.found.unwrap_or(0),
            vacancies: self
                .items
                .unwrap_or_default()
                .into_iter()
                .map(Item::into_vacancy)
                .collect(),
            has_more: page + 1 < pages,
        }
    }
}

#[async_trait]
impl VacancySource for HeadHunter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn fetch_page(&self, keyword: &str, page: u32) -> Result<VacancyPage, FetchError> {
        let request = self.client.get(&self.config.base_url).query(&[
            ("text", keyword.to_string()),
            ("area", self.config.area.to_string()),
            ("per_page", self.config.per_page.to_string()),
            ("page", page.to_string()),
        ]);

        let body: SearchPage = self.client.send_json(request, Self::NAME, keyword).await?;
        Ok(body.into_page(page))
    }

    fn max_pages(&self) -> u32 {
        MAX_DEPTH.div_ceil(self.config.per_page.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str, page: u32) -> VacancyPage {
        serde_json::from_str::<SearchPage>(json)
            .unwrap()
            .into_page(page)
    }

    #[test]
    fn test_decode_page() {
        let page = decode(
            r#"{
                "found": 1520,
                "pages": 16,
                "page": 0,
                "items": [
                    {"id": "101", "salary": {"from": 100000, "to": 150000, "currency": "RUR", "gross": false}},
                    {"id": "102", "salary": null},
                    {"id": "103"}
                ]
            }"#,
            0,
        );

        assert_eq!(page.found, 1520);
        assert!(page.has_more);
        assert_eq!(page.vacancies.len(), 3);
        assert_eq!(page.vacancies[0].id(), Some("101"));
        assert_eq!(page.vacancies[0].salary.from, Some(100_000.0));
        assert_eq!(page.vacancies[0].salary.currency.as_deref(), Some("RUR"));
        assert_eq!(page.vacancies[1].salary, SalaryRange::unknown());
        assert_eq!(page.vacancies[2].salary, SalaryRange::unknown());
    }

    #[test]
    fn test_last_page_stops() {
        let page = decode(r#"{"found": 250, "pages": 3, "items": []}"#, 2);
        assert!(!page.has_more);
    }

    #[test]
    fn test_missing_fields_default() {
        let page = decode("{}", 0);
        assert_eq!(page.found, 0);
        assert!(page.vacancies.is_empty());
        assert!(!page.has_more);
    }

    #[test]
    fn test_max_pages_follows_depth() {
        let client = HttpClient::with_defaults().unwrap();
        let source = HeadHunter::new(client.clone(), HeadHunterConfig::default());
        assert_eq!(source.max_pages(), 20);

        let config = HeadHunterConfig {
            per_page: 30,
            ..HeadHunterConfig::default()
        };
        assert_eq!(HeadHunter::new(client, config).max_pages(), 67);
    }

    #[test]
    fn test_partial_salary() {
        let page = decode(
            r#"{"found": 1, "pages": 1, "items": [{"id": "7", "salary": {"from": null, "to": 90000, "currency": "RUR"}}]}"#,
            0,
        );
        let salary = &page.vacancies[0].salary;
        assert_eq!(salary.from, None);
        assert_eq!(salary.to, Some(90_000.0));
    }
}
