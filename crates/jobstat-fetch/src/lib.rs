//! HTTP client and paginated vacancy fetching for jobstat.
//!
//! This crate provides the vacancy download pipeline:
//!
//! - [`HttpClient`] - Shared HTTP client that decodes JSON listing pages
//! - [`VacancySource`] - One job board, fetched a page at a time
//! - [`HeadHunter`] and [`SuperJob`] - The supported job boards
//! - [`fetch_all`] - Walks every page of a query with a fixed throttle

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/jobstat/jobstat/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod headhunter;
mod paginate;
mod source;
mod superjob;

pub use client::{ClientConfig, FetchError, HttpClient};
pub use headhunter::{HEADHUNTER_URL, HeadHunter, HeadHunterConfig};
pub use paginate::{DEFAULT_PAGE_DELAY, FetchedVacancies, PageThrottle, fetch_all};
pub use source::{VacancyPage, VacancySource};
pub use superjob::{SUPERJOB_URL, SuperJob, SuperJobConfig};
