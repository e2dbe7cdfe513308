//! Core types for the jobstat vacancy statistics collector.
//!
//! This crate provides the fundamental data structures used throughout jobstat:
//!
//! - [`Vacancy`] - A provider-neutral job posting with an optional identifier
//! - [`SalaryRange`] - A possibly partial salary range with its currency code
//! - [`LanguageStats`] - Found/processed counts and average salary for a language
//! - [`StatsReport`] - Ordered per-language statistics for one provider

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/jobstat/jobstat/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod stats;
mod vacancy;

pub use error::{JobstatError, Result};
pub use stats::{LanguageEntry, LanguageStats, StatsReport};
pub use vacancy::{SalaryRange, Vacancy};
