//! Salary estimation for the jobstat vacancy statistics collector.
//!
//! - [`SalaryEstimator`] - Computes a single salary figure from a [`SalaryRange`]
//! - [`DOMESTIC_CURRENCIES`] - Currency spellings accepted as the reporting currency
//!
//! [`SalaryRange`]: jobstat_types::SalaryRange

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/jobstat/jobstat/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod estimator;

pub use estimator::{DOMESTIC_CURRENCIES, SalaryEstimator};
