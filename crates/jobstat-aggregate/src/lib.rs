//! Alias merging and per-language salary statistics for jobstat.
//!
//! - [`MergedVacancies`] and [`merge_aliases`] - Combine the results of every alias of a language
//! - [`StatsAggregator`] - Turns a list of languages into a [`StatsReport`]
//!
//! [`StatsReport`]: jobstat_types::StatsReport

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/jobstat/jobstat/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod merge;
mod stats;

pub use merge::{MergedVacancies, merge_aliases};
pub use stats::{StatsAggregator, summarize};
