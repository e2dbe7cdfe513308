//! Report formatters for jobstat.
//!
//! This crate provides formatters for writing a [`StatsReport`] to various
//! output formats:
//!
//! - [`TableFormatter`] - Bordered, column-aligned console table
//! - [`JsonFormatter`] - JSON document
//! - [`CsvFormatter`] - CSV format
//!
//! [`StatsReport`]: jobstat_types::StatsReport

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/jobstat/jobstat/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;
mod table;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::JsonFormatter;
pub use table::{DEFAULT_HEADERS, RUSSIAN_HEADERS, TableFormatter};
