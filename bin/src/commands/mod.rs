//! CLI command implementations.

pub(crate) mod languages;
pub(crate) mod report;
