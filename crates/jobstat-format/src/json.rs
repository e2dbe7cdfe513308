//! JSON output format.

use jobstat_types::StatsReport;
use serde::Serialize;
use std::io::Write;

use crate::{FormatError, Formatter};

/// Report wrapper carrying the display title.
#[derive(Serialize)]
struct TitledReport<'a> {
    title: &'a str,
    #[serde(flatten)]
    report: &'a StatsReport,
}

/// JSON formatter.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Whether to pretty-print.
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a compact JSON formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: false }
    }

    /// Sets whether to pretty-print output.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Formatter for JsonFormatter {
    fn write_report<W: Write>(
        &self,
        report: &StatsReport,
        title: &str,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let doc = TitledReport { title, report };
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, &doc)?;
        } else {
            serde_json::to_writer(&mut writer, &doc)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}
