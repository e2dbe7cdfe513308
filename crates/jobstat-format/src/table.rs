//! Bordered console table.

use jobstat_types::StatsReport;
use std::io::Write;

use crate::{FormatError, Formatter};

/// Column headers used unless overridden.
pub const DEFAULT_HEADERS: [&str; 4] = [
    "Language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

/// Russian column headers.
pub const RUSSIAN_HEADERS: [&str; 4] = [
    "Язык программирования",
    "Найдено вакансий",
    "Обработано вакансий",
    "Средняя зарплата",
];

/// Table formatter.
///
/// Each column is as wide as its longest cell, header included, measured
/// in characters. Cells are left-justified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableFormatter {
    headers: [String; 4],
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TableFormatter {
    /// Creates a table formatter with [`DEFAULT_HEADERS`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_headers(DEFAULT_HEADERS)
    }

    /// Creates a table formatter with custom column headers.
    #[must_use]
    pub fn with_headers(headers: [&str; 4]) -> Self {
        Self {
            headers: headers.map(String::from),
        }
    }

    /// Renders the report as a titled table.
    ///
    /// # Example
    ///
    /// ```
    /// use jobstat_format::TableFormatter;
    /// use jobstat_types::{LanguageStats, StatsReport};
    ///
    /// let mut report = StatsReport::new("HeadHunter");
    /// report.insert("Go", LanguageStats::from_totals(12, 2, 300_000.0));
    ///
    /// let table = TableFormatter::new().render(&report, "HeadHunter Moscow");
    /// assert!(table.starts_with("HeadHunter Moscow\n+"));
    /// assert!(table.contains("| Go       | 12              | 2                   | 150000         |"));
    /// ```
    #[must_use]
    pub fn render(&self, report: &StatsReport, title: &str) -> String {
        let mut rows = vec![self.headers.clone()];
        rows.extend(report.iter().map(|(language, stats)| {
            [
                language.to_string(),
                stats.vacancies_found.to_string(),
                stats.vacancies_processed.to_string(),
                stats.average_salary.to_string(),
            ]
        }));

        let mut widths = [0usize; 4];
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut separator = String::from("+");
        for width in widths {
            separator.push_str(&"-".repeat(width + 2));
            separator.push('+');
        }

        let mut out = format!("{title}\n{separator}\n");
        for row in &rows {
            out.push('|');
            for (cell, width) in row.iter().zip(widths) {
                out.push_str(&format!(" {cell:<width$} |"));
            }
            out.push('\n');
            out.push_str(&separator);
            out.push('\n');
        }
        out
    }
}

impl Formatter for TableFormatter {
    fn write_report<W: Write>(
        &self,
        report: &StatsReport,
        title: &str,
        mut writer: W,
    ) -> Result<(), FormatError> {
        writer.write_all(self.render(report, title).as_bytes())?;
        Ok(())
    }
}
