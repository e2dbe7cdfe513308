//! CSV output format.

use jobstat_types::StatsReport;
use std::borrow::Cow;
use std::io::Write;

use crate::{FormatError, Formatter};

/// CSV formatter.
///
/// The title is not written; CSV output carries data rows only.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Quotes a field if it contains the delimiter, a quote or a line break.
    fn escape<'a>(&self, field: &'a str) -> Cow<'a, str> {
        if field.contains(self.delimiter) || field.contains(['"', '\n', '\r']) {
            Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
        } else {
            Cow::Borrowed(field)
        }
    }
}

impl Formatter for CsvFormatter {
    fn write_report<W: Write>(
        &self,
        report: &StatsReport,
        _title: &str,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(
                writer,
                "language{d}vacancies_found{d}vacancies_processed{d}average_salary"
            )?;
        }

        for (language, stats) in report.iter() {
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}",
                self.escape(language),
                stats.vacancies_found,
                stats.vacancies_processed,
                stats.average_salary
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobstat_types::LanguageStats;

    fn report() -> StatsReport {
        let mut report = StatsReport::new("HeadHunter");
        report.insert("Python", LanguageStats::from_totals(50, 2, 200_000.0));
        report.insert("C#", LanguageStats::from_totals(9, 1, 80_000.0));
        report
    }

    fn write(formatter: &CsvFormatter, report: &StatsReport) -> String {
        let mut buf = Vec::new();
        formatter.write_report(report, "ignored", &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_csv_output() {
        let out = write(&CsvFormatter::new(), &report());
        assert_eq!(
            out,
            "language,vacancies_found,vacancies_processed,average_salary\n\
             Python,50,2,100000\n\
             C#,9,1,80000\n"
        );
    }

    #[test]
    fn test_tab_delimiter_without_header() {
        let formatter = CsvFormatter::new().with_delimiter('\t').with_header(false);
        let out = write(&formatter, &report());
        assert_eq!(out, "Python\t50\t2\t100000\nC#\t9\t1\t80000\n");
    }

    #[test]
    fn test_quotes_fields_with_delimiter() {
        let mut report = StatsReport::new("HeadHunter");
        report.insert("C, C++", LanguageStats::default());
        let out = write(&CsvFormatter::new().with_header(false), &report);
        assert_eq!(out, "\"C, C++\",0,0,0\n");
    }
}
