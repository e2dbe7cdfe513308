//! Display utilities and output formatting for the jobstat CLI.

use anyhow::{Context, Result};
use clap::ValueEnum;
use jobstat_lib::prelude::*;
use jobstat_lib::{DEFAULT_HEADERS, RUSSIAN_HEADERS};
use std::io::Write;
use std::path::Path;

/// Job boards a report can be collected from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Provider {
    All,
    Headhunter,
    Superjob,
}

impl Provider {
    pub(crate) const fn includes_headhunter(self) -> bool {
        matches!(self, Self::All | Self::Headhunter)
    }

    pub(crate) const fn includes_superjob(self) -> bool {
        matches!(self, Self::All | Self::Superjob)
    }
}

/// Language of the table column headers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Headers {
    English,
    Russian,
}

impl Headers {
    const fn labels(self) -> [&'static str; 4] {
        match self {
            Self::English => DEFAULT_HEADERS,
            Self::Russian => RUSSIAN_HEADERS,
        }
    }
}

/// How reports are written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct OutputOptions {
    pub(crate) format: OutputFormat,
    pub(crate) headers: Headers,
    pub(crate) delimiter: char,
    pub(crate) csv_header: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            headers: Headers::English,
            delimiter: ',',
            csv_header: true,
        }
    }
}

/// Load the alias table from `path`, or the built-in table when none is given.
pub(crate) fn load_registry(path: Option<&Path>) -> Result<LanguageRegistry> {
    match path {
        Some(path) => LanguageRegistry::from_path(path)
            .with_context(|| format!("Failed to load aliases from {}", path.display())),
        None => Ok(LanguageRegistry::global().clone()),
    }
}

/// Write a report in the specified format.
pub(crate) fn write_report<W: Write>(
    report: &StatsReport,
    title: &str,
    options: &OutputOptions,
    writer: W,
) -> Result<()> {
    match options.format {
        OutputFormat::Table => {
            let formatter = TableFormatter::with_headers(options.headers.labels());
            formatter.write_report(report, title, writer)?;
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new().with_pretty(true);
            formatter.write_report(report, title, writer)?;
        }
        OutputFormat::Csv => {
            let formatter = CsvFormatter::new()
                .with_delimiter(options.delimiter)
                .with_header(options.csv_header);
            formatter.write_report(report, title, writer)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_selection() {
        assert!(Provider::All.includes_headhunter());
        assert!(Provider::All.includes_superjob());
        assert!(!Provider::Headhunter.includes_superjob());
        assert!(!Provider::Superjob.includes_headhunter());
    }

    #[test]
    fn test_write_table() {
        let mut report = StatsReport::new("HeadHunter");
        report.insert("Python", LanguageStats::from_totals(50, 2, 200_000.0));

        let mut buf = Vec::new();
        write_report(&report, "HeadHunter Moscow", &OutputOptions::default(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("HeadHunter Moscow\n"));
        assert!(text.contains("| Python   | 50              | 2                   | 100000         |"));
    }

    #[test]
    fn test_write_russian_table() {
        let mut report = StatsReport::new("SuperJob");
        report.insert("Go", LanguageStats::from_totals(4, 1, 90_000.0));
        let options = OutputOptions {
            headers: Headers::Russian,
            ..OutputOptions::default()
        };

        let mut buf = Vec::new();
        write_report(&report, "SuperJob Moscow", &options, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("| Язык программирования | Найдено вакансий |"));
        assert!(text.contains("| Go                    | 4                |"));
    }

    #[test]
    fn test_write_csv_options() {
        let mut report = StatsReport::new("HeadHunter");
        report.insert("Python", LanguageStats::from_totals(50, 2, 200_000.0));
        let options = OutputOptions {
            format: OutputFormat::Csv,
            delimiter: ';',
            csv_header: false,
            ..OutputOptions::default()
        };

        let mut buf = Vec::new();
        write_report(&report, "ignored", &options, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Python;50;2;100000\n");
    }

    #[test]
    fn test_default_registry() {
        let registry = load_registry(None).unwrap();
        assert!(!registry.is_empty());
        assert!(load_registry(Some(Path::new("/nonexistent/aliases.json"))).is_err());
    }
}
