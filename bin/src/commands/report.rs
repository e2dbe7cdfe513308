//! Report command implementation.
//!
//! Collects per-language statistics from each selected job board and prints
//! one report per board, HeadHunter first.

use crate::display::{Headers, OutputOptions, Provider, load_registry, write_report};
use anyhow::{Context, Result, bail};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use jobstat_lib::prelude::*;
use jobstat_lib::{HEADHUNTER_URL, SUPERJOB_URL};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

/// Arguments of the `report` command.
#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Job boards to query
    #[arg(short, long, value_enum, default_value_t = Provider::All)]
    pub(crate) provider: Provider,

    /// Language to report on (repeatable; defaults to the built-in list)
    #[arg(short, long)]
    pub(crate) language: Vec<String>,

    /// Alias table to use instead of the built-in one (JSON)
    #[arg(long)]
    pub(crate) aliases: Option<PathBuf>,

    /// Output format: table, json or csv
    #[arg(short, long, default_value_t = OutputFormat::Table)]
    pub(crate) format: OutputFormat,

    /// Language of the table column headers
    #[arg(long, value_enum, default_value_t = Headers::English)]
    pub(crate) headers: Headers,

    /// Field delimiter for CSV output
    #[arg(long, default_value_t = ',')]
    pub(crate) delimiter: char,

    /// Omit the header row from CSV output
    #[arg(long)]
    pub(crate) no_header: bool,

    /// Results requested per page
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub(crate) per_page: u32,

    /// HeadHunter area identifier
    #[arg(long, default_value_t = 1)]
    pub(crate) hh_area: u32,

    /// SuperJob town identifier
    #[arg(long, default_value_t = 4)]
    pub(crate) superjob_town: u32,

    /// Region name used in report titles
    #[arg(long, default_value = "Moscow")]
    pub(crate) region: String,

    /// Pause between consecutive page requests, in milliseconds
    #[arg(long, default_value_t = 500)]
    pub(crate) page_delay_ms: u64,

    /// SuperJob application secret key
    #[arg(long, env = "API_SUPERJOB_KEY", hide_env_values = true)]
    pub(crate) superjob_key: Option<String>,

    /// SuperJob OAuth access token
    #[arg(long, env = "API_SUPERJOB_TOKEN", hide_env_values = true)]
    pub(crate) superjob_token: Option<String>,

    /// SuperJob vacancy search endpoint
    #[arg(long, env = "SUPERJOB_URL", default_value = SUPERJOB_URL)]
    pub(crate) superjob_url: String,

    /// HeadHunter vacancy search endpoint
    #[arg(long, env = "HH_URL", default_value = HEADHUNTER_URL)]
    pub(crate) hh_url: String,
}

impl ReportArgs {
    /// SuperJob settings, or an error when the application key is missing.
    fn superjob_config(&self) -> Result<SuperJobConfig> {
        let Some(key) = self.superjob_key.as_deref().filter(|k| !k.trim().is_empty()) else {
            bail!("SuperJob application key is required: set API_SUPERJOB_KEY or pass --superjob-key");
        };

        Ok(SuperJobConfig {
            base_url: self.superjob_url.clone(),
            access_token: self.superjob_token.clone(),
            town: self.superjob_town,
            count: self.per_page,
            ..SuperJobConfig::new(key)
        })
    }

    const fn output(&self) -> OutputOptions {
        OutputOptions {
            format: self.format,
            headers: self.headers,
            delimiter: self.delimiter,
            csv_header: !self.no_header,
        }
    }

    fn headhunter_config(&self) -> HeadHunterConfig {
        HeadHunterConfig {
            base_url: self.hh_url.clone(),
            area: self.hh_area,
            per_page: self.per_page,
        }
    }
}

/// Collect statistics and print a report per selected job board.
pub(crate) async fn report(args: ReportArgs, show_progress: bool) -> Result<()> {
    report_to(args, show_progress, &mut std::io::stdout()).await
}

/// Collect statistics and write a report per selected job board to `out`.
///
/// Each report is written as soon as its board completes, so a failing
/// board leaves the reports of earlier boards in place.
async fn report_to<W: Write>(args: ReportArgs, show_progress: bool, out: &mut W) -> Result<()> {
    let registry = load_registry(args.aliases.as_deref())?;
    let languages: Vec<String> = if args.language.is_empty() {
        registry.languages().to_vec()
    } else {
        args.language.clone()
    };

    // Credentials are checked before any request goes out
    let superjob_config = if args.provider.includes_superjob() {
        Some(args.superjob_config()?)
    } else {
        None
    };

    let client = HttpClient::with_defaults()?;
    let throttle = PageThrottle::new(Duration::from_millis(args.page_delay_ms));
    let output = args.output();
    let show_progress = show_progress && output.format == OutputFormat::Table;
    let mut printed = 0;

    if args.provider.includes_headhunter() {
        let source = HeadHunter::new(client.clone(), args.headhunter_config());
        let report = collect(&source, &registry, &languages, throttle, show_progress).await?;
        print_report(&report, &args.region, &output, printed, out)?;
        printed += 1;
    }

    if let Some(config) = superjob_config {
        let source = SuperJob::new(client, config);
        let report = collect(&source, &registry, &languages, throttle, show_progress).await?;
        print_report(&report, &args.region, &output, printed, out)?;
    }

    Ok(())
}

/// Run the aggregator for one board behind a progress bar.
async fn collect<S: VacancySource>(
    source: &S,
    registry: &LanguageRegistry,
    languages: &[String],
    throttle: PageThrottle,
    show_progress: bool,
) -> Result<StatsReport> {
    let progress = if show_progress {
        let pb = ProgressBar::new(languages.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:30.cyan/blue}] {pos}/{len} {msg}")
                .expect("Invalid progress template")
                .progress_chars("=>-"),
        );
        pb.enable_steady_tick(Duration::from_millis(120));
        pb
    } else {
        ProgressBar::hidden()
    };

    let result = StatsAggregator::new(source, registry)
        .with_throttle(throttle)
        .run_with_progress(languages, |index, language| {
            progress.set_position(index as u64);
            progress.set_message(format!("{}: {language}", source.name()));
        })
        .await;

    match result {
        Ok(report) => {
            progress.finish_and_clear();
            log::info!(
                "{}: collected statistics for {} languages",
                source.name(),
                report.len()
            );
            Ok(report)
        }
        Err(e) => {
            progress.abandon();
            Err(e).with_context(|| format!("Failed to collect {} statistics", source.name()))
        }
    }
}

/// Print one board's report; tables after the first are preceded by a blank line.
fn print_report<W: Write>(
    report: &StatsReport,
    region: &str,
    output: &OutputOptions,
    printed: usize,
    out: &mut W,
) -> Result<()> {
    if printed > 0 && output.format == OutputFormat::Table {
        writeln!(out)?;
    }

    let title = format!("{} {region}", report.provider);
    write_report(report, &title, output, &mut *out)?;
    out.flush()?;
    Ok(())
}
