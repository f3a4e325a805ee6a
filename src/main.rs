mod cli;
mod config;

use chrono::FixedOffset;
use clap::Parser;
use cli::Args;
use config::ConfigFile;
use scan_table::adapters::outbound::console::StderrProgressReporter;
use scan_table::application::controller::ViewStateController;
use scan_table::application::dto::{OutputFormat, TableRequest};
use scan_table::application::factories::{
    DataSourceFactory, FormatterFactory, PresenterFactory, PresenterType, SourceType,
};
use scan_table::application::use_cases::ShowTableUseCase;
use scan_table::scan_view::domain::{FilterDimension, SortKey};
use scan_table::scan_view::policies::{parse_utc_offset, TimestampFormat};
use scan_table::scan_view::services::RecordNormalizer;
use scan_table::shared::error::{ExitCode, TableError};
use scan_table::shared::Result;
use std::path::Path;
use std::process;
use std::str::FromStr;

const DEFAULT_SOURCE: &str = "dashboard_data.json";

#[tokio::main]
async fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            process::exit(ExitCode::InvalidArguments.as_i32());
        }
        // --help and --version
        Err(e) => e.exit(),
    };

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run(args: Args) -> Result<()> {
    let config = match args.config.as_deref() {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(Path::new("."))?,
    };
    let settings = Settings::resolve(&args, config.unwrap_or_default())?;

    let timestamp_format = settings
        .utc_offset
        .map(TimestampFormat::new)
        .unwrap_or_default();
    let mut controller =
        ViewStateController::with_normalizer(RecordNormalizer::new(timestamp_format));

    // Create adapters (Dependency Injection)
    let data_source = DataSourceFactory::create(SourceType::from_location(&settings.source))?;
    let progress_reporter = StderrProgressReporter::new();
    let use_case = ShowTableUseCase::new(data_source, progress_reporter);

    let pages = use_case.execute(&mut controller, &settings.request).await;

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create(settings.format);
    let formatted_output = match pages.as_slice() {
        [page] if !settings.request.all_pages => formatter.format(page)?,
        pages => formatter.format_pages(pages)?,
    };

    let presenter = PresenterFactory::create(PresenterType::from(args.output));
    presenter.present(&formatted_output)?;

    Ok(())
}

/// Effective options: command-line flags first, then the config file, then
/// built-in defaults.
#[derive(Debug)]
struct Settings {
    source: String,
    format: OutputFormat,
    utc_offset: Option<FixedOffset>,
    request: TableRequest,
}

impl Settings {
    fn resolve(args: &Args, config: ConfigFile) -> Result<Self> {
        let source = args
            .source
            .clone()
            .or(config.source)
            .unwrap_or_else(|| DEFAULT_SOURCE.to_string());

        let format = match args.format {
            Some(format) => format,
            None => parse_config_value("format", config.format, |v| OutputFormat::from_str(v))?
                .unwrap_or_default(),
        };

        let utc_offset = match args.utc_offset {
            Some(offset) => Some(offset),
            None => parse_config_value("utc_offset", config.utc_offset, parse_utc_offset)?,
        };

        let sast_tool = match &args.sast_tool {
            Some(selection) => Some(selection.clone()),
            None => parse_config_value("sast_tool", config.sast_tool, |v| {
                FilterDimension::SastTool.parse_option(v)
            })?,
        };

        let rerun = match &args.rerun {
            Some(selection) => Some(selection.clone()),
            None => parse_config_value("rerun", config.rerun, |v| {
                FilterDimension::Rerun.parse_option(v)
            })?,
        };

        let sort_clicks = if args.sort.is_empty() {
            config
                .sort
                .unwrap_or_default()
                .iter()
                .map(|key| SortKey::from_str(key))
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|message| invalid_config("sort", message))?
        } else {
            args.sort.clone()
        };

        Ok(Self {
            source,
            format,
            utc_offset,
            request: TableRequest {
                sast_tool,
                rerun,
                sort_clicks,
                page: args.page,
                all_pages: args.all_pages,
            },
        })
    }
}

fn parse_config_value<T>(
    key: &str,
    value: Option<String>,
    parse: impl Fn(&str) -> std::result::Result<T, String>,
) -> Result<Option<T>> {
    value
        .map(|v| parse(&v).map_err(|message| invalid_config(key, message)))
        .transpose()
}

fn invalid_config(key: &str, message: String) -> anyhow::Error {
    TableError::Validation {
        message: format!("config field '{}': {}", key, message),
    }
    .into()
}
