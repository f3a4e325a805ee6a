use chrono::FixedOffset;
use clap::Parser;
use std::path::PathBuf;

use scan_table::application::dto::OutputFormat;
use scan_table::scan_view::domain::{FilterDimension, FilterSelection, SortKey};
use scan_table::scan_view::policies::parse_utc_offset;

fn parse_sast_tool(value: &str) -> Result<FilterSelection, String> {
    FilterDimension::SastTool.parse_option(value)
}

fn parse_rerun(value: &str) -> Result<FilterSelection, String> {
    FilterDimension::Rerun.parse_option(value)
}

/// Filter, sort and paginate repository security-scan results
#[derive(Parser, Debug)]
#[command(name = "scan-table")]
#[command(version)]
#[command(
    about = "Filter, sort and paginate repository security-scan results",
    long_about = None
)]
pub struct Args {
    /// Data source: an http(s) URL or a local JSON file [default: dashboard_data.json]
    #[arg(short, long, value_name = "URL|PATH")]
    pub source: Option<String>,

    /// Click a column header: name, vulnerabilities, updates, sastTool or rerun.
    /// Can be specified multiple times; clicking the same column again flips the order
    #[arg(long = "sort", value_name = "KEY")]
    pub sort: Vec<SortKey>,

    /// SAST tool filter: All, Semgrep, CodeQL, Snyk Code or ESLint
    #[arg(long = "tool", value_name = "TOOL", value_parser = parse_sast_tool)]
    pub sast_tool: Option<FilterSelection>,

    /// Rerun filter: All, Yes or No
    #[arg(long, value_name = "FLAG", value_parser = parse_rerun)]
    pub rerun: Option<FilterSelection>,

    /// Page to display (1-based); out-of-range pages are ignored
    #[arg(short, long, conflicts_with = "all_pages")]
    pub page: Option<usize>,

    /// Render every page in order
    #[arg(long)]
    pub all_pages: bool,

    /// Output format: markdown or json [default: markdown]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fixed UTC offset for displayed timestamps, e.g. +09:00 [default: UTC]
    #[arg(long, value_name = "OFFSET", value_parser = parse_utc_offset, allow_hyphen_values = true)]
    pub utc_offset: Option<FixedOffset>,

    /// Path to a config file (defaults to ./scan-table.config.yml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
