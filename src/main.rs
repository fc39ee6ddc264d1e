mod age;
mod app;
mod config;
mod display;
mod form;
mod svg;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use app::App;
use config::{AppConfig, OutputFormat, Overrides};
use form::DateBounds;

#[derive(Parser, Debug)]
#[command(name = "agecalc")]
#[command(version)]
#[command(about = "Exact age in years, months and days, plus a countdown to the next birthday")]
struct Args {
    /// Birth date (YYYY-MM-DD)
    date: Option<String>,

    /// Compute as of this date instead of today (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Also write dark and light SVG cards into this directory
    #[arg(long, value_name = "DIR")]
    svg: Option<PathBuf>,

    /// Prompt for birth dates until "q", "quit", "exit" or end of input
    #[arg(short, long)]
    interactive: bool,

    /// Config file (default: <config dir>/agecalc/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn main() -> Result<()> {
    // Logs go to stderr so results on stdout stay clean
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let config = AppConfig::load(args.config.as_deref())?.merge(Overrides {
        birth_date: args.date,
        format: args.format,
        svg_dir: args.svg,
    });

    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let app = App {
        bounds: DateBounds::new(config.min_year, today),
        format: config.format,
        svg_dir: config.svg_dir,
    };

    if args.interactive {
        app.run_interactive(io::stdin().lock(), &mut io::stdout().lock())?;
        return Ok(());
    }

    let birthdate = app.bounds.validate(config.birth_date.as_deref())?;
    app.submit(birthdate, &mut io::stdout().lock())?;

    Ok(())
}
