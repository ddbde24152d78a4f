use anyhow::{Context, Result};
use champscraper::{
    config::{self, AggregateOptions, FetchConfig, BASE_URL, MIN_VALID_YEAR, TIMEOUT_SECONDS},
    fetch::{self, Source},
    pipeline::{self, OutputFormat},
    schedule::EarningsPolicy,
    ScrapeError,
};
use clap::Parser;
use std::{io, path::PathBuf, process::ExitCode, time::Duration};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

/// Fetch PGA Tour schedule data and total champion earnings.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Season to fetch, after 2012 and up to the current year. Defaults to the current year.
    #[arg(long, value_parser = config::parse_year, conflicts_with_all = ["current", "input"])]
    year: Option<i32>,

    /// Fetch the undated current-season schedule page
    #[arg(long, conflicts_with = "input")]
    current: bool,

    /// Read the schedule page from a local HTML file instead of the network
    #[arg(long)]
    input: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Ledger)]
    format: OutputFormat,

    /// Leave the month off ledger entries
    #[arg(long)]
    flat: bool,

    /// Accept purses with cents instead of counting them as zero
    #[arg(long)]
    allow_cents: bool,

    /// Request timeout in seconds
    #[arg(long, default_value_t = TIMEOUT_SECONDS)]
    timeout: u64,

    #[arg(long, default_value = BASE_URL)]
    base_url: Url,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let kind = e.downcast_ref::<ScrapeError>().map(ScrapeError::kind);
            error!(?kind, "{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let cfg = FetchConfig {
        base_url: args.base_url,
        timeout: Duration::from_secs(args.timeout),
    };
    let opts = AggregateOptions {
        policy: if args.allow_cents {
            EarningsPolicy::AllowCents
        } else {
            EarningsPolicy::DigitsOnly
        },
        include_month: !args.flat,
    };
    let source = match (args.input, args.current, args.year) {
        (Some(path), _, _) => Source::File(path),
        (None, true, _) => Source::Current,
        (None, false, year) => Source::Year(year.unwrap_or_else(config::current_year)),
    };
    info!(?source, format = ?args.format, min_year = MIN_VALID_YEAR, "startup");

    let client = fetch::build_client(&cfg)?;
    let document = fetch::load_document(&client, &cfg, &source)
        .await
        .context("loading schedule page")?;
    let report = pipeline::render_report(&document, args.format, &opts)
        .context("building report")?;

    pipeline::write_report(&mut io::stdout().lock(), &report).context("writing report")?;
    info!("done");
    Ok(())
}
