// src/pipeline.rs

use clap::ValueEnum;
use std::io::{self, Write};

use crate::config::AggregateOptions;
use crate::error::ScrapeError;
use crate::present::{render_json, render_ledger, render_schedule};
use crate::schedule::{aggregate, extract_payload, load_schedule, Ledger};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Per-champion earnings with month headers and totals
    #[default]
    Ledger,
    /// Ledger as JSON
    Json,
    /// Completed schedule, one line per tournament
    Schedule,
}

/// HTML document → champion ledger.
pub fn ledger_from_document(
    document: &str,
    opts: &AggregateOptions,
) -> Result<Ledger, ScrapeError> {
    let payload = extract_payload(document)?;
    aggregate(&payload, opts)
}

/// HTML document → finished report text. Nothing is rendered unless every step succeeds.
pub fn render_report(
    document: &str,
    format: OutputFormat,
    opts: &AggregateOptions,
) -> Result<String, ScrapeError> {
    match format {
        OutputFormat::Ledger => Ok(render_ledger(&ledger_from_document(document, opts)?)),
        OutputFormat::Json => {
            let mut text = render_json(&ledger_from_document(document, opts)?)
                .map_err(ScrapeError::Encode)?;
            text.push('\n');
            Ok(text)
        }
        OutputFormat::Schedule => {
            let payload = extract_payload(document)?;
            Ok(render_schedule(&load_schedule(&payload)?))
        }
    }
}

pub fn write_report<W: Write>(sink: &mut W, report: &str) -> io::Result<()> {
    sink.write_all(report.as_bytes())?;
    sink.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use anyhow::Result;
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    fn init_test_logging() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("info,champscraper=debug")),
            )
            .with_test_writer()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Schedule</title></head>
<body>
<div id="__next"></div>
<script id="__NEXT_DATA__" type="application/json">{"props":{"pageProps":{"schedule":{"completed":[{"month":"March","tournaments":[{"tournamentName":"Players","championEarnings":"$2,000,000","champion":"A, B","champions":[{"displayName":"A"},{"displayName":"B"}]}]}],"upcoming":[]}}},"page":"/schedule/[year]"}</script>
</body>
</html>"#;

    #[test]
    fn ledger_report_end_to_end() -> Result<()> {
        init_test_logging();
        let report = render_report(PAGE, OutputFormat::Ledger, &AggregateOptions::default())?;
        assert_eq!(
            report,
            "\nChampion: A\n    Month: March\n      Tournament: Players - Earnings: $1,000,000.00\nTotal Earnings: $1,000,000.00\n\
             \nChampion: B\n    Month: March\n      Tournament: Players - Earnings: $1,000,000.00\nTotal Earnings: $1,000,000.00\n"
        );
        Ok(())
    }

    #[test]
    fn json_report_end_to_end() -> Result<()> {
        init_test_logging();
        let report = render_report(PAGE, OutputFormat::Json, &AggregateOptions::default())?;
        let value: serde_json::Value = serde_json::from_str(&report)?;
        assert_eq!(
            value,
            serde_json::json!({
                "A": [["March", "Players", 1_000_000.0]],
                "B": [["March", "Players", 1_000_000.0]]
            })
        );
        Ok(())
    }

    #[test]
    fn schedule_report_end_to_end() -> Result<()> {
        let report = render_report(PAGE, OutputFormat::Schedule, &AggregateOptions::default())?;
        assert_eq!(report, "March\nA, B - Players - $2,000,000\n");
        Ok(())
    }

    #[test]
    fn failures_keep_their_kind() {
        init_test_logging();
        let opts = AggregateOptions::default();
        let no_marker = "<html><body>maintenance</body></html>";
        let truncated = r#"<script id="__NEXT_DATA__">{"props":{"pageProps"</script>"#;
        let reshaped = r#"<script id="__NEXT_DATA__">{"props":{"pageProps":{}}}</script>"#;

        for format in [OutputFormat::Ledger, OutputFormat::Json, OutputFormat::Schedule] {
            let kind = |doc: &str| render_report(doc, format, &opts).unwrap_err().kind();
            assert_eq!(kind(no_marker), ErrorKind::NotFound);
            assert_eq!(kind(truncated), ErrorKind::Parse);
            assert_eq!(kind(reshaped), ErrorKind::Schema);
        }
    }

    #[test]
    fn report_goes_to_injected_sink() -> Result<()> {
        let mut sink = Vec::new();
        write_report(&mut sink, "hello\n")?;
        assert_eq!(sink, b"hello\n");
        Ok(())
    }
}
