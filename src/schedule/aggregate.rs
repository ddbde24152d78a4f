// src/schedule/aggregate.rs

use serde_json::Value;
use tracing::{debug, info, instrument, trace, warn};

use super::earnings::parse_earnings;
use super::ledger::{EarningsEntry, Ledger};
use super::payload::{load_schedule, COMPLETED_PATH};
use super::types::MonthRecord;
use crate::config::AggregateOptions;
use crate::error::ScrapeError;

/// Parse `payload` and fold its completed schedule into a per-champion ledger.
#[instrument(level = "info", skip(payload, opts), fields(payload_len = payload.len()))]
pub fn aggregate(payload: &str, opts: &AggregateOptions) -> Result<Ledger, ScrapeError> {
    let months = load_schedule(payload)?;
    let ledger = fold_months(&months, opts)?;
    if ledger.is_empty() {
        warn!(months = months.len(), "No completed tournament has a champion; ledger is empty");
    }
    info!(
        months = months.len(),
        champions = ledger.len(),
        "Aggregated champion earnings"
    );
    Ok(ledger)
}

/// Split each tournament's purse evenly across its champions.
///
/// Tournaments without champions contribute nothing. A champion-bearing
/// tournament with no name aborts the whole fold.
pub fn fold_months(months: &[MonthRecord], opts: &AggregateOptions) -> Result<Ledger, ScrapeError> {
    let mut ledger = Ledger::new();

    for (m, month) in months.iter().enumerate() {
        for (t, tournament) in month.tournaments.iter().enumerate() {
            if tournament.champions.is_empty() {
                debug!(
                    month = %month.month_name,
                    tournament = ?tournament.name(),
                    "No champion; skipping"
                );
                continue;
            }

            let tournament_name = match &tournament.tournament_name {
                Some(Value::String(name)) => name.as_str(),
                Some(_) => {
                    return Err(ScrapeError::schema(
                        tournament_path(m, t),
                        "`tournamentName` is not a string",
                    ))
                }
                None => {
                    return Err(ScrapeError::schema(
                        tournament_path(m, t),
                        "missing key `tournamentName`",
                    ))
                }
            };

            let earnings = parse_earnings(tournament.champion_earnings.as_deref(), opts.policy);
            let share = earnings / tournament.champions.len() as f64;
            trace!(tournament = tournament_name, earnings, share, "Splitting purse");

            for champion in &tournament.champions {
                ledger.record(
                    &champion.display_name,
                    EarningsEntry {
                        month_name: opts.include_month.then(|| month.month_name.clone()),
                        tournament_name: tournament_name.to_string(),
                        amount: share,
                    },
                );
            }
        }
    }

    Ok(ledger)
}

fn tournament_path(month: usize, tournament: usize) -> String {
    format!(
        "{}[{}].tournaments[{}]",
        COMPLETED_PATH.join("."),
        month,
        tournament
    )
}
