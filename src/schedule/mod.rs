// src/schedule/mod.rs

pub mod aggregate;
pub mod earnings;
pub mod extract;
pub mod ledger;
pub mod payload;
pub mod types;

pub use aggregate::{aggregate, fold_months};
pub use earnings::{parse_earnings, EarningsPolicy};
pub use extract::extract_payload;
pub use ledger::{EarningsEntry, Ledger};
pub use payload::{completed_months, load_schedule, parse_payload};
pub use types::{ChampionRef, MonthRecord, TournamentRecord};
