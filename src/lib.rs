// src/lib.rs

pub mod config;
pub mod error;
pub mod fetch;
pub mod pipeline;
pub mod present;
pub mod schedule;

pub use error::{ErrorKind, ScrapeError};
pub use schedule::{EarningsEntry, Ledger};
