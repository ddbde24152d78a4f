// src/schedule/payload.rs

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, trace};

use super::types::MonthRecord;
use crate::error::ScrapeError;

/// Keys leading from the payload root to the completed-months array.
pub const COMPLETED_PATH: [&str; 4] = ["props", "pageProps", "schedule", "completed"];

pub fn parse_payload(payload: &str) -> Result<Value, ScrapeError> {
    Ok(serde_json::from_str(payload)?)
}

/// Walk `COMPLETED_PATH` and return the completed months.
///
/// Any missing key, or a non-array at the end, is a `Schema` error naming the
/// path walked so far.
pub fn completed_months(root: &Value) -> Result<&[Value], ScrapeError> {
    let mut node = root;
    let mut path = String::new();
    for key in COMPLETED_PATH {
        if !path.is_empty() {
            path.push('.');
        }
        path.push_str(key);
        node = node
            .get(key)
            .ok_or_else(|| ScrapeError::schema(&path, format!("missing key `{}`", key)))?;
        trace!(%path, "Resolved payload key");
    }
    node.as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| ScrapeError::schema(path, "expected an array"))
}

/// Parse `payload` and decode its completed months in source order.
pub fn load_schedule(payload: &str) -> Result<Vec<MonthRecord>, ScrapeError> {
    let root = parse_payload(payload)?;
    let months = completed_months(&root)?
        .iter()
        .enumerate()
        .map(|(i, month)| {
            MonthRecord::deserialize(month).map_err(|e| {
                ScrapeError::schema(format!("{}[{}]", COMPLETED_PATH.join("."), i), e.to_string())
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    debug!(months = months.len(), "Decoded completed schedule");
    Ok(months)
}
