// src/present/mod.rs

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fmt::Write;

use crate::schedule::earnings::MISSING_EARNINGS;
use crate::schedule::{Ledger, MonthRecord};

/// `$1,234,567.89`: two decimals, comma thousands separators.
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return "$nan".to_string();
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("${}inf", sign);
    }

    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("${}{}.{}", sign, grouped, cents)
}

/// Per-champion report. Month headers are printed only when the month changes.
pub fn render_ledger(ledger: &Ledger) -> String {
    let mut out = String::new();
    for (champion, entries) in ledger.iter() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Champion: {}", champion);

        let mut current_month: Option<&str> = None;
        let mut total = 0.0;
        for entry in entries {
            if let Some(month) = entry.month_name.as_deref() {
                if current_month != Some(month) {
                    current_month = Some(month);
                    let _ = writeln!(out, "    Month: {}", month);
                }
            }
            let _ = writeln!(
                out,
                "      Tournament: {} - Earnings: {}",
                entry.tournament_name,
                format_currency(entry.amount)
            );
            total += entry.amount;
        }
        let _ = writeln!(out, "Total Earnings: {}", format_currency(total));
    }
    out
}

/// Ledger as a 4-space indented JSON object.
pub fn render_json(ledger: &Ledger) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    ledger.serialize(&mut ser)?;
    // serde_json only ever writes UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Completed schedule listed month by month, without aggregation.
pub fn render_schedule(months: &[MonthRecord]) -> String {
    let mut out = String::new();
    for month in months {
        let _ = writeln!(out, "{}", month.month_name);
        for t in &month.tournaments {
            let _ = writeln!(
                out,
                "{} - {} - {}",
                t.champion_label().unwrap_or_default(),
                t.name().unwrap_or_default(),
                t.champion_earnings.as_deref().unwrap_or(MISSING_EARNINGS)
            );
        }
    }
    out
}
