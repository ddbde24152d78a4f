// src/schedule/ledger.rs

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeSeq, Serializer};

/// One champion's share of one tournament's purse.
#[derive(Debug, Clone, PartialEq)]
pub struct EarningsEntry {
    /// `None` in the month-less ledger.
    pub month_name: Option<String>,
    pub tournament_name: String,
    pub amount: f64,
}

/// Serialises as `[month, tournament, amount]`, or `[tournament, amount]`
/// without a month.
impl Serialize for EarningsEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.month_name.is_some() { 3 } else { 2 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        if let Some(month) = &self.month_name {
            seq.serialize_element(month)?;
        }
        seq.serialize_element(&self.tournament_name)?;
        seq.serialize_element(&self.amount)?;
        seq.end()
    }
}

/// Champion name → entries, both in first-encounter order. Append-only.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct Ledger {
    champions: IndexMap<String, Vec<EarningsEntry>>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `entry` to `champion`, creating the champion on first sight.
    pub fn record(&mut self, champion: &str, entry: EarningsEntry) {
        match self.champions.get_mut(champion) {
            Some(entries) => entries.push(entry),
            None => {
                self.champions.insert(champion.to_string(), vec![entry]);
            }
        }
    }

    pub fn get(&self, champion: &str) -> Option<&[EarningsEntry]> {
        self.champions.get(champion).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[EarningsEntry])> {
        self.champions
            .iter()
            .map(|(name, entries)| (name.as_str(), entries.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.champions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.champions.is_empty()
    }

    pub fn champion_total(&self, champion: &str) -> f64 {
        self.get(champion)
            .map(|entries| entries.iter().map(|e| e.amount).sum())
            .unwrap_or(0.0)
    }

    pub fn total(&self) -> f64 {
        self.champions
            .values()
            .flatten()
            .map(|e| e.amount)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(month: Option<&str>, tournament: &str, amount: f64) -> EarningsEntry {
        EarningsEntry {
            month_name: month.map(str::to_string),
            tournament_name: tournament.to_string(),
            amount,
        }
    }

    #[test]
    fn keeps_first_encounter_order() {
        let mut ledger = Ledger::new();
        ledger.record("Zed", entry(Some("Jan"), "A", 1.0));
        ledger.record("Amy", entry(Some("Jan"), "B", 2.0));
        ledger.record("Zed", entry(Some("Feb"), "C", 3.0));

        let names: Vec<_> = ledger.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["Zed", "Amy"]);
        let zed: Vec<_> = ledger.get("Zed").unwrap().iter().map(|e| e.tournament_name.as_str()).collect();
        assert_eq!(zed, ["A", "C"]);
        assert_eq!(ledger.champion_total("Zed"), 4.0);
        assert_eq!(ledger.champion_total("Nobody"), 0.0);
        assert_eq!(ledger.total(), 6.0);
    }

    #[test]
    fn serialises_entries_as_arrays() {
        let mut ledger = Ledger::new();
        ledger.record("A", entry(Some("March"), "Players", 1_000_000.0));
        ledger.record("B", entry(None, "Players", 500.0));

        assert_eq!(
            serde_json::to_value(&ledger).unwrap(),
            json!({
                "A": [["March", "Players", 1_000_000.0]],
                "B": [["Players", 500.0]]
            })
        );
    }
}
