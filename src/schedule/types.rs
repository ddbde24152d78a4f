// src/schedule/types.rs

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One month of completed tournaments, in source order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MonthRecord {
    #[serde(rename = "month")]
    pub month_name: String,
    pub tournaments: Vec<TournamentRecord>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentRecord {
    /// Kept undecoded; only read, and type-checked, when the tournament has champions.
    #[serde(default)]
    pub tournament_name: Option<Value>,
    /// Raw purse string such as `"$2,000,000"`.
    #[serde(default)]
    pub champion_earnings: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub champions: Vec<ChampionRef>,
    /// Pre-joined champion display string, only read by the schedule listing.
    #[serde(default)]
    pub champion: Option<Value>,
}

impl TournamentRecord {
    /// `tournamentName` when it is a string.
    pub fn name(&self) -> Option<&str> {
        self.tournament_name.as_ref().and_then(Value::as_str)
    }

    /// `champion` when it is a string.
    pub fn champion_label(&self) -> Option<&str> {
        self.champion.as_ref().and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionRef {
    pub display_name: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<ChampionRef>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ChampionRef>>::deserialize(deserializer)?.unwrap_or_default())
}
