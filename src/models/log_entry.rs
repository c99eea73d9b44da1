use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use super::de_lenient_f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogType {
    Workout,
    Weight,
}

/// One append-only row from the remote log sheet. Rows are never updated or
/// deleted; the client holds a disposable copy replaced on every fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(rename = "type")]
    pub log_type: LogType,
    /// Raw date cell as stored remotely. Parse with [`LogEntry::parsed_date`];
    /// historical rows are not guaranteed to be well formed.
    pub date: String,
    /// Routine name for Workout rows, numeric string for Weight rows.
    pub value: String,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub calories: Option<f64>,
}

impl LogEntry {
    pub fn workout(date: impl Into<String>, name: impl Into<String>, calories: Option<f64>) -> Self {
        Self {
            log_type: LogType::Workout,
            date: date.into(),
            value: name.into(),
            calories,
        }
    }

    pub fn weight(date: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            log_type: LogType::Weight,
            date: date.into(),
            value: value.into(),
            calories: None,
        }
    }

    /// Calendar date of the entry, or `None` when the cell does not parse.
    /// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (what Sheets returns for
    /// date-typed cells), and `MM/DD/YYYY`.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        let raw = self.date.trim();
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(date);
        }
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.date_naive());
        }
        NaiveDate::parse_from_str(raw, "%m/%d/%Y").ok()
    }

    /// Numeric weight for Weight rows, or `None` when the value cell does not
    /// parse as a number.
    pub fn weight_value(&self) -> Option<f64> {
        if self.log_type != LogType::Weight {
            return None;
        }
        self.value.trim().parse().ok()
    }
}
