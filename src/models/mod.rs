use serde::{Deserialize, Deserializer};

pub mod log_entry;
pub mod routine;
pub mod snapshot;

pub use log_entry::{LogEntry, LogType};
pub use routine::{Exercise, Routine};
pub use snapshot::Snapshot;

/// Deserialize an optional numeric field that the sheet may hand back as a
/// JSON number, a numeric string, or an empty string. Anything unparseable
/// becomes `None` instead of failing the snapshot.
pub(crate) fn de_lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
        Other(serde_json::Value),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Num(n)) => Some(n),
        Some(Raw::Text(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
