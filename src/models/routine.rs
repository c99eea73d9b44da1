use serde::{Deserialize, Deserializer, Serialize};

use super::de_lenient_f64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl Exercise {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weight: None,
            sets: None,
            reps: None,
            time: None,
        }
    }
}

/// A named, reusable workout template. Created once, never edited through
/// this client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Routine {
    pub name: String,
    #[serde(default, deserialize_with = "de_exercises")]
    pub exercises: Vec<Exercise>,
    #[serde(
        rename = "estCalories",
        default,
        deserialize_with = "de_lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub est_calories: Option<f64>,
}

/// Deserialize the exercises column. The sheet stores it as a JSON-encoded
/// string, but a plain array is accepted too. A string that does not contain
/// a valid array yields an empty list rather than failing the whole snapshot.
fn de_exercises<'de, D>(deserializer: D) -> Result<Vec<Exercise>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        List(Vec<Exercise>),
        Encoded(String),
        Other(serde_json::Value),
    }

    match Raw::deserialize(deserializer)? {
        Raw::List(exercises) => Ok(exercises),
        Raw::Encoded(text) => Ok(serde_json::from_str(&text).unwrap_or_default()),
        Raw::Other(_) => Ok(Vec::new()),
    }
}
