use serde::{Deserialize, Serialize};

use super::{LogEntry, Routine};

/// Full point-in-time copy of the remote state. Replaced wholesale on every
/// fetch; the client never merges or reconciles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub routines: Vec<Routine>,
    #[serde(default)]
    pub logs: Vec<LogEntry>,
}

impl Snapshot {
    pub fn routine_by_name(&self, name: &str) -> Option<&Routine> {
        self.routines.iter().find(|r| r.name == name)
    }
}
