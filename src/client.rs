use std::time::Duration;

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{Exercise, Routine, Snapshot};

/// Client for the spreadsheet-backed data service. One endpoint: GET returns
/// the full snapshot, POST appends a row. Writes are acknowledged but never
/// applied locally; callers re-fetch the snapshot instead.
#[derive(Clone)]
pub struct RemoteClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
enum AppendRequest<'a> {
    LogWorkout {
        date: String,
        #[serde(rename = "routineName")]
        routine_name: &'a str,
        details: &'a [Exercise],
        calories: Option<f64>,
    },
    LogWeight {
        date: String,
        weight: f64,
    },
    CreateRoutine {
        #[serde(rename = "routineName")]
        routine_name: &'a str,
        exercises: &'a [Exercise],
        #[serde(rename = "estCalories", skip_serializing_if = "Option::is_none")]
        est_calories: Option<f64>,
    },
}

impl RemoteClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.api_url.clone(),
        })
    }

    pub async fn fetch_snapshot(&self) -> Result<Snapshot> {
        tracing::debug!("Fetching snapshot from {}", self.base_url);

        let response = self.http.get(&self.base_url).send().await?;
        if !response.status().is_success() {
            return Err(AppError::Remote(format!(
                "snapshot fetch failed with status {}",
                response.status()
            )));
        }

        let snapshot: Snapshot = response.json().await?;

        let malformed = snapshot
            .logs
            .iter()
            .filter(|entry| entry.parsed_date().is_none())
            .count();
        if malformed > 0 {
            tracing::warn!(
                "{malformed} log entries have unparseable dates and are excluded from statistics"
            );
        }
        tracing::info!(
            "Snapshot: {} routines, {} log entries",
            snapshot.routines.len(),
            snapshot.logs.len()
        );

        Ok(snapshot)
    }

    pub async fn log_workout(&self, date: NaiveDate, routine: &Routine) -> Result<()> {
        self.append(&AppendRequest::LogWorkout {
            date: date.format("%Y-%m-%d").to_string(),
            routine_name: &routine.name,
            details: &routine.exercises,
            calories: routine.est_calories,
        })
        .await
    }

    pub async fn log_weight(&self, date: NaiveDate, weight: f64) -> Result<()> {
        self.append(&AppendRequest::LogWeight {
            date: date.format("%Y-%m-%d").to_string(),
            weight,
        })
        .await
    }

    pub async fn create_routine(&self, routine: &Routine) -> Result<()> {
        self.append(&AppendRequest::CreateRoutine {
            routine_name: &routine.name,
            exercises: &routine.exercises,
            est_calories: routine.est_calories,
        })
        .await
    }

    async fn append(&self, request: &AppendRequest<'_>) -> Result<()> {
        let response = self.http.post(&self.base_url).json(request).send().await?;
        if !response.status().is_success() {
            return Err(AppError::Remote(format!(
                "append failed with status {}",
                response.status()
            )));
        }
        // The ack body carries nothing the client consumes.
        tracing::debug!("Append acknowledged");
        Ok(())
    }
}
