use std::fmt::Write as _;

use chrono::NaiveDate;

use crate::metrics::{self, WeekBucket, WeightPoint};
use crate::models::{LogEntry, Snapshot};

pub const RECENT_LIMIT: usize = 5;

/// Everything the dashboard view shows, derived in one pass from a snapshot.
/// Rebuilt from scratch on every render; holds no state of its own.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub workouts_this_week: usize,
    pub weekly_average: f64,
    pub current_weight: Option<f64>,
    pub weight_series: Vec<WeightPoint>,
    pub weekly_counts: Vec<WeekBucket>,
    pub recent_workouts: Vec<LogEntry>,
}

impl Dashboard {
    pub fn build(snapshot: &Snapshot, today: NaiveDate) -> Self {
        let logs = &snapshot.logs;
        Self {
            workouts_this_week: metrics::count_this_week(logs, today),
            weekly_average: metrics::weekly_average(logs, today),
            current_weight: metrics::current_weight(logs),
            weight_series: metrics::weight_series(logs),
            weekly_counts: metrics::weekly_workout_counts(logs),
            recent_workouts: metrics::recent_workouts(logs, RECENT_LIMIT)
                .into_iter()
                .cloned()
                .collect(),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "WORKOUTS");
        let _ = writeln!(out, "  {} this week", self.workouts_this_week);
        let _ = writeln!(out, "  {:.1} avg / week", self.weekly_average);
        let _ = writeln!(out);

        let _ = writeln!(out, "CURRENT WEIGHT");
        match self.current_weight {
            Some(weight) => {
                let _ = writeln!(out, "  {weight} lbs");
            }
            None => {
                let _ = writeln!(out, "  --");
            }
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "WEIGHT TREND");
        if self.weight_series.len() < 2 {
            let _ = writeln!(out, "  Log at least 2 weight entries to see the trend.");
        } else {
            for point in &self.weight_series {
                let _ = writeln!(
                    out,
                    "  {}  {} lbs",
                    point.date.format("%b %d"),
                    point.weight
                );
            }
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "WEEKLY CONSISTENCY");
        if self.weekly_counts.is_empty() {
            let _ = writeln!(out, "  Log a workout to see your weekly breakdown.");
        } else {
            for bucket in &self.weekly_counts {
                let _ = writeln!(
                    out,
                    "  week of {}  {} {}",
                    bucket.week_start.format("%b %d"),
                    "#".repeat(bucket.count),
                    bucket.count
                );
            }
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "RECENT WORKOUTS (last {RECENT_LIMIT})");
        if self.recent_workouts.is_empty() {
            let _ = writeln!(out, "  No workouts logged yet.");
        } else {
            for entry in &self.recent_workouts {
                let date_label = entry
                    .parsed_date()
                    .map(|d| d.format("%b %d").to_string())
                    .unwrap_or_else(|| entry.date.clone());
                let calorie_label = match entry.calories {
                    Some(calories) => format!("~{calories} cals"),
                    None => "No calorie data".to_string(),
                };
                let _ = writeln!(out, "  {}  {}  ({})", date_label, entry.value, calorie_label);
            }
        }

        out
    }
}
