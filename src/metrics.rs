//! Derived statistics over the log snapshot.
//!
//! Every function here is pure and total: inputs are immutable slices plus an
//! explicit reference date, and malformed rows (unparseable dates or weight
//! values) are excluded rather than propagated. Nothing in this module holds
//! state between calls.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::models::{LogEntry, LogType};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightPoint {
    pub date: NaiveDate,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekBucket {
    pub week_start: NaiveDate,
    pub count: usize,
}

/// The Sunday beginning the calendar week containing `date`. A Sunday maps to
/// itself. Idempotent.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

/// Workouts dated on or after the Sunday of the week containing `today`.
pub fn count_this_week(logs: &[LogEntry], today: NaiveDate) -> usize {
    let sunday = week_start(today);
    workout_dates(logs).filter(|(_, date)| *date >= sunday).count()
}

/// Total workouts divided by whole weeks elapsed since the first workout,
/// rounded to one decimal. The denominator is floored at one week, so a
/// history that starts today reads as one week of history. This is a pace
/// metric over the raw span, not a mean of per-week buckets.
pub fn weekly_average(logs: &[LogEntry], today: NaiveDate) -> f64 {
    let dates: Vec<NaiveDate> = workout_dates(logs).map(|(_, date)| date).collect();
    let Some(first) = dates.iter().min().copied() else {
        return 0.0;
    };

    let span_days = (today - first).num_days().max(0);
    let weeks = (span_days as u64).div_ceil(7).max(1);

    let average = dates.len() as f64 / weeks as f64;
    (average * 10.0).round() / 10.0
}

/// All parseable weight measurements, ascending by date. Same-date entries
/// keep their insertion order.
pub fn weight_series(logs: &[LogEntry]) -> Vec<WeightPoint> {
    let mut series: Vec<WeightPoint> = logs
        .iter()
        .filter_map(|entry| {
            Some(WeightPoint {
                date: entry.parsed_date()?,
                weight: entry.weight_value()?,
            })
        })
        .collect();
    series.sort_by_key(|point| point.date);
    series
}

/// Most recent parseable weight measurement, or `None` when there is none.
/// Among entries sharing the newest date, the one appended last wins.
pub fn current_weight(logs: &[LogEntry]) -> Option<f64> {
    logs.iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            Some((entry.parsed_date()?, index, entry.weight_value()?))
        })
        .max_by_key(|(date, index, _)| (*date, *index))
        .map(|(_, _, weight)| weight)
}

/// Workout counts grouped by calendar week, ascending by week start. Weeks
/// with no workouts are absent, not zero-filled.
pub fn weekly_workout_counts(logs: &[LogEntry]) -> Vec<WeekBucket> {
    let mut buckets: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for (_, date) in workout_dates(logs) {
        *buckets.entry(week_start(date)).or_default() += 1;
    }
    buckets
        .into_iter()
        .map(|(week_start, count)| WeekBucket { week_start, count })
        .collect()
}

/// The `limit` most recent workouts, newest first. Same-date ties order the
/// later-appended entry first, matching [`current_weight`].
pub fn recent_workouts(logs: &[LogEntry], limit: usize) -> Vec<&LogEntry> {
    let mut workouts: Vec<(NaiveDate, usize, &LogEntry)> = logs
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.log_type == LogType::Workout)
        .filter_map(|(index, entry)| Some((entry.parsed_date()?, index, entry)))
        .collect();
    workouts.sort_by_key(|(date, index, _)| Reverse((*date, *index)));
    workouts
        .into_iter()
        .take(limit)
        .map(|(_, _, entry)| entry)
        .collect()
}

fn workout_dates(logs: &[LogEntry]) -> impl Iterator<Item = (&LogEntry, NaiveDate)> {
    logs.iter()
        .filter(|entry| entry.log_type == LogType::Workout)
        .filter_map(|entry| Some((entry, entry.parsed_date()?)))
}
