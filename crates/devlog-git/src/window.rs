// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Commit selections and the time windows they resolve to

use chrono::{DateTime, Datelike, Days, Duration, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Which slice of history a report covers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Selection {
    /// Commits since local midnight
    Today,
    /// Commits from local midnight yesterday until local midnight today
    Yesterday,
    /// Commits since Monday of the current week
    ThisWeek,
    /// Commits after the most recent tag (all commits when there is none)
    SinceLastTag,
    /// Commits reachable from `to` but not from `from`
    Range {
        /// Exclusive start reference
        from: String,
        /// Inclusive end reference
        to: String,
    },
}

/// Half-open time interval `[since, until)`; a missing bound is unbounded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeWindow {
    /// Inclusive lower bound
    pub since: Option<DateTime<Utc>>,
    /// Exclusive upper bound
    pub until: Option<DateTime<Utc>>,
}

impl TimeWindow {
    /// A window with no bounds
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Check whether a timestamp falls inside the window
    #[must_use]
    pub fn contains<Tz: TimeZone>(&self, ts: &DateTime<Tz>) -> bool {
        let ts = ts.with_timezone(&Utc);
        self.since.is_none_or(|since| ts >= since) && self.until.is_none_or(|until| ts < until)
    }

    /// Check whether `ts` lies more than `slack` before the lower bound
    ///
    /// Always false for a window without a lower bound.
    #[must_use]
    pub fn is_past<Tz: TimeZone>(&self, ts: &DateTime<Tz>, slack: Duration) -> bool {
        let ts = ts.with_timezone(&Utc);
        self.since.is_some_and(|since| ts < since - slack)
    }
}

impl Selection {
    /// Resolve the selection to a time window relative to `now`
    ///
    /// Day boundaries are taken in `now`'s timezone. Ref-based selections
    /// return an unbounded window.
    #[must_use]
    pub fn window<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> TimeWindow {
        let tz = now.timezone();
        let today = now.date_naive();
        match self {
            Self::Today => TimeWindow {
                since: Some(start_of_day(&tz, today)),
                until: None,
            },
            Self::Yesterday => TimeWindow {
                since: Some(start_of_day(&tz, today - Days::new(1))),
                until: Some(start_of_day(&tz, today)),
            },
            Self::ThisWeek => {
                let back = u64::from(today.weekday().num_days_from_monday());
                TimeWindow {
                    since: Some(start_of_day(&tz, today - Days::new(back))),
                    until: None,
                }
            }
            Self::SinceLastTag | Self::Range { .. } => TimeWindow::unbounded(),
        }
    }

    /// Short human label for headers and logs
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Today => "today".to_string(),
            Self::Yesterday => "yesterday".to_string(),
            Self::ThisWeek => "this week".to_string(),
            Self::SinceLastTag => "since last tag".to_string(),
            Self::Range { from, to } => format!("{from}..{to}"),
        }
    }
}

/// First instant of `day` in `tz`
///
/// When midnight does not exist (DST gap) the first valid instant after it
/// is used.
fn start_of_day<Tz: TimeZone>(tz: &Tz, day: NaiveDate) -> DateTime<Utc> {
    let midnight = day.and_hms_opt(0, 0, 0).unwrap_or_default();
    (0..=3)
        .filter_map(|hour| {
            tz.from_local_datetime(&(midnight + chrono::Duration::hours(hour)))
                .earliest()
        })
        .next()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| midnight.and_utc())
}
