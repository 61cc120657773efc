// src/report.rs

//! Run reporting: disposition counts plus timing.

use std::fmt;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::DedupeStats;

/// Outcome of one timed deduplication run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Disposition counts from the pass.
    pub stats: DedupeStats,
    /// Monotonic wall time the pass took. Unaffected by clock
    /// adjustments mid-run, unlike the two timestamps below.
    pub elapsed: Duration,
    /// Wall-clock start, for run logs.
    pub started_at: DateTime<Utc>,
    /// Wall-clock finish, for run logs.
    pub finished_at: DateTime<Utc>,
}

/// Time a deduplication pass and collect its counts into a report.
pub fn timed<F>(pass: F) -> Result<RunReport>
where
    F: FnOnce() -> Result<DedupeStats>,
{
    let started_at = Utc::now();
    let clock = Instant::now();
    let stats = pass()?;
    let elapsed = clock.elapsed();
    let finished_at = Utc::now();
    Ok(RunReport {
        stats,
        elapsed,
        started_at,
        finished_at,
    })
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records in: {} admitted, {} duplicates dropped, {} media passed through (took {:.2?})",
            self.stats.records(),
            self.stats.admitted,
            self.stats.duplicates,
            self.stats.media,
            self.elapsed
        )
    }
}
