// Dataset-wide statistics reported at the end of a run

use chrono::{DateTime, FixedOffset, NaiveDate};
use std::collections::BTreeSet;
use std::fmt;

use crate::types::ReviewRecord;

/// Totals across the whole input, independent of partitioning
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DatasetSummary {
    pub total_rows: usize,
    pub min_at: Option<DateTime<FixedOffset>>,
    pub max_at: Option<DateTime<FixedOffset>>,
    pub distinct_dates: usize,
}

impl DatasetSummary {
    pub fn from_records(records: &[ReviewRecord]) -> Self {
        let dates: BTreeSet<NaiveDate> = records.iter().map(ReviewRecord::dt).collect();

        Self {
            total_rows: records.len(),
            min_at: records.iter().map(|r| r.at).min(),
            max_at: records.iter().map(|r| r.at).max(),
            distinct_dates: dates.len(),
        }
    }
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min_at, self.max_at) {
            (Some(min), Some(max)) => write!(
                f,
                "total_rows={} date_range={} to {} unique_dates={}",
                self.total_rows, min, max, self.distinct_dates
            ),
            _ => write!(
                f,
                "total_rows={} date_range=n/a unique_dates={}",
                self.total_rows, self.distinct_dates
            ),
        }
    }
}
