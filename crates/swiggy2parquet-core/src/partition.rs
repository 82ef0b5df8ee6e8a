// Date partitioning
//
// Generates Hive-style partition paths:
// {app=<app>}/dt={YYYY-MM-DD}/reviews.parquet
//
// Partitioning is a pure function of each review's `at` date.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::types::ReviewRecord;

/// File name written inside every partition directory
pub const PARTITION_FILE_NAME: &str = "reviews.parquet";

/// Group reviews by calendar date of `at`, ascending.
///
/// Input order is preserved inside each group.
pub fn partition_by_date(records: Vec<ReviewRecord>) -> BTreeMap<NaiveDate, Vec<ReviewRecord>> {
    let mut partitions: BTreeMap<NaiveDate, Vec<ReviewRecord>> = BTreeMap::new();
    for record in records {
        partitions.entry(record.dt()).or_default().push(record);
    }
    partitions
}

/// Directory for one partition, relative to the output root.
///
/// Format: `app={app}/dt={YYYY-MM-DD}`
pub fn partition_dir(app: &str, dt: NaiveDate) -> String {
    format!("app={}/dt={}", sanitize_app_name(app), dt.format("%Y-%m-%d"))
}

/// Full relative path of a partition file.
///
/// Format: `app={app}/dt={YYYY-MM-DD}/{file_name}`
pub fn partition_path(app: &str, dt: NaiveDate, file_name: &str) -> String {
    format!("{}/{}", partition_dir(app, dt), file_name)
}

/// Sanitize app name for use in file paths
///
/// Replaces special characters with underscores to ensure valid paths
fn sanitize_app_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
