// Review record types
//
// `SourceRow` mirrors the CSV exactly (every field a string). `ReviewRecord`
// is the normalized, enriched row that ends up in Parquet.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::Deserialize;

/// Offset applied to every review timestamp: UTC+05:30, no DST rules.
pub const IST_OFFSET_SECONDS: i32 = 5 * 3600 + 30 * 60;

/// Arrow timezone string matching [`IST_OFFSET_SECONDS`]
pub const IST_TIMEZONE: &str = "+05:30";

/// The fixed review offset as a chrono `FixedOffset`
pub fn ist_offset() -> FixedOffset {
    FixedOffset::east_opt(IST_OFFSET_SECONDS).expect("+05:30 is within the valid offset range")
}

/// One CSV row as it sits on disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceRow {
    pub review_id: String,
    pub user_name: String,
    pub content: String,
    pub score: String,
    pub thumbs_up_count: String,
    pub at: String,
    pub reply_content: String,
    pub replied_at: String,
    pub review_created_version: String,
}

/// A normalized review, one per output row.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewRecord {
    pub review_id: String,
    pub user_name: String,
    pub content_raw: String,
    pub content_clean: String,
    pub score: i8,
    pub thumbs_up: i32,
    pub at: DateTime<FixedOffset>,
    pub reply_text: Option<String>,
    pub replied_at: Option<DateTime<FixedOffset>>,
    pub app_version: Option<String>,
    pub length_tokens: u32,
    pub is_short: bool,
}

impl ReviewRecord {
    /// Partition key: calendar date of `at` in the review offset
    pub fn dt(&self) -> NaiveDate {
        self.at.date_naive()
    }
}
