// Normalize and enrich a raw CSV row
//
// Every function here is pure. Column renames follow the output schema;
// derived columns (content_clean, length_tokens, is_short) are computed from
// the raw content exactly once.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use tracing::warn;

use crate::error::{Result, TransformError};
use crate::schema::source;
use crate::types::{ist_offset, ReviewRecord, SourceRow};

/// Timestamp layout used by the scraper for `at` and `repliedAt`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Reviews with fewer tokens than this are flagged `is_short`
pub const SHORT_REVIEW_TOKENS: u32 = 10;

/// Parse `YYYY-MM-DD HH:MM:SS` and pin it to UTC+05:30.
pub fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    let naive = NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).ok()?;
    naive.and_local_timezone(ist_offset()).single()
}

/// Trim surrounding whitespace, then lowercase.
///
/// `str::to_lowercase` applies the Unicode default case mapping and never
/// consults the process locale, so the result is the same on every machine.
pub fn clean_content(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Count pieces produced by splitting on a single literal space.
///
/// Consecutive spaces yield empty pieces and those count too, so `"a  b"` is
/// 3 and `""` is 1. Tabs and newlines are not separators.
pub fn count_tokens(raw: &str) -> u32 {
    u32::try_from(raw.split(' ').count()).unwrap_or(u32::MAX)
}

pub fn is_short(length_tokens: u32) -> bool {
    length_tokens < SHORT_REVIEW_TOKENS
}

/// Empty source strings become null
pub fn empty_to_none(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn parse_required_timestamp(
    row: usize,
    column: &'static str,
    value: &str,
) -> Result<DateTime<FixedOffset>> {
    parse_timestamp(value).ok_or_else(|| TransformError::InvalidTimestamp {
        row,
        column,
        value: value.to_string(),
    })
}

fn parse_score(row: usize, value: &str) -> Result<i8> {
    let score = value
        .parse::<i8>()
        .map_err(|_| TransformError::InvalidInteger {
            row,
            column: source::SCORE,
            value: value.to_string(),
            target: "8-bit signed integer",
        })?;

    if !(1..=5).contains(&score) {
        warn!(row, score, "score outside the expected 1-5 range");
    }

    Ok(score)
}

fn parse_thumbs_up(row: usize, value: &str) -> Result<i32> {
    let count = value
        .parse::<i32>()
        .map_err(|_| TransformError::InvalidInteger {
            row,
            column: source::THUMBS_UP_COUNT,
            value: value.to_string(),
            target: "32-bit signed integer",
        })?;

    if count < 0 {
        warn!(row, count, "negative thumbsUpCount");
    }

    Ok(count)
}

impl ReviewRecord {
    /// Build a normalized record from a raw CSV row.
    ///
    /// `row` is the 1-based data row number, used only for error messages.
    pub fn from_source(raw: SourceRow, row: usize) -> Result<Self> {
        let at = parse_required_timestamp(row, source::AT, &raw.at)?;
        let replied_at = if raw.replied_at.is_empty() {
            None
        } else {
            Some(parse_required_timestamp(
                row,
                source::REPLIED_AT,
                &raw.replied_at,
            )?)
        };

        let score = parse_score(row, &raw.score)?;
        let thumbs_up = parse_thumbs_up(row, &raw.thumbs_up_count)?;

        let content_clean = clean_content(&raw.content);
        let length_tokens = count_tokens(&raw.content);

        Ok(Self {
            review_id: raw.review_id,
            user_name: raw.user_name,
            content_raw: raw.content,
            content_clean,
            score,
            thumbs_up,
            at,
            reply_text: empty_to_none(raw.reply_content),
            replied_at,
            app_version: empty_to_none(raw.review_created_version),
            length_tokens,
            is_short: is_short(length_tokens),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    fn sample_row() -> SourceRow {
        SourceRow {
            review_id: "r1".to_string(),
            user_name: "Asha".to_string(),
            content: "a  b".to_string(),
            score: "4".to_string(),
            thumbs_up_count: "2".to_string(),
            at: "2024-01-05 10:00:00".to_string(),
            reply_content: String::new(),
            replied_at: String::new(),
            review_created_version: String::new(),
        }
    }

    #[test]
    fn test_example_row() {
        let record = ReviewRecord::from_source(sample_row(), 1).unwrap();

        assert_eq!(record.review_id, "r1");
        assert_eq!(record.content_raw, "a  b");
        assert_eq!(record.content_clean, "a  b");
        assert_eq!(record.length_tokens, 3);
        assert!(record.is_short);
        assert_eq!(record.score, 4);
        assert_eq!(record.thumbs_up, 2);
        assert_eq!(record.app_version, None);
        assert_eq!(record.replied_at, None);
        assert_eq!(record.reply_text, None);
        assert_eq!(record.dt(), NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    }

    #[test]
    fn test_parse_timestamp_attaches_fixed_offset() {
        let ts = parse_timestamp("2024-01-05 23:30:15").unwrap();
        assert_eq!(ts.offset().local_minus_utc(), 19_800);
        assert_eq!(ts.hour(), 23);
        assert_eq!(ts.date_naive(), NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        // 23:30 IST is 18:00 UTC the same day
        assert_eq!(ts.naive_utc().hour(), 18);
    }

    #[test]
    fn test_parse_timestamp_rejects_other_layouts() {
        assert!(parse_timestamp("2024-01-05T10:00:00").is_none());
        assert!(parse_timestamp("2024-01-05").is_none());
        assert!(parse_timestamp("05/01/2024 10:00:00").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn test_count_tokens_is_literal_space_split() {
        assert_eq!(count_tokens(""), 1);
        assert_eq!(count_tokens("good"), 1);
        assert_eq!(count_tokens("very good app"), 3);
        assert_eq!(count_tokens("a  b"), 3);
        assert_eq!(count_tokens(" leading"), 2);
        assert_eq!(count_tokens("tab\tseparated\nlines"), 1);
    }

    #[test]
    fn test_is_short_threshold() {
        assert!(is_short(9));
        assert!(!is_short(10));
        assert!(!is_short(42));
    }

    #[test]
    fn test_clean_content() {
        assert_eq!(clean_content("  Great App!\n"), "great app!");
        assert_eq!(clean_content("ÉTÉ"), "été");
        // Turkish dotted capital I uses the locale-free mapping
        assert_eq!(clean_content("İ"), "i\u{307}");
    }

    #[test]
    fn test_app_version_kept_when_present() {
        let mut row = sample_row();
        row.review_created_version = "4.52.1".to_string();
        let record = ReviewRecord::from_source(row, 1).unwrap();
        assert_eq!(record.app_version.as_deref(), Some("4.52.1"));
    }

    #[test]
    fn test_reply_fields_parsed() {
        let mut row = sample_row();
        row.reply_content = "Sorry to hear that".to_string();
        row.replied_at = "2024-01-06 09:15:00".to_string();
        let record = ReviewRecord::from_source(row, 1).unwrap();

        assert_eq!(record.reply_text.as_deref(), Some("Sorry to hear that"));
        let replied_at = record.replied_at.unwrap();
        assert_eq!(replied_at.offset().local_minus_utc(), 19_800);
        assert_eq!(
            replied_at.date_naive(),
            NaiveDate::from_ymd_opt(2024, 1, 6).unwrap()
        );
    }

    #[test]
    fn test_bad_timestamp_is_fatal() {
        let mut row = sample_row();
        row.at = "yesterday".to_string();
        let err = ReviewRecord::from_source(row, 7).unwrap_err();
        match err {
            TransformError::InvalidTimestamp { row, column, value } => {
                assert_eq!(row, 7);
                assert_eq!(column, "at");
                assert_eq!(value, "yesterday");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_replied_at_is_fatal() {
        let mut row = sample_row();
        row.replied_at = "2024-13-01 00:00:00".to_string();
        let err = ReviewRecord::from_source(row, 2).unwrap_err();
        assert!(matches!(
            err,
            TransformError::InvalidTimestamp {
                column: "repliedAt",
                ..
            }
        ));
    }

    #[test]
    fn test_score_must_fit_i8() {
        let mut row = sample_row();
        row.score = "300".to_string();
        let err = ReviewRecord::from_source(row, 3).unwrap_err();
        assert!(matches!(
            err,
            TransformError::InvalidInteger { column: "score", .. }
        ));

        let mut row = sample_row();
        row.score = "five".to_string();
        assert!(ReviewRecord::from_source(row, 3).is_err());
    }

    #[test]
    fn test_out_of_band_score_is_kept() {
        let mut row = sample_row();
        row.score = "0".to_string();
        let record = ReviewRecord::from_source(row, 1).unwrap();
        assert_eq!(record.score, 0);
    }

    #[test]
    fn test_thumbs_up_range() {
        let mut row = sample_row();
        row.thumbs_up_count = "2147483648".to_string();
        assert!(matches!(
            ReviewRecord::from_source(row, 1).unwrap_err(),
            TransformError::InvalidInteger {
                column: "thumbsUpCount",
                ..
            }
        ));

        let mut row = sample_row();
        row.thumbs_up_count = "lots".to_string();
        assert!(ReviewRecord::from_source(row, 1).is_err());

        let mut row = sample_row();
        row.thumbs_up_count = "2147483647".to_string();
        assert_eq!(
            ReviewRecord::from_source(row, 1).unwrap().thumbs_up,
            i32::MAX
        );
    }

    #[test]
    fn test_negative_thumbs_up_is_kept() {
        let mut row = sample_row();
        row.thumbs_up_count = "-1".to_string();
        assert_eq!(ReviewRecord::from_source(row, 1).unwrap().thumbs_up, -1);

        let mut row = sample_row();
        row.thumbs_up_count = "-2147483648".to_string();
        assert_eq!(
            ReviewRecord::from_source(row, 1).unwrap().thumbs_up,
            i32::MIN
        );
    }

    #[test]
    fn test_long_review_not_short() {
        let mut row = sample_row();
        row.content = "  This app is great for ordering food late at night ".to_string();
        let record = ReviewRecord::from_source(row, 1).unwrap();
        assert_eq!(record.length_tokens, 13);
        assert!(!record.is_short);
        assert_eq!(
            record.content_clean,
            "this app is great for ordering food late at night"
        );
    }
}
