// Arrow schema for normalized reviews
//
// Column order here is the column order in every written Parquet file.
// The partition key `dt` is not part of the schema; it lives in the
// directory name only.

use arrow::datatypes::{DataType, Field, Schema, TimeUnit};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::types::IST_TIMEZONE;

/// Version stamped into schema metadata
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Output column names
pub mod field {
    pub const REVIEW_ID: &str = "review_id";
    pub const USER_NAME: &str = "user_name";
    pub const CONTENT_RAW: &str = "content_raw";
    pub const CONTENT_CLEAN: &str = "content_clean";
    pub const SCORE: &str = "score";
    pub const THUMBS_UP: &str = "thumbs_up";
    pub const AT: &str = "at";
    pub const REPLY_TEXT: &str = "reply_text";
    pub const REPLIED_AT: &str = "repliedAt";
    pub const APP_VERSION: &str = "app_version";
    pub const LENGTH_TOKENS: &str = "length_tokens";
    pub const IS_SHORT: &str = "is_short";
}

/// Source CSV header names
pub mod source {
    pub const REVIEW_ID: &str = "reviewId";
    pub const USER_NAME: &str = "userName";
    pub const CONTENT: &str = "content";
    pub const SCORE: &str = "score";
    pub const THUMBS_UP_COUNT: &str = "thumbsUpCount";
    pub const AT: &str = "at";
    pub const REPLY_CONTENT: &str = "replyContent";
    pub const REPLIED_AT: &str = "repliedAt";
    pub const REVIEW_CREATED_VERSION: &str = "reviewCreatedVersion";

    /// Every header the input must carry
    pub const REQUIRED: &[&str] = &[
        REVIEW_ID,
        USER_NAME,
        CONTENT,
        SCORE,
        THUMBS_UP_COUNT,
        AT,
        REPLY_CONTENT,
        REPLIED_AT,
        REVIEW_CREATED_VERSION,
    ];
}

/// Arrow type for `at` and `repliedAt`: microseconds, fixed +05:30 offset
pub fn review_timestamp_type() -> DataType {
    DataType::Timestamp(TimeUnit::Microsecond, Some(IST_TIMEZONE.into()))
}

/// Returns a cached `Arc<Schema>` for the reviews schema.
pub fn reviews_schema_arc() -> Arc<Schema> {
    static SCHEMA: OnceLock<Arc<Schema>> = OnceLock::new();
    Arc::clone(SCHEMA.get_or_init(|| Arc::new(build_schema())))
}

fn build_schema() -> Schema {
    let fields = vec![
        Field::new(field::REVIEW_ID, DataType::Utf8, false),
        Field::new(field::USER_NAME, DataType::Utf8, false),
        Field::new(field::CONTENT_RAW, DataType::Utf8, false),
        Field::new(field::CONTENT_CLEAN, DataType::Utf8, false),
        Field::new(field::SCORE, DataType::Int8, false),
        Field::new(field::THUMBS_UP, DataType::Int32, false),
        Field::new(field::AT, review_timestamp_type(), false),
        Field::new(field::REPLY_TEXT, DataType::Utf8, true),
        Field::new(field::REPLIED_AT, review_timestamp_type(), true),
        Field::new(field::APP_VERSION, DataType::Utf8, true),
        Field::new(field::LENGTH_TOKENS, DataType::UInt32, false),
        Field::new(field::IS_SHORT, DataType::Boolean, false),
    ];

    let metadata = HashMap::from([(
        "swiggy2parquet.schema_version".to_string(),
        SCHEMA_VERSION.to_string(),
    )]);

    Schema::new_with_metadata(fields, metadata)
}
