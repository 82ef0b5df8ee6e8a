// Convert normalized reviews to an Arrow RecordBatch
//
// Column builders are appended row by row and finished into a batch that
// matches `reviews_schema_arc()` column for column.

use arrow::array::{
    BooleanBuilder, Int32Builder, Int8Builder, RecordBatch, StringBuilder,
    TimestampMicrosecondBuilder, UInt32Builder,
};
use std::sync::Arc;

use crate::error::Result;
use crate::schema::reviews_schema_arc;
use crate::types::{ReviewRecord, IST_TIMEZONE};

/// Default capacity for builders when expected row count is unknown
const DEFAULT_BUILDER_CAPACITY: usize = 1024;

/// Accumulates reviews into Arrow column builders
pub struct ArrowConverter {
    review_id_builder: StringBuilder,
    user_name_builder: StringBuilder,
    content_raw_builder: StringBuilder,
    content_clean_builder: StringBuilder,
    score_builder: Int8Builder,
    thumbs_up_builder: Int32Builder,
    at_builder: TimestampMicrosecondBuilder,
    reply_text_builder: StringBuilder,
    replied_at_builder: TimestampMicrosecondBuilder,
    app_version_builder: StringBuilder,
    length_tokens_builder: UInt32Builder,
    is_short_builder: BooleanBuilder,

    row_count: usize,
}

impl Default for ArrowConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl ArrowConverter {
    /// Create a new ArrowConverter with default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_BUILDER_CAPACITY)
    }

    /// Create a new ArrowConverter with specified capacity hint
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            review_id_builder: StringBuilder::with_capacity(capacity, capacity * 36),
            user_name_builder: StringBuilder::with_capacity(capacity, capacity * 16),
            content_raw_builder: StringBuilder::with_capacity(capacity, capacity * 128),
            content_clean_builder: StringBuilder::with_capacity(capacity, capacity * 128),
            score_builder: Int8Builder::with_capacity(capacity),
            thumbs_up_builder: Int32Builder::with_capacity(capacity),
            at_builder: TimestampMicrosecondBuilder::with_capacity(capacity)
                .with_timezone(IST_TIMEZONE),
            reply_text_builder: StringBuilder::with_capacity(capacity, capacity * 64),
            replied_at_builder: TimestampMicrosecondBuilder::with_capacity(capacity)
                .with_timezone(IST_TIMEZONE),
            app_version_builder: StringBuilder::with_capacity(capacity, capacity * 8),
            length_tokens_builder: UInt32Builder::with_capacity(capacity),
            is_short_builder: BooleanBuilder::with_capacity(capacity),
            row_count: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// Append one review as a row
    pub fn append(&mut self, record: &ReviewRecord) {
        self.review_id_builder.append_value(&record.review_id);
        self.user_name_builder.append_value(&record.user_name);
        self.content_raw_builder.append_value(&record.content_raw);
        self.content_clean_builder
            .append_value(&record.content_clean);
        self.score_builder.append_value(record.score);
        self.thumbs_up_builder.append_value(record.thumbs_up);
        self.at_builder.append_value(record.at.timestamp_micros());
        self.reply_text_builder
            .append_option(record.reply_text.as_deref());
        self.replied_at_builder
            .append_option(record.replied_at.map(|ts| ts.timestamp_micros()));
        self.app_version_builder
            .append_option(record.app_version.as_deref());
        self.length_tokens_builder
            .append_value(record.length_tokens);
        self.is_short_builder.append_value(record.is_short);

        self.row_count += 1;
    }

    pub fn finish(mut self) -> Result<RecordBatch> {
        let batch = RecordBatch::try_new(
            reviews_schema_arc(),
            vec![
                Arc::new(self.review_id_builder.finish()),
                Arc::new(self.user_name_builder.finish()),
                Arc::new(self.content_raw_builder.finish()),
                Arc::new(self.content_clean_builder.finish()),
                Arc::new(self.score_builder.finish()),
                Arc::new(self.thumbs_up_builder.finish()),
                Arc::new(self.at_builder.finish()),
                Arc::new(self.reply_text_builder.finish()),
                Arc::new(self.replied_at_builder.finish()),
                Arc::new(self.app_version_builder.finish()),
                Arc::new(self.length_tokens_builder.finish()),
                Arc::new(self.is_short_builder.finish()),
            ],
        )?;

        Ok(batch)
    }
}

/// Build a RecordBatch from a slice of reviews
pub fn records_to_batch(records: &[ReviewRecord]) -> Result<RecordBatch> {
    let mut converter = ArrowConverter::with_capacity(records.len());
    for record in records {
        converter.append(record);
    }
    converter.finish()
}
