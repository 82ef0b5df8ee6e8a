// swiggy2parquet-core - Pure review conversion logic
//
// This crate contains the processing logic for turning scraped review CSV
// into partitioned Parquet bytes. It never touches the filesystem: callers
// hand it a reader and receive batches, paths and bytes back.

use arrow::array::RecordBatch;
use chrono::NaiveDate;

pub mod error;
pub mod parquet;
pub mod partition;
pub mod reader;
pub mod schema;
pub mod summary;
pub mod to_arrow;
pub mod transform;
pub mod types;

// Re-export commonly used types
pub use error::{Result, TransformError};
pub use partition::{partition_by_date, partition_dir, partition_path, PARTITION_FILE_NAME};
pub use reader::{read_reviews, LoadedReviews};
pub use schema::reviews_schema_arc;
pub use summary::DatasetSummary;
pub use to_arrow::{records_to_batch, ArrowConverter};
pub use types::{ist_offset, ReviewRecord, SourceRow, IST_OFFSET_SECONDS, IST_TIMEZONE};

/// One date partition, ready to be encoded
#[derive(Debug)]
pub struct PartitionBatch {
    pub dt: NaiveDate,
    pub batch: RecordBatch,
}

/// Split reviews by date and build one RecordBatch per date, ascending.
pub fn partition_batches(records: Vec<ReviewRecord>) -> Result<Vec<PartitionBatch>> {
    partition_by_date(records)
        .into_iter()
        .map(|(dt, rows)| {
            let batch = records_to_batch(&rows)?;
            Ok(PartitionBatch { dt, batch })
        })
        .collect()
}
