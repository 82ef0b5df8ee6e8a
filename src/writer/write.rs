//! Core write operations for Parquet output.
//!
//! Encodes one date partition and places it at
//! `{root}/app={app}/dt={YYYY-MM-DD}/{file_name}`.

use chrono::NaiveDate;
use std::path::PathBuf;
use swiggy2parquet_core::parquet::encode_record_batch;
use swiggy2parquet_core::{partition_dir, partition_path, PartitionBatch};

use super::error::{Result, WriterError};
use super::storage::FilesystemStorage;

/// Request parameters for writing one partition.
pub struct WritePartitionRequest<'a> {
    pub partition: &'a PartitionBatch,
    /// App segment of the partition path (`app=<app>`)
    pub app: &'a str,
    /// File name inside the partition directory
    pub file_name: &'a str,
}

/// Outcome of one partition write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionWrite {
    pub dt: NaiveDate,
    pub path: PathBuf,
    pub rows: usize,
    pub bytes: usize,
    /// BLAKE3 hex digest of the file contents
    pub hash: String,
}

/// Encode a partition and write it, replacing any file from a previous run.
pub fn write_partition(
    storage: &FilesystemStorage,
    req: WritePartitionRequest<'_>,
) -> Result<PartitionWrite> {
    let dt = req.partition.dt;
    let dir = partition_dir(req.app, dt);

    tracing::debug!(
        "Writing {} rows for dt={} under '{}'",
        req.partition.batch.num_rows(),
        dt,
        dir
    );

    storage.ensure_dir(&dir)?;

    let encoded = encode_record_batch(&req.partition.batch)
        .map_err(|e| WriterError::encode(format!("partition dt={}", dt), e))?;
    let bytes_written = encoded.bytes.len();

    let file_path = partition_path(req.app, dt, req.file_name);
    let path = storage.write(&file_path, &encoded.bytes)?;

    let hash = encoded.hash.to_hex().to_string();
    tracing::info!(
        "Wrote {} rows to {} ({} bytes, blake3 {})",
        encoded.row_count,
        path.display(),
        bytes_written,
        &hash[..16]
    );

    Ok(PartitionWrite {
        dt,
        path,
        rows: encoded.row_count,
        bytes: bytes_written,
        hash,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use swiggy2parquet_core::{partition_batches, read_reviews};

    const CSV: &str = "reviewId,userName,content,score,thumbsUpCount,at,\
                       replyContent,repliedAt,reviewCreatedVersion\n\
                       r1,a,a  b,4,2,2024-01-05 10:00:00,,,\n\
                       r2,b,ok,5,0,2024-01-05 11:00:00,,,4.1\n";

    fn single_partition() -> PartitionBatch {
        let loaded = read_reviews(CSV.as_bytes()).unwrap();
        partition_batches(loaded.records).unwrap().remove(0)
    }

    #[test]
    fn test_write_partition_layout() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FilesystemStorage::new(dir.path());
        let partition = single_partition();

        let written = write_partition(
            &storage,
            WritePartitionRequest {
                partition: &partition,
                app: "swiggy",
                file_name: "reviews.parquet",
            },
        )
        .unwrap();

        assert_eq!(
            written.path,
            dir.path().join("app=swiggy/dt=2024-01-05/reviews.parquet")
        );
        assert_eq!(written.rows, 2);
        assert_eq!(written.hash.len(), 64);
        assert_eq!(std::fs::metadata(&written.path).unwrap().len() as usize, written.bytes);
    }

    #[test]
    fn test_rewrite_is_identical() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FilesystemStorage::new(dir.path());
        let partition = single_partition();
        let request = || WritePartitionRequest {
            partition: &partition,
            app: "swiggy",
            file_name: "reviews.parquet",
        };

        let first = write_partition(&storage, request()).unwrap();
        let second = write_partition(&storage, request()).unwrap();
        assert_eq!(first, second);
    }
}
