//! One-shot CSV to partitioned Parquet conversion.
//!
//! read -> normalize -> partition -> write, all in memory and in order.
//! Every row is parsed before the first partition is written. A write failure
//! part way through leaves earlier partitions of this run on disk.

use std::fs::File;
use std::io::{BufReader, ErrorKind};
use swiggy2parquet_core::parquet::set_parquet_row_group_size;
use swiggy2parquet_core::{partition_batches, read_reviews, DatasetSummary};
use tracing::info;

use crate::config::ConvertConfig;
use crate::writer::{
    write_partition, FilesystemStorage, PartitionWrite, Result, WritePartitionRequest,
    WriterError,
};

/// Everything a finished run produced
#[derive(Debug, Clone)]
pub struct ConversionSummary {
    pub dataset: DatasetSummary,
    /// Written partitions in ascending date order
    pub partitions: Vec<PartitionWrite>,
}

impl ConversionSummary {
    pub fn rows_written(&self) -> usize {
        self.partitions.iter().map(|p| p.rows).sum()
    }
}

/// Run the full conversion described by `config`.
pub fn convert(config: &ConvertConfig) -> Result<ConversionSummary> {
    config
        .validate()
        .map_err(|e| WriterError::invalid_config(format!("{:#}", e)))?;
    set_parquet_row_group_size(config.output.parquet_row_group_size);

    let input_path = config.input_path();
    info!("Reading CSV file {}", input_path.display());

    let file = File::open(input_path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => WriterError::input_missing(input_path),
        _ => WriterError::input_unreadable(input_path, e),
    })?;

    // Directories open fine on Unix and only fail once read
    let loaded = read_reviews(BufReader::new(file)).map_err(|e| {
        if e.is_parse_error() {
            WriterError::parse(input_path, e)
        } else {
            WriterError::input_read(input_path, e)
        }
    })?;

    info!("Loaded {} rows", loaded.len());
    info!("Columns: {:?}", loaded.columns);

    let dataset = DatasetSummary::from_records(&loaded.records);
    let storage = FilesystemStorage::new(config.output_root());
    info!("Writing partitions under {}", storage.base_path().display());

    let batches = partition_batches(loaded.records)
        .map_err(|e| WriterError::encode("record batches", e))?;

    let mut partitions = Vec::with_capacity(batches.len());
    for partition in &batches {
        let written = write_partition(
            &storage,
            WritePartitionRequest {
                partition,
                app: &config.output.app,
                file_name: &config.output.file_name,
            },
        )?;
        partitions.push(written);
    }

    info!("Conversion complete! {}", dataset);

    Ok(ConversionSummary {
        dataset,
        partitions,
    })
}
