//! Partition writer.
//!
//! Turns encoded partitions into files on local storage.

mod error;
mod storage;
mod write;

pub use error::{ErrorCode, Result, WriterError};
pub use storage::FilesystemStorage;
pub use write::{write_partition, PartitionWrite, WritePartitionRequest};
