// swiggy2parquet - Scraped review CSV to date-partitioned Parquet
//
// The pure conversion lives in swiggy2parquet-core; this crate adds the
// configuration, logging and filesystem side of a run.

pub mod config;
pub mod convert;
pub mod init;
pub mod writer;

pub use config::{ConvertConfig, LogFormat};
pub use convert::{convert, ConversionSummary};
pub use init::init_tracing;
pub use writer::{ErrorCode, PartitionWrite, WriterError};
