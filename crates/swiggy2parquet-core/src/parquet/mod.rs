// Parquet file writing
//
// This module handles writing Arrow RecordBatches to Parquet format.

pub mod writer;

pub use writer::{
    encode_record_batch, set_parquet_row_group_size, write_parquet_into, writer_properties,
    EncodedParquet,
};
