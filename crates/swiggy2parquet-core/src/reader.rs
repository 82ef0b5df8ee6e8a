// CSV decoding
//
// Loads the whole input into memory. Every row is normalized before any
// caller sees the result, so a bad row fails the run before output exists.

use std::io::Read;

use crate::error::{Result, TransformError};
use crate::schema::source;
use crate::types::{ReviewRecord, SourceRow};

/// Everything decoded from one CSV input
#[derive(Debug, Clone)]
pub struct LoadedReviews {
    /// Header columns exactly as they appear in the file
    pub columns: Vec<String>,
    pub records: Vec<ReviewRecord>,
}

impl LoadedReviews {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Decode and normalize every row of a review CSV.
pub fn read_reviews<R: Read>(input: R) -> Result<LoadedReviews> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input);

    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    check_required_columns(&columns)?;

    let mut records = Vec::new();
    for (idx, row) in reader.deserialize::<SourceRow>().enumerate() {
        let row = row?;
        records.push(ReviewRecord::from_source(row, idx + 1)?);
    }

    Ok(LoadedReviews { columns, records })
}

fn check_required_columns(columns: &[String]) -> Result<()> {
    for &required in source::REQUIRED {
        if !columns.iter().any(|c| c == required) {
            return Err(TransformError::MissingColumn { column: required });
        }
    }
    Ok(())
}
