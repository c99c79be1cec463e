//! Data-file summary tools.
//!
//! Reports row and column counts for CSV and Parquet files under the
//! configured data directory.

use std::fs::File;
use std::path::{Path, PathBuf};

use parquet::file::reader::{FileReader, SerializedFileReader};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("failed to open data file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to read CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to read Parquet data: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),
}

/// Resolve `filename` inside `data_dir`, stripping any path components a
/// caller may have smuggled in.
fn data_path(data_dir: &Path, filename: &str) -> PathBuf {
    data_dir.join(sanitize_filename::sanitize(filename))
}

/// Row/column summary of a CSV file. The header row is not counted.
pub fn csv_summary(data_dir: &Path, filename: &str) -> Result<String, SummaryError> {
    let mut reader = csv::Reader::from_path(data_path(data_dir, filename))?;
    let columns = reader.headers()?.len();

    let mut rows = 0usize;
    for record in reader.records() {
        record?;
        rows += 1;
    }

    Ok(format!(
        "CSV file '{}' has {} rows and {} columns.",
        filename, rows, columns
    ))
}

/// Row/column summary of a Parquet file, taken from the file metadata.
pub fn parquet_summary(data_dir: &Path, filename: &str) -> Result<String, SummaryError> {
    let file = File::open(data_path(data_dir, filename))?;
    let reader = SerializedFileReader::new(file)?;
    let metadata = reader.metadata().file_metadata();

    Ok(format!(
        "Parquet file '{}' has {} rows and {} columns.",
        filename,
        metadata.num_rows(),
        metadata.schema_descr().num_columns()
    ))
}
