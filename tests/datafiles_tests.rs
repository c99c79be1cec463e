use std::fs;
use std::sync::Arc;

use parquet::data_type::Int32Type;
use parquet::file::properties::WriterProperties;
use parquet::file::writer::SerializedFileWriter;
use parquet::schema::parser::parse_message_type;
use tempfile::TempDir;

use sahayak_server::datafiles::{csv_summary, parquet_summary};

fn write_sample_csv(dir: &TempDir, name: &str, contents: &str) {
    fs::write(dir.path().join(name), contents).unwrap();
}

fn write_sample_parquet(dir: &TempDir, name: &str, values: &[i32]) {
    let schema = Arc::new(parse_message_type("message sample { REQUIRED INT32 id; }").unwrap());
    let props = Arc::new(WriterProperties::builder().build());
    let file = fs::File::create(dir.path().join(name)).unwrap();

    let mut writer = SerializedFileWriter::new(file, schema, props).unwrap();
    let mut row_group = writer.next_row_group().unwrap();
    while let Some(mut column) = row_group.next_column().unwrap() {
        column
            .typed::<Int32Type>()
            .write_batch(values, None, None)
            .unwrap();
        column.close().unwrap();
    }
    row_group.close().unwrap();
    writer.close().unwrap();
}

#[test]
fn test_csv_summary_counts_data_rows_and_columns() {
    let dir = TempDir::new().unwrap();
    write_sample_csv(&dir, "people.csv", "name,age\nasha,34\nravi,41\nmeena,29\n");

    let summary = csv_summary(dir.path(), "people.csv").unwrap();
    assert_eq!(summary, "CSV file 'people.csv' has 3 rows and 2 columns.");
}

#[test]
fn test_csv_summary_header_only_file() {
    let dir = TempDir::new().unwrap();
    write_sample_csv(&dir, "empty.csv", "a,b,c\n");

    let summary = csv_summary(dir.path(), "empty.csv").unwrap();
    assert_eq!(summary, "CSV file 'empty.csv' has 0 rows and 3 columns.");
}

#[test]
fn test_csv_summary_missing_file() {
    let dir = TempDir::new().unwrap();
    assert!(csv_summary(dir.path(), "nope.csv").is_err());
}

#[test]
fn test_csv_summary_does_not_escape_data_dir() {
    let dir = TempDir::new().unwrap();
    // a traversal-shaped name must resolve inside the data dir and miss
    assert!(csv_summary(dir.path(), "../../etc/passwd").is_err());
}

#[test]
fn test_parquet_summary_reads_metadata() {
    let dir = TempDir::new().unwrap();
    write_sample_parquet(&dir, "sample.parquet", &[1, 2, 3]);

    let summary = parquet_summary(dir.path(), "sample.parquet").unwrap();
    assert_eq!(
        summary,
        "Parquet file 'sample.parquet' has 3 rows and 1 columns."
    );
}

#[test]
fn test_parquet_summary_rejects_non_parquet_bytes() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("fake.parquet"), b"not a parquet file").unwrap();

    assert!(parquet_summary(dir.path(), "fake.parquet").is_err());
}
