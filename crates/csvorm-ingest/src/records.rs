//! Reading and writing records as CSV.

use std::io::{Read, Write};
use std::path::Path;
use std::time::Instant;

use csvorm_map::{
    ColumnMajorTable, CsvEntity, DynamicRecord, HeaderOption, Record, RecordType, read_records,
    write_records, write_records_with_columns,
};
use tracing::{info, info_span};

use crate::csv::{read_csv, read_csv_path, write_csv, write_csv_path};
use crate::error::Result;
use crate::options::{ReadOptions, WriteOptions};

/// Read a CSV file into records of `T`.
pub fn read_table<T: CsvEntity>(path: &Path, header: HeaderOption) -> Result<Vec<T>> {
    read_path(path, T::record_type(), &ReadOptions::new(header))
}

/// Read CSV from `reader` into records of `T`.
pub fn read_table_from<T: CsvEntity, R: Read>(reader: R, options: &ReadOptions) -> Result<Vec<T>> {
    let table = read_csv(reader, options)?;
    Ok(read_records(&table, T::record_type(), options.header)?)
}

/// Write records of `T` to a CSV file in position order.
pub fn write_table<T: CsvEntity>(records: &[T], path: &Path, header: HeaderOption) -> Result<()> {
    write_path(records, T::record_type(), path, &WriteOptions::new(header))
}

/// Write records of `T` to a CSV file with an explicit column order.
pub fn write_table_with_columns<T: CsvEntity, S: AsRef<str>>(
    records: &[T],
    path: &Path,
    columns: &[S],
    header: HeaderOption,
) -> Result<()> {
    let options = WriteOptions::new(header)
        .with_columns(columns.iter().map(|column| column.as_ref().to_string()));
    write_path(records, T::record_type(), path, &options)
}

/// Write records of `T` as CSV to `writer`.
pub fn write_table_to<T: CsvEntity, W: Write>(
    records: &[T],
    writer: W,
    options: &WriteOptions,
) -> Result<()> {
    let table = encode_table(records, T::record_type(), options)?;
    write_csv(writer, &table, options.delimiter)
}

/// Read a CSV file using a record type loaded at runtime.
pub fn read_dynamic(
    path: &Path,
    record_type: &RecordType,
    options: &ReadOptions,
) -> Result<Vec<DynamicRecord>> {
    read_path(path, record_type, options)
}

/// Write runtime-typed records to a CSV file.
pub fn write_dynamic(
    records: &[DynamicRecord],
    record_type: &RecordType,
    path: &Path,
    options: &WriteOptions,
) -> Result<()> {
    write_path(records, record_type, path, options)
}

fn read_path<R: Record>(
    path: &Path,
    record_type: &RecordType,
    options: &ReadOptions,
) -> Result<Vec<R>> {
    let span = info_span!("read_table", path = %path.display(), record_type = %record_type.name);
    let _guard = span.enter();
    let start = Instant::now();

    let table = read_csv_path(path, options)?;
    let records = read_records(&table, record_type, options.header)?;
    info!(
        path = %path.display(),
        record_type = %record_type.name,
        records = records.len(),
        duration_ms = start.elapsed().as_millis(),
        "read complete"
    );
    Ok(records)
}

fn write_path<R: Record>(
    records: &[R],
    record_type: &RecordType,
    path: &Path,
    options: &WriteOptions,
) -> Result<()> {
    let span = info_span!("write_table", path = %path.display(), record_type = %record_type.name);
    let _guard = span.enter();
    let start = Instant::now();

    // the file is only created once every record has encoded
    let table = encode_table(records, record_type, options)?;
    write_csv_path(path, &table, options.delimiter)?;
    info!(
        path = %path.display(),
        record_type = %record_type.name,
        records = records.len(),
        columns = table.width(),
        duration_ms = start.elapsed().as_millis(),
        "write complete"
    );
    Ok(())
}

fn encode_table<R: Record>(
    records: &[R],
    record_type: &RecordType,
    options: &WriteOptions,
) -> Result<ColumnMajorTable> {
    let table = match &options.columns {
        Some(columns) => {
            write_records_with_columns(records, record_type, columns.as_slice(), options.header)?
        }
        None => write_records(records, record_type, options.header)?,
    };
    Ok(table)
}
