//! CSV text into string tables.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use csvorm_model::CsvTable;

use crate::error::{IngestError, Result};
use crate::options::ReadOptions;

/// Reads CSV from any reader. The first record is the header when
/// `options.header` says so.
pub fn read_csv<R: Read>(reader: R, options: &ReadOptions) -> Result<CsvTable> {
    Ok(parse_records(reader, options)?)
}

/// Reads a CSV file.
pub fn read_csv_path(path: &Path, options: &ReadOptions) -> Result<CsvTable> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    parse_records(file, options).map_err(|source| IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_records<R: Read>(reader: R, options: &ReadOptions) -> csv::Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(reader);

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        if rows.is_empty()
            && let Some(first) = row.first_mut()
            && let Some(stripped) = first.strip_prefix('\u{feff}')
        {
            *first = stripped.to_string();
        }
        rows.push(row);
    }

    let headers = if options.header.is_present() {
        Some(if rows.is_empty() {
            Vec::new()
        } else {
            rows.remove(0)
        })
    } else {
        None
    };
    Ok(CsvTable::new(headers, rows))
}
