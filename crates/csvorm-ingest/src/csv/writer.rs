//! Column-major tables out to CSV text.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::{Terminator, WriterBuilder};
use csvorm_model::ColumnMajorTable;

use crate::error::{IngestError, Result};

/// Writes `table` row by row; every record ends with `\n` and absent
/// cells are written empty.
pub fn write_csv<W: Write>(writer: W, table: &ColumnMajorTable, delimiter: u8) -> Result<()> {
    emit_records(writer, table, delimiter)?;
    Ok(())
}

/// Writes `table` to a file, replacing any existing content.
pub fn write_csv_path(path: &Path, table: &ColumnMajorTable, delimiter: u8) -> Result<()> {
    let file = File::create(path).map_err(|source| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    emit_records(BufWriter::new(file), table, delimiter).map_err(|source| {
        IngestError::CsvWrite {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn emit_records<W: Write>(writer: W, table: &ColumnMajorTable, delimiter: u8) -> csv::Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);
    for row in table.to_rows() {
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}
