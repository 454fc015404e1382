//! Row to record conversion and back.

use std::time::Instant;

use csvorm_model::{
    ColumnMajorTable, ColumnPlan, CsvTable, FieldBinding, HeaderOption, RecordType, Row,
};
use tracing::{debug, info_span, trace};

use crate::codec::{decode, encode};
use crate::error::{MappingError, Result};
use crate::planner::{plan_by_names, plan_by_position};
use crate::record::Record;
use crate::resolver::{check_assignable, resolve_bindings, validate_bindings};

/// Convert one row into a new record.
///
/// Bindings are applied in order. A named binding whose column is absent
/// from the header fails when required and is skipped otherwise, leaving
/// the field at its default. The first error aborts the row.
pub fn row_to_record<R: Record>(row: &Row<'_>, bindings: &[FieldBinding]) -> Result<R> {
    let mut record = R::default();
    for binding in bindings {
        let Some(position) = locate(row, binding)? else {
            continue;
        };
        let cell = row.get(position).ok_or_else(|| MappingError::CellOutOfRange {
            field: binding.field.clone(),
            position,
            width: row.len(),
        })?;
        let value = decode(Some(cell), binding)?;
        record.assign(binding, value)?;
    }
    Ok(record)
}

/// Column position for `binding`, `None` when an optional named column is absent.
fn locate(row: &Row<'_>, binding: &FieldBinding) -> Result<Option<usize>> {
    if let Some(name) = binding.named_column().filter(|_| row.has_header()) {
        return match row.position_of(name) {
            Some(position) => Ok(Some(position)),
            None if binding.required => Err(MappingError::RequiredColumnMissing {
                column: name.to_string(),
            }),
            None => Ok(None),
        };
    }
    match binding.column_position {
        Some(position) => Ok(Some(position)),
        None if row.has_header() => Err(MappingError::NameOrPositionRequired {
            field: binding.field.clone(),
        }),
        None => Err(MappingError::PositionRequired {
            field: binding.field.clone(),
        }),
    }
}

/// Convert every data row of `table` into records of `record_type`.
///
/// The descriptor is resolved and validated before the first row is read.
pub fn read_records<R: Record>(
    table: &CsvTable,
    record_type: &RecordType,
    header: HeaderOption,
) -> Result<Vec<R>> {
    let span = info_span!(
        "read_records",
        record_type = %record_type.name,
        rows = table.rows.len()
    );
    let _guard = span.enter();
    let start = Instant::now();

    let bindings = resolve_bindings(record_type)?;
    check_assignable(bindings)?;
    validate_bindings(bindings, header)?;

    let index = header
        .is_present()
        .then(|| table.header_index().unwrap_or_default());
    let records = table
        .rows
        .iter()
        .enumerate()
        .map(|(row_idx, cells)| {
            trace!(row = row_idx, cells = cells.len(), "converting row");
            row_to_record(&Row::new(cells, index.as_ref()), bindings)
        })
        .collect::<Result<Vec<R>>>()?;

    debug!(
        record_type = %record_type.name,
        records = records.len(),
        duration_ms = start.elapsed().as_millis(),
        "read complete"
    );
    Ok(records)
}

/// Encode records column by column in the order of `plan`.
///
/// With a header, each column starts with its column name, or an empty
/// cell when the binding has none.
pub fn records_to_table<R: Record>(
    records: &[R],
    plan: &ColumnPlan<'_>,
    header: HeaderOption,
) -> Result<ColumnMajorTable> {
    let mut table = ColumnMajorTable::with_width(plan.len());
    if header.is_present() {
        for (column, binding) in plan.columns().iter().enumerate() {
            table.push(column, Some(binding.header_label().to_string()));
        }
    }
    for (row_idx, record) in records.iter().enumerate() {
        trace!(row = row_idx, "encoding record");
        for (column, binding) in plan.columns().iter().enumerate() {
            let value = record.value_of(binding)?;
            table.push(column, encode(&value, binding)?);
        }
    }
    Ok(table)
}

/// Encode records in position order.
pub fn write_records<R: Record>(
    records: &[R],
    record_type: &RecordType,
    header: HeaderOption,
) -> Result<ColumnMajorTable> {
    let span = info_span!(
        "write_records",
        record_type = %record_type.name,
        records = records.len()
    );
    let _guard = span.enter();
    let start = Instant::now();

    let bindings = resolve_bindings(record_type)?;
    let plan = plan_by_position(bindings);
    let table = records_to_table(records, &plan, header)?;

    debug!(
        record_type = %record_type.name,
        columns = table.width(),
        duration_ms = start.elapsed().as_millis(),
        "write complete"
    );
    Ok(table)
}

/// Encode records in the order of an explicit column name list.
pub fn write_records_with_columns<R: Record, S: AsRef<str>>(
    records: &[R],
    record_type: &RecordType,
    columns: &[S],
    header: HeaderOption,
) -> Result<ColumnMajorTable> {
    let span = info_span!(
        "write_records",
        record_type = %record_type.name,
        records = records.len(),
        columns = columns.len()
    );
    let _guard = span.enter();
    let start = Instant::now();

    resolve_bindings(record_type)?;
    let plan = plan_by_names(record_type, columns)?;
    let table = records_to_table(records, &plan, header)?;

    debug!(
        record_type = %record_type.name,
        columns = table.width(),
        duration_ms = start.elapsed().as_millis(),
        "write complete"
    );
    Ok(table)
}

