//! Command implementations, independent of argument parsing.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use csvorm_ingest::{ReadOptions, WriteOptions, load_schema, read_dynamic, write_dynamic};
use csvorm_map::{
    DynamicRecord, check_assignable, is_complete_permutation, plan_by_names, plan_by_position,
    resolve_bindings, validate_bindings,
};
use csvorm_model::{FieldBinding, HeaderOption, RecordType};
use tracing::{info, info_span, trace};

use crate::logging::redact_value;

/// Outcome of checking a schema file.
#[derive(Debug, Clone)]
pub struct SchemaReport {
    pub record_type: RecordType,
    /// Fields in the order a write without explicit columns emits them.
    pub write_order: Vec<String>,
    /// True when the write order comes from declared positions.
    pub positional: bool,
    /// Why the schema cannot be read from a headered table, if it cannot.
    pub header_problem: Option<String>,
    /// Why the schema cannot be read from a headerless table, if it cannot.
    pub headerless_problem: Option<String>,
}

/// Records decoded for display.
#[derive(Debug, Clone)]
pub struct InspectResult {
    pub record_type: RecordType,
    pub records: Vec<DynamicRecord>,
    /// Number of data rows in the input, before any limit.
    pub total: usize,
}

#[derive(Debug, Clone)]
pub struct InspectRequest {
    pub input: PathBuf,
    pub schema: PathBuf,
    pub header: HeaderOption,
    pub delimiter: u8,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct ConvertRequest {
    pub input: PathBuf,
    pub schema: PathBuf,
    pub output: PathBuf,
    pub input_header: HeaderOption,
    pub output_header: HeaderOption,
    pub delimiter: u8,
    pub output_delimiter: u8,
    /// Explicit output column names; declared positions are used when empty.
    pub columns: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ConvertResult {
    pub output: PathBuf,
    pub records: usize,
    pub columns: Vec<String>,
}

/// Load a schema and check it can drive reads and writes.
pub fn run_schema(path: &Path) -> Result<SchemaReport> {
    let record_type =
        load_schema(path).with_context(|| format!("load schema {}", path.display()))?;
    let bindings =
        resolve_bindings(&record_type).with_context(|| format!("check {}", record_type.name))?;

    let positional = is_complete_permutation(bindings);
    let write_order: Vec<String> = plan_by_position(bindings)
        .fields()
        .into_iter()
        .map(str::to_string)
        .collect();
    let read_problem = |header: HeaderOption| {
        check_assignable(bindings)
            .and_then(|()| validate_bindings(bindings, header))
            .err()
            .map(|err| err.to_string())
    };
    let header_problem = read_problem(HeaderOption::WithHeader);
    let headerless_problem = read_problem(HeaderOption::WithoutHeader);

    info!(
        record_type = %record_type.name,
        columns = bindings.len(),
        positional,
        "schema checked"
    );
    Ok(SchemaReport {
        write_order,
        positional,
        header_problem,
        headerless_problem,
        record_type,
    })
}

/// Read a CSV file through a schema.
pub fn run_inspect(request: &InspectRequest) -> Result<InspectResult> {
    let span = info_span!("inspect", input = %request.input.display());
    let _guard = span.enter();

    let record_type = load_schema(&request.schema)
        .with_context(|| format!("load schema {}", request.schema.display()))?;
    let options = ReadOptions::new(request.header).with_delimiter(request.delimiter);
    let mut records = read_dynamic(&request.input, &record_type, &options)
        .with_context(|| format!("read {}", request.input.display()))?;
    let total = records.len();
    if let Some(limit) = request.limit {
        records.truncate(limit);
    }
    for (row, record) in records.iter().enumerate() {
        for (field, value) in record.iter() {
            trace!(row, field, value = %redact_value(&value.to_string()), "decoded cell");
        }
    }
    Ok(InspectResult {
        record_type,
        records,
        total,
    })
}

/// Read a CSV file through a schema and write it back out.
pub fn run_convert(request: &ConvertRequest) -> Result<ConvertResult> {
    let span = info_span!(
        "convert",
        input = %request.input.display(),
        output = %request.output.display()
    );
    let _guard = span.enter();
    let start = Instant::now();

    let record_type = load_schema(&request.schema)
        .with_context(|| format!("load schema {}", request.schema.display()))?;
    let read_options = ReadOptions::new(request.input_header).with_delimiter(request.delimiter);
    let records = read_dynamic(&request.input, &record_type, &read_options)
        .with_context(|| format!("read {}", request.input.display()))?;

    let columns: Vec<String> = request
        .columns
        .iter()
        .filter(|column| !column.trim().is_empty())
        .cloned()
        .collect();
    let mut write_options =
        WriteOptions::new(request.output_header).with_delimiter(request.output_delimiter);
    let output_columns = if columns.is_empty() {
        let bindings = resolve_bindings(&record_type)?;
        header_labels(plan_by_position(bindings).columns())
    } else {
        let plan = plan_by_names(&record_type, columns.as_slice())?;
        write_options = write_options.with_columns(columns.iter().cloned());
        header_labels(plan.columns())
    };
    write_dynamic(&records, &record_type, &request.output, &write_options)
        .with_context(|| format!("write {}", request.output.display()))?;

    info!(
        input = %request.input.display(),
        output = %request.output.display(),
        records = records.len(),
        duration_ms = start.elapsed().as_millis(),
        "convert complete"
    );
    Ok(ConvertResult {
        output: request.output.clone(),
        records: records.len(),
        columns: output_columns,
    })
}

fn header_labels(columns: &[&FieldBinding]) -> Vec<String> {
    columns
        .iter()
        .map(|binding| binding.header_label().to_string())
        .collect()
}
