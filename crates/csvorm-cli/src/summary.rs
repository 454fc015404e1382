//! Terminal output for command results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use csvorm_model::{FieldBinding, Value};

use crate::commands::{ConvertResult, InspectResult, SchemaReport};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

/// Bindings of a schema, one row per field.
pub fn schema_table(report: &SchemaReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Column"),
        header_cell("Position"),
        header_cell("Type"),
        header_cell("Format"),
        header_cell("Required"),
        header_cell("Readonly"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);
    align_column(&mut table, 6, CellAlignment::Center);
    for binding in &report.record_type.bindings {
        table.add_row(binding_row(binding));
    }
    table
}

pub fn print_schema(report: &SchemaReport) {
    println!("Record type: {}", report.record_type.name);
    println!("{}", schema_table(report));
    let source = if report.positional {
        "declared positions"
    } else {
        "declaration order"
    };
    println!("Write order ({source}): {}", report.write_order.join(", "));
    print_readability("with header", report.header_problem.as_deref());
    print_readability("without header", report.headerless_problem.as_deref());
}

/// Decoded records, one row per record and one column per field.
pub fn records_table(result: &InspectResult) -> Table {
    let bindings = &result.record_type.bindings;
    let mut table = Table::new();
    table.set_header(
        bindings
            .iter()
            .map(|binding| header_cell(&binding.field))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for record in &result.records {
        table.add_row(
            bindings
                .iter()
                .map(|binding| value_cell(record.get(&binding.field)))
                .collect::<Vec<_>>(),
        );
    }
    table
}

pub fn print_inspect(result: &InspectResult) {
    println!("{}", records_table(result));
    if result.records.len() < result.total {
        println!(
            "Showing {} of {} records",
            result.records.len(),
            result.total
        );
    } else {
        println!("{} records", result.total);
    }
}

pub fn print_convert(result: &ConvertResult) {
    println!(
        "Wrote {} records to {}",
        result.records,
        result.output.display()
    );
    println!("Columns: {}", result.columns.join(", "));
}

fn print_readability(mode: &str, problem: Option<&str>) {
    match problem {
        None => println!("Readable {mode}: yes"),
        Some(reason) => println!("Readable {mode}: no ({reason})"),
    }
}

fn binding_row(binding: &FieldBinding) -> Vec<Cell> {
    vec![
        Cell::new(&binding.field),
        optional_cell(binding.named_column()),
        optional_cell(binding.column_position),
        Cell::new(binding.kind.as_str()),
        optional_cell(binding.pattern()),
        flag_cell(binding.required),
        flag_cell(!binding.assignable),
    ]
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn optional_cell<T: ToString>(value: Option<T>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn value_cell(value: Option<&Value>) -> Cell {
    match value {
        None | Some(Value::Null) => dim_cell("null"),
        Some(value) => Cell::new(value),
    }
}

fn flag_cell(flag: bool) -> Cell {
    if flag {
        Cell::new("✓").fg(Color::Green)
    } else {
        dim_cell("-")
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
