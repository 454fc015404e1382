//! Data model shared by the csvorm crates.
//!
//! Bindings describe how a record field maps to a table column, values are
//! the typed results of decoding a cell, and the table types are the shapes
//! exchanged with the CSV reader and writer.

pub mod binding;
pub mod kind;
pub mod table;
pub mod value;

pub use binding::{FieldBinding, HeaderOption, RecordType};
pub use kind::ValueKind;
pub use table::{ColumnMajorTable, ColumnPlan, CsvTable, HeaderIndex, Row};
pub use value::{CalendarDate, GenericValue, SqlDate, Timestamp, Value};
