//! Mapping engine between string rows and typed records.
//!
//! Types become mapping targets through [`csv_entity!`]. Their descriptors
//! are resolved and validated once per call, cells are converted through
//! the value codec, and written tables follow a column plan derived from
//! declared positions or an explicit column list.

pub mod codec;
pub mod dynamic;
pub mod error;
mod macros;
pub mod mapper;
pub mod pattern;
pub mod planner;
pub mod record;
pub mod resolver;

pub use codec::{decode, encode};
pub use dynamic::DynamicRecord;
pub use error::{MappingError, Result};
pub use mapper::{
    read_records, records_to_table, row_to_record, write_records, write_records_with_columns,
};
pub use pattern::{DatePattern, PatternError};
pub use planner::{is_complete_permutation, plan_by_names, plan_by_position};
pub use record::{CsvEntity, FieldValue, Record};
pub use resolver::{check_assignable, resolve_bindings, validate_bindings};

pub use csvorm_model::{
    CalendarDate, ColumnMajorTable, ColumnPlan, CsvTable, FieldBinding, GenericValue,
    HeaderIndex, HeaderOption, RecordType, Row, SqlDate, Timestamp, Value, ValueKind,
};
