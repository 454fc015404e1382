//! Value kinds a bound field can hold.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The scalar kind of a bound field.
///
/// The kind decides how a cell string is decoded into a [`crate::Value`]
/// and how the value is encoded back. `Unsupported` carries the name of a
/// declared type the codec cannot convert; bindings of that kind are
/// rejected before any row is touched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    String,
    Integer,
    Long,
    Double,
    Float,
    Short,
    Char,
    Boolean,
    /// Date-time wrapped in a calendar container.
    CalendarDate,
    /// Date-time carried as an instant.
    Timestamp,
    /// Date without a time of day, database flavored.
    SqlDate,
    LocalDate,
    LocalDateTime,
    /// Opaque text carried as-is.
    Generic,
    Unsupported(String),
}

impl ValueKind {
    /// Returns true for kinds that need a format pattern.
    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            ValueKind::CalendarDate
                | ValueKind::Timestamp
                | ValueKind::SqlDate
                | ValueKind::LocalDate
                | ValueKind::LocalDateTime
        )
    }

    /// Canonical type name, as used in schema files.
    pub fn as_str(&self) -> &str {
        match self {
            ValueKind::String => "string",
            ValueKind::Integer => "integer",
            ValueKind::Long => "long",
            ValueKind::Double => "double",
            ValueKind::Float => "float",
            ValueKind::Short => "short",
            ValueKind::Char => "char",
            ValueKind::Boolean => "boolean",
            ValueKind::CalendarDate => "calendar_date",
            ValueKind::Timestamp => "timestamp",
            ValueKind::SqlDate => "sql_date",
            ValueKind::LocalDate => "local_date",
            ValueKind::LocalDateTime => "local_date_time",
            ValueKind::Generic => "generic",
            ValueKind::Unsupported(name) => name.as_str(),
        }
    }

    /// Resolve a declared type name into a kind.
    ///
    /// Matching is case-insensitive and accepts the common Rust spellings
    /// (`i32`, `f64`, `NaiveDate`, ...). Names that match nothing become
    /// [`ValueKind::Unsupported`] so the resolver can report them with the
    /// field they belong to.
    pub fn from_type_name(name: &str) -> Self {
        let normalized = name.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "string" | "str" | "text" => ValueKind::String,
            "integer" | "int" | "i32" => ValueKind::Integer,
            "long" | "i64" => ValueKind::Long,
            "double" | "f64" => ValueKind::Double,
            "float" | "f32" => ValueKind::Float,
            "short" | "i16" => ValueKind::Short,
            "char" | "character" => ValueKind::Char,
            "boolean" | "bool" => ValueKind::Boolean,
            "calendar_date" | "calendar" | "calendardate" => ValueKind::CalendarDate,
            "timestamp" => ValueKind::Timestamp,
            "sql_date" | "sqldate" => ValueKind::SqlDate,
            "local_date" | "localdate" | "date" | "naivedate" => ValueKind::LocalDate,
            "local_date_time" | "localdatetime" | "datetime" | "naivedatetime" => {
                ValueKind::LocalDateTime
            }
            "generic" | "object" | "any" => ValueKind::Generic,
            _ => ValueKind::Unsupported(name.trim().to_string()),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
