//! Error types for mapping operations.

use thiserror::Error;

use csvorm_model::ValueKind;

/// Errors raised while resolving bindings or converting rows and records.
///
/// Every variant aborts the whole batch it occurred in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    // === Type Descriptor Errors ===
    /// The record type is not declared as a mapping target.
    #[error("{record_type} is not declared as a csv entity")]
    NotAMappingTarget { record_type: String },

    /// The field cannot be assigned when reading.
    #[error("field {field} is not assignable")]
    NonAssignableField { field: String },

    /// A table without a header needs a position for every field.
    #[error("field {field} needs a column position when the table has no header row")]
    PositionRequired { field: String },

    /// A table with a header needs a name or a position for every field.
    #[error("field {field} needs a column name or position when the table has a header row")]
    NameOrPositionRequired { field: String },

    /// The declared field type has no value conversion.
    #[error("field {field} has unsupported type {type_name}")]
    UnsupportedFieldType { field: String, type_name: String },

    /// A temporal field was declared without a format pattern.
    #[error("field {field} needs a format pattern for date or date-time values")]
    MissingFormatPattern { field: String },

    /// The format pattern cannot be used to parse or render values.
    #[error("field {field} has invalid format pattern '{pattern}': {reason}")]
    InvalidFormatPattern {
        field: String,
        pattern: String,
        reason: String,
    },

    // === Row Errors ===
    /// A required column is absent from the header row.
    #[error("column {column} is required but missing from the header row")]
    RequiredColumnMissing { column: String },

    /// A positional lookup fell past the end of the row.
    #[error("field {field} reads column {position} but the row has {width} cells")]
    CellOutOfRange {
        field: String,
        position: usize,
        width: usize,
    },

    /// The cell text does not parse as the field's kind.
    #[error("field {field} cannot parse '{raw}' as {kind}")]
    ValueParse {
        field: String,
        raw: String,
        kind: ValueKind,
    },

    // === Write Errors ===
    /// An explicit column list names a column no field is bound to.
    #[error("no field of {record_type} is bound to column {column}")]
    ColumnNotFound { column: String, record_type: String },

    // === Record Errors ===
    /// A record produced or received a value of the wrong kind.
    #[error("field {field} expects a {expected} value, got {actual}")]
    ValueKindMismatch {
        field: String,
        expected: ValueKind,
        actual: String,
    },

    /// A binding names a field the record does not have.
    #[error("{record_type} has no field {field}")]
    UnknownField { field: String, record_type: String },
}

/// Result type for mapping operations.
pub type Result<T> = std::result::Result<T, MappingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_carries_context() {
        let err = MappingError::RequiredColumnMissing {
            column: "nick_name".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "column nick_name is required but missing from the header row"
        );

        let err = MappingError::ColumnNotFound {
            column: "int_aabbcc".to_string(),
            record_type: "User4".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no field of User4 is bound to column int_aabbcc"
        );
    }

    #[test]
    fn parse_error_names_kind() {
        let err = MappingError::ValueParse {
            field: "salary".to_string(),
            raw: "abc".to_string(),
            kind: ValueKind::Integer,
        };
        assert_eq!(err.to_string(), "field salary cannot parse 'abc' as integer");
    }
}
