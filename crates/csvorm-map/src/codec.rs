//! Type-directed conversion between one cell and one value.

use csvorm_model::{
    CalendarDate, FieldBinding, GenericValue, SqlDate, Timestamp, Value, ValueKind,
};

use crate::error::{MappingError, Result};
use crate::pattern::{DatePattern, PatternError};

/// Decode a cell into a value of the binding's kind.
///
/// An absent cell decodes to [`Value::Null`] without any coercion. Booleans
/// are permissive: anything other than a case-insensitive `true` is `false`.
pub fn decode(cell: Option<&str>, binding: &FieldBinding) -> Result<Value> {
    let Some(raw) = cell else {
        return Ok(Value::Null);
    };
    let parse_error = || MappingError::ValueParse {
        field: binding.field.clone(),
        raw: raw.to_string(),
        kind: binding.kind.clone(),
    };
    let value = match &binding.kind {
        ValueKind::String => Value::String(raw.to_string()),
        ValueKind::Generic => Value::Generic(GenericValue::new(raw)),
        ValueKind::Integer => Value::Integer(raw.parse().map_err(|_| parse_error())?),
        ValueKind::Long => Value::Long(raw.parse().map_err(|_| parse_error())?),
        // floating point cells tolerate surrounding whitespace
        ValueKind::Double => Value::Double(raw.trim().parse().map_err(|_| parse_error())?),
        ValueKind::Float => Value::Float(raw.trim().parse().map_err(|_| parse_error())?),
        ValueKind::Short => Value::Short(raw.parse().map_err(|_| parse_error())?),
        ValueKind::Char => Value::Char(raw.chars().next().ok_or_else(parse_error)?),
        ValueKind::Boolean => Value::Boolean(raw.eq_ignore_ascii_case("true")),
        ValueKind::CalendarDate
        | ValueKind::Timestamp
        | ValueKind::SqlDate
        | ValueKind::LocalDate
        | ValueKind::LocalDateTime => {
            let pattern = compile_pattern(binding)?;
            decode_temporal(raw, &binding.kind, &pattern).ok_or_else(parse_error)?
        }
        ValueKind::Unsupported(type_name) => return Err(unsupported(binding, type_name)),
    };
    Ok(value)
}

/// Encode a value of the binding's kind into a cell.
///
/// [`Value::Null`] encodes to an absent cell.
pub fn encode(value: &Value, binding: &FieldBinding) -> Result<Option<String>> {
    if value.is_null() {
        return Ok(None);
    }
    let kind = &binding.kind;
    if let ValueKind::Unsupported(type_name) = kind {
        return Err(unsupported(binding, type_name));
    }
    if kind.is_temporal() {
        let pattern = compile_pattern(binding)?;
        return encode_temporal(value, binding, &pattern).map(Some);
    }
    let cell = match (kind, value) {
        (ValueKind::String, Value::String(value)) => value.clone(),
        (ValueKind::Generic, Value::Generic(value)) => value.to_string(),
        (ValueKind::Integer, Value::Integer(value)) => value.to_string(),
        (ValueKind::Long, Value::Long(value)) => value.to_string(),
        (ValueKind::Double, Value::Double(value)) => value.to_string(),
        (ValueKind::Float, Value::Float(value)) => value.to_string(),
        (ValueKind::Short, Value::Short(value)) => value.to_string(),
        (ValueKind::Char, Value::Char(value)) => value.to_string(),
        (ValueKind::Boolean, Value::Boolean(value)) => value.to_string(),
        _ => return Err(kind_mismatch(binding, value)),
    };
    Ok(Some(cell))
}

/// Compile the binding's format pattern, failing when it is unset or empty.
pub fn compile_pattern(binding: &FieldBinding) -> Result<DatePattern> {
    let pattern = binding
        .pattern()
        .ok_or_else(|| MappingError::MissingFormatPattern {
            field: binding.field.clone(),
        })?;
    DatePattern::compile(pattern).map_err(|err| invalid_pattern(binding, pattern, &err))
}

fn decode_temporal(raw: &str, kind: &ValueKind, pattern: &DatePattern) -> Option<Value> {
    let value = match kind {
        ValueKind::CalendarDate => Value::CalendarDate(CalendarDate(pattern.parse_date_time(raw)?)),
        ValueKind::Timestamp => Value::Timestamp(Timestamp(pattern.parse_date_time(raw)?)),
        ValueKind::SqlDate => Value::SqlDate(SqlDate(pattern.parse_date(raw)?)),
        ValueKind::LocalDate => Value::LocalDate(pattern.parse_date(raw)?),
        ValueKind::LocalDateTime => Value::LocalDateTime(pattern.parse_date_time(raw)?),
        _ => return None,
    };
    Some(value)
}

fn encode_temporal(value: &Value, binding: &FieldBinding, pattern: &DatePattern) -> Result<String> {
    if value.kind().as_ref() != Some(&binding.kind) {
        return Err(kind_mismatch(binding, value));
    }
    let date_time = value
        .as_date_time()
        .ok_or_else(|| kind_mismatch(binding, value))?;
    pattern
        .format(date_time)
        .map_err(|err| invalid_pattern(binding, binding.pattern().unwrap_or_default(), &err))
}

fn unsupported(binding: &FieldBinding, type_name: &str) -> MappingError {
    MappingError::UnsupportedFieldType {
        field: binding.field.clone(),
        type_name: type_name.to_string(),
    }
}

fn invalid_pattern(binding: &FieldBinding, pattern: &str, err: &PatternError) -> MappingError {
    MappingError::InvalidFormatPattern {
        field: binding.field.clone(),
        pattern: pattern.to_string(),
        reason: err.to_string(),
    }
}

fn kind_mismatch(binding: &FieldBinding, value: &Value) -> MappingError {
    MappingError::ValueKindMismatch {
        field: binding.field.clone(),
        expected: binding.kind.clone(),
        actual: value
            .kind()
            .map_or_else(|| "null".to_string(), |kind| kind.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn binding(kind: ValueKind) -> FieldBinding {
        FieldBinding::new("field", kind)
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn absent_cell_decodes_to_null() {
        for kind in [ValueKind::Integer, ValueKind::LocalDate, ValueKind::Char] {
            assert_eq!(decode(None, &binding(kind)), Ok(Value::Null));
        }
    }

    #[test]
    fn decodes_scalars() {
        assert_eq!(
            decode(Some("2000"), &binding(ValueKind::Integer)),
            Ok(Value::Integer(2000))
        );
        assert_eq!(
            decode(Some("44883377"), &binding(ValueKind::Long)),
            Ok(Value::Long(44_883_377))
        );
        assert_eq!(
            decode(Some("23.45"), &binding(ValueKind::Double)),
            Ok(Value::Double(23.45))
        );
        assert_eq!(
            decode(Some("2.5"), &binding(ValueKind::Float)),
            Ok(Value::Float(2.5))
        );
        assert_eq!(
            decode(Some("-99"), &binding(ValueKind::Short)),
            Ok(Value::Short(-99))
        );
        assert_eq!(
            decode(Some("xyz"), &binding(ValueKind::Char)),
            Ok(Value::Char('x'))
        );
        assert_eq!(
            decode(Some("Wang"), &binding(ValueKind::Generic)),
            Ok(Value::Generic(GenericValue::new("Wang")))
        );
    }

    #[test]
    fn boolean_decode_is_permissive() {
        let kind = binding(ValueKind::Boolean);
        assert_eq!(decode(Some("TRUE"), &kind), Ok(Value::Boolean(true)));
        assert_eq!(decode(Some("true"), &kind), Ok(Value::Boolean(true)));
        assert_eq!(decode(Some("yesplz"), &kind), Ok(Value::Boolean(false)));
        assert_eq!(decode(Some(""), &kind), Ok(Value::Boolean(false)));
    }

    #[test]
    fn malformed_numbers_fail_with_context() {
        let err = decode(Some("12a"), &binding(ValueKind::Integer)).unwrap_err();
        assert_eq!(
            err,
            MappingError::ValueParse {
                field: "field".to_string(),
                raw: "12a".to_string(),
                kind: ValueKind::Integer,
            }
        );
        assert!(decode(Some("70000"), &binding(ValueKind::Short)).is_err());
    }

    #[test]
    fn empty_char_cell_fails() {
        assert!(matches!(
            decode(Some(""), &binding(ValueKind::Char)),
            Err(MappingError::ValueParse { .. })
        ));
    }

    #[test]
    fn temporal_kinds_need_a_pattern() {
        let err = decode(Some("2020-01-15"), &binding(ValueKind::LocalDate)).unwrap_err();
        assert_eq!(
            err,
            MappingError::MissingFormatPattern {
                field: "field".to_string()
            }
        );
        let empty = binding(ValueKind::Timestamp).format("");
        let value = Value::Timestamp(Timestamp::from_date(date(2020, 1, 15)));
        assert!(matches!(
            encode(&value, &empty),
            Err(MappingError::MissingFormatPattern { .. })
        ));
    }

    #[test]
    fn decodes_each_temporal_kind() {
        let day = date(2020, 1, 15);
        let cases = [
            (ValueKind::CalendarDate, Value::CalendarDate(CalendarDate::from_date(day))),
            (ValueKind::Timestamp, Value::Timestamp(Timestamp::from_date(day))),
            (ValueKind::SqlDate, Value::SqlDate(SqlDate(day))),
            (ValueKind::LocalDate, Value::LocalDate(day)),
        ];
        for (kind, expected) in cases {
            let binding = binding(kind).format("yyyy-MM-dd");
            assert_eq!(decode(Some("2020-01-15"), &binding), Ok(expected));
        }

        let binding = binding(ValueKind::LocalDateTime).format("yyyy-MM-dd_HH:mm");
        let expected = day.and_hms_opt(9, 5, 0).expect("valid time");
        assert_eq!(
            decode(Some("2020-01-15_09:05"), &binding),
            Ok(Value::LocalDateTime(expected))
        );
    }

    #[test]
    fn unparseable_date_fails() {
        let binding = binding(ValueKind::LocalDate).format("yyyy-MM-dd");
        assert!(matches!(
            decode(Some("15/01/2020"), &binding),
            Err(MappingError::ValueParse { .. })
        ));
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let binding = binding(ValueKind::LocalDate).format("yyyy-qq");
        assert!(matches!(
            decode(Some("2020-01"), &binding),
            Err(MappingError::InvalidFormatPattern { .. })
        ));
    }

    #[test]
    fn unsupported_kind_fails_both_ways() {
        let binding = binding(ValueKind::Unsupported("regex::Regex".to_string()));
        let expected = MappingError::UnsupportedFieldType {
            field: "field".to_string(),
            type_name: "regex::Regex".to_string(),
        };
        assert_eq!(decode(Some("a+"), &binding), Err(expected.clone()));
        assert_eq!(
            encode(&Value::String("a+".to_string()), &binding),
            Err(expected)
        );
    }

    #[test]
    fn encodes_scalars() {
        assert_eq!(
            encode(&Value::Integer(2000), &binding(ValueKind::Integer)),
            Ok(Some("2000".to_string()))
        );
        assert_eq!(
            encode(&Value::Double(23.45), &binding(ValueKind::Double)),
            Ok(Some("23.45".to_string()))
        );
        assert_eq!(
            encode(&Value::Boolean(false), &binding(ValueKind::Boolean)),
            Ok(Some("false".to_string()))
        );
        assert_eq!(
            encode(&Value::Char('x'), &binding(ValueKind::Char)),
            Ok(Some("x".to_string()))
        );
        assert_eq!(encode(&Value::Null, &binding(ValueKind::Integer)), Ok(None));
    }

    #[test]
    fn encodes_dates_through_pattern() {
        let day = date(2020, 1, 15);
        let sql = binding(ValueKind::SqlDate).format("dd/MM/yyyy");
        assert_eq!(
            encode(&Value::SqlDate(SqlDate(day)), &sql),
            Ok(Some("15/01/2020".to_string()))
        );
        let with_time = binding(ValueKind::LocalDate).format("yyyy-MM-dd HH:mm");
        assert_eq!(
            encode(&Value::LocalDate(day), &with_time),
            Ok(Some("2020-01-15 00:00".to_string()))
        );
    }

    #[test]
    fn floats_ignore_surrounding_whitespace() {
        assert_eq!(
            decode(Some(" 1.5 "), &binding(ValueKind::Double)),
            Ok(Value::Double(1.5))
        );
        assert_eq!(
            decode(Some("\t2.5"), &binding(ValueKind::Float)),
            Ok(Value::Float(2.5))
        );
        assert!(decode(Some(" 15"), &binding(ValueKind::Integer)).is_err());
    }

    #[test]
    fn zone_patterns_are_rejected_in_both_directions() {
        let binding = binding(ValueKind::LocalDateTime).format("yyyy-MM-dd'T'HH:mm:ssZ");
        assert!(matches!(
            decode(Some("2020-01-15T09:05:01+0800"), &binding),
            Err(MappingError::InvalidFormatPattern { .. })
        ));
        let value = Value::LocalDateTime(date(2020, 1, 15).and_hms_opt(9, 5, 1).expect("valid time"));
        assert!(matches!(
            encode(&value, &binding),
            Err(MappingError::InvalidFormatPattern { .. })
        ));
    }

    #[test]
    fn short_fraction_pattern_round_trips() {
        let binding = binding(ValueKind::LocalDateTime).format("yyyy-MM-dd HH:mm:ss.S");
        let expected = date(2020, 1, 15)
            .and_hms_milli_opt(9, 5, 1, 500)
            .expect("valid time");
        let value = decode(Some("2020-01-15 09:05:01.5"), &binding).expect("decode");
        assert_eq!(value, Value::LocalDateTime(expected));
        let cell = encode(&value, &binding).expect("encode").expect("cell");
        assert_eq!(decode(Some(&cell), &binding), Ok(value));
    }

    #[test]
    fn encode_rejects_mismatched_values() {
        let err = encode(&Value::String("2000".to_string()), &binding(ValueKind::Integer))
            .unwrap_err();
        assert_eq!(
            err,
            MappingError::ValueKindMismatch {
                field: "field".to_string(),
                expected: ValueKind::Integer,
                actual: "string".to_string(),
            }
        );
        let date_binding = binding(ValueKind::SqlDate).format("yyyy-MM-dd");
        assert!(matches!(
            encode(&Value::LocalDate(date(2020, 1, 15)), &date_binding),
            Err(MappingError::ValueKindMismatch { .. })
        ));
    }
}
