//! Traits connecting Rust types to the mapping engine.

use chrono::{NaiveDate, NaiveDateTime};
use csvorm_model::{
    CalendarDate, FieldBinding, GenericValue, RecordType, SqlDate, Timestamp, Value, ValueKind,
};

use crate::error::{MappingError, Result};

/// A record the mapper can fill from a row and read back for a write.
///
/// Fields are addressed by [`FieldBinding::field`]. Implementations are
/// usually generated by [`csv_entity!`](crate::csv_entity).
pub trait Record: Default {
    /// Store a decoded value into the bound field.
    fn assign(&mut self, binding: &FieldBinding, value: Value) -> Result<()>;

    /// Current value of the bound field.
    fn value_of(&self, binding: &FieldBinding) -> Result<Value>;
}

/// A record type with a statically known descriptor.
pub trait CsvEntity: Record {
    /// Descriptor built once per type.
    fn record_type() -> &'static RecordType;
}

/// A Rust field type with a value conversion.
pub trait FieldValue: Sized {
    fn kind() -> ValueKind;

    fn to_value(&self) -> Value;

    /// Convert back from a value; `None` when the value has another kind.
    fn from_value(value: Value) -> Option<Self>;

    /// Like [`FieldValue::from_value`], reporting mismatches against `binding`.
    fn from_bound_value(binding: &FieldBinding, value: Value) -> Result<Self> {
        let actual = value
            .kind()
            .map_or_else(|| "null".to_string(), |kind| kind.to_string());
        Self::from_value(value).ok_or_else(|| MappingError::ValueKindMismatch {
            field: binding.field.clone(),
            expected: Self::kind(),
            actual,
        })
    }
}

macro_rules! scalar_field_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl FieldValue for $ty {
                fn kind() -> ValueKind {
                    ValueKind::$variant
                }

                #[allow(clippy::clone_on_copy)]
                fn to_value(&self) -> Value {
                    Value::$variant(self.clone())
                }

                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::$variant(inner) => Some(inner),
                        Value::Null => Some(Self::default()),
                        _ => None,
                    }
                }
            }
        )*
    };
}

scalar_field_value! {
    String => String,
    i32 => Integer,
    i64 => Long,
    f64 => Double,
    f32 => Float,
    i16 => Short,
    char => Char,
    bool => Boolean,
    CalendarDate => CalendarDate,
    Timestamp => Timestamp,
    SqlDate => SqlDate,
    NaiveDate => LocalDate,
    NaiveDateTime => LocalDateTime,
    GenericValue => Generic,
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn kind() -> ValueKind {
        T::kind()
    }

    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, FieldValue::to_value)
    }

    fn from_value(value: Value) -> Option<Self> {
        if value.is_null() {
            return Some(None);
        }
        T::from_value(value).map(Some)
    }
}
