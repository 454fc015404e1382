//! Typed scalar values produced by decoding a cell.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::ValueKind;

/// A date-time wrapped in a calendar container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(pub NaiveDateTime);

impl CalendarDate {
    pub fn new(date_time: NaiveDateTime) -> Self {
        Self(date_time)
    }

    /// Calendar positioned at midnight of `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::MIN))
    }

    pub fn date_time(&self) -> NaiveDateTime {
        self.0
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }
}

impl From<NaiveDateTime> for CalendarDate {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

/// An instant, stored as a UTC-naive date-time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub NaiveDateTime);

impl Timestamp {
    pub fn new(date_time: NaiveDateTime) -> Self {
        Self(date_time)
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::MIN))
    }

    pub fn date_time(&self) -> NaiveDateTime {
        self.0
    }

    /// Milliseconds since the Unix epoch.
    pub fn millis(&self) -> i64 {
        self.0.and_utc().timestamp_millis()
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

/// A calendar date with no time of day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SqlDate(pub NaiveDate);

impl SqlDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for SqlDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

/// Opaque text for fields declared with no specific scalar type.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GenericValue(pub String);

impl GenericValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GenericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A decoded cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    String(String),
    Integer(i32),
    Long(i64),
    Double(f64),
    Float(f32),
    Short(i16),
    Char(char),
    Boolean(bool),
    CalendarDate(CalendarDate),
    Timestamp(Timestamp),
    SqlDate(SqlDate),
    LocalDate(NaiveDate),
    LocalDateTime(NaiveDateTime),
    Generic(GenericValue),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Kind of the value, `None` for [`Value::Null`].
    pub fn kind(&self) -> Option<ValueKind> {
        let kind = match self {
            Value::Null => return None,
            Value::String(_) => ValueKind::String,
            Value::Integer(_) => ValueKind::Integer,
            Value::Long(_) => ValueKind::Long,
            Value::Double(_) => ValueKind::Double,
            Value::Float(_) => ValueKind::Float,
            Value::Short(_) => ValueKind::Short,
            Value::Char(_) => ValueKind::Char,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::CalendarDate(_) => ValueKind::CalendarDate,
            Value::Timestamp(_) => ValueKind::Timestamp,
            Value::SqlDate(_) => ValueKind::SqlDate,
            Value::LocalDate(_) => ValueKind::LocalDate,
            Value::LocalDateTime(_) => ValueKind::LocalDateTime,
            Value::Generic(_) => ValueKind::Generic,
        };
        Some(kind)
    }

    /// Date-time view of a temporal value; dates sit at midnight.
    pub fn as_date_time(&self) -> Option<NaiveDateTime> {
        match self {
            Value::CalendarDate(value) => Some(value.0),
            Value::Timestamp(value) => Some(value.0),
            Value::SqlDate(value) => Some(value.0.and_time(NaiveTime::MIN)),
            Value::LocalDate(value) => Some(value.and_time(NaiveTime::MIN)),
            Value::LocalDateTime(value) => Some(*value),
            _ => None,
        }
    }
}

/// Human-readable rendering; temporal values use ISO 8601.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::String(value) => f.write_str(value),
            Value::Integer(value) => write!(f, "{value}"),
            Value::Long(value) => write!(f, "{value}"),
            Value::Double(value) => write!(f, "{value}"),
            Value::Float(value) => write!(f, "{value}"),
            Value::Short(value) => write!(f, "{value}"),
            Value::Char(value) => write!(f, "{value}"),
            Value::Boolean(value) => write!(f, "{value}"),
            Value::CalendarDate(CalendarDate(value)) | Value::Timestamp(Timestamp(value)) => {
                write!(f, "{}", value.format("%Y-%m-%dT%H:%M:%S"))
            }
            Value::SqlDate(SqlDate(value)) | Value::LocalDate(value) => {
                write!(f, "{}", value.format("%Y-%m-%d"))
            }
            Value::LocalDateTime(value) => write!(f, "{}", value.format("%Y-%m-%dT%H:%M:%S")),
            Value::Generic(value) => write!(f, "{value}"),
        }
    }
}
