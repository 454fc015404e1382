//! Date/time format patterns.
//!
//! Bindings declare patterns in the `yyyy-MM-dd` letter style. They are
//! translated to chrono strftime specifiers; a pattern that already
//! contains `%` is taken as strftime and used verbatim.

use std::fmt::Write;

use chrono::format::{Fixed, Item, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// Reasons a format pattern cannot be compiled or applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("unknown pattern letter '{0}'")]
    UnknownLetter(char),
    #[error("unsupported width {width} for pattern letter '{letter}'")]
    UnsupportedWidth { letter: char, width: usize },
    #[error("unterminated quoted literal")]
    UnterminatedQuote,
    #[error("invalid strftime specifier")]
    InvalidSpecifier,
    #[error("time zone fields cannot be applied to local date/time values")]
    ZoneField,
    #[error("pattern cannot render this value")]
    Unrenderable,
}

/// A compiled format pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    strftime: String,
}

impl DatePattern {
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        let strftime = if pattern.contains('%') {
            pattern.to_string()
        } else {
            translate(pattern)?
        };
        for item in StrftimeItems::new(&strftime) {
            match item {
                Item::Error => return Err(PatternError::InvalidSpecifier),
                Item::Fixed(fixed) if is_zone_field(&fixed) => {
                    return Err(PatternError::ZoneField);
                }
                _ => {}
            }
        }
        Ok(Self { strftime })
    }

    pub fn as_strftime(&self) -> &str {
        &self.strftime
    }

    /// Parse a date; patterns with time fields keep only the date part.
    pub fn parse_date(&self, raw: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(raw, &self.strftime)
            .ok()
            .or_else(|| {
                NaiveDateTime::parse_from_str(raw, &self.strftime)
                    .ok()
                    .map(|value| value.date())
            })
    }

    /// Parse a date-time; date-only patterns resolve to midnight.
    pub fn parse_date_time(&self, raw: &str) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(raw, &self.strftime)
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(raw, &self.strftime)
                    .ok()
                    .map(|date| date.and_time(NaiveTime::MIN))
            })
    }

    pub fn format(&self, value: NaiveDateTime) -> Result<String, PatternError> {
        let mut out = String::new();
        write!(out, "{}", value.format(&self.strftime)).map_err(|_| PatternError::Unrenderable)?;
        Ok(out)
    }
}

fn translate(pattern: &str) -> Result<String, PatternError> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut idx = 0;
    while idx < chars.len() {
        let ch = chars[idx];
        if ch == '\'' {
            idx = push_quoted(&chars, idx, &mut out)?;
            continue;
        }
        if ch.is_ascii_alphabetic() {
            let width = chars[idx..].iter().take_while(|c| **c == ch).count();
            // short fractions after a dot take any number of digits
            if ch == 'S' && width < 3 && out.ends_with('.') {
                out.pop();
                out.push_str("%.f");
            } else {
                out.push_str(specifier(ch, width)?);
            }
            idx += width;
            continue;
        }
        push_literal(&mut out, ch);
        idx += 1;
    }
    Ok(out)
}

/// Copies a quoted literal starting at `start` and returns the index after it.
fn push_quoted(chars: &[char], start: usize, out: &mut String) -> Result<usize, PatternError> {
    // '' outside a literal is an escaped quote
    if chars.get(start + 1) == Some(&'\'') {
        out.push('\'');
        return Ok(start + 2);
    }
    let mut idx = start + 1;
    loop {
        match chars.get(idx) {
            None => return Err(PatternError::UnterminatedQuote),
            Some('\'') if chars.get(idx + 1) == Some(&'\'') => {
                out.push('\'');
                idx += 2;
            }
            Some('\'') => return Ok(idx + 1),
            Some(&ch) => {
                push_literal(out, ch);
                idx += 1;
            }
        }
    }
}

fn push_literal(out: &mut String, ch: char) {
    if ch == '%' {
        out.push_str("%%");
    } else {
        out.push(ch);
    }
}

fn specifier(letter: char, width: usize) -> Result<&'static str, PatternError> {
    let spec = match (letter, width) {
        ('y', 2) => "%y",
        ('y', _) => "%Y",
        ('M', 1) => "%-m",
        ('M', 2) => "%m",
        ('M', 3) => "%b",
        ('M', _) => "%B",
        ('d', 1) => "%-d",
        ('d', _) => "%d",
        ('D', _) => "%j",
        ('H', 1) => "%-H",
        ('H', _) => "%H",
        ('h', 1) => "%-I",
        ('h', _) => "%I",
        ('m', 1) => "%-M",
        ('m', _) => "%M",
        ('s', 1) => "%-S",
        ('s', _) => "%S",
        ('S', 3) => "%3f",
        ('S', 6) => "%6f",
        ('S', 9) => "%9f",
        ('S', _) => return Err(PatternError::UnsupportedWidth { letter, width }),
        ('a', _) => "%p",
        ('E', 1..=3) => "%a",
        ('E', _) => "%A",
        ('z' | 'Z' | 'X', _) => return Err(PatternError::ZoneField),
        _ => return Err(PatternError::UnknownLetter(letter)),
    };
    Ok(spec)
}

fn is_zone_field(fixed: &Fixed) -> bool {
    matches!(
        fixed,
        Fixed::TimezoneName
            | Fixed::TimezoneOffset
            | Fixed::TimezoneOffsetColon
            | Fixed::TimezoneOffsetDoubleColon
            | Fixed::TimezoneOffsetTripleColon
            | Fixed::TimezoneOffsetColonZ
            | Fixed::TimezoneOffsetZ
            | Fixed::RFC2822
            | Fixed::RFC3339
    )
}
