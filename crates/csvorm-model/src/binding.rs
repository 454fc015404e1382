//! Field bindings and record type descriptors.

use serde::{Deserialize, Serialize};

use crate::ValueKind;

/// Whether a table carries a header row naming its columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HeaderOption {
    /// First row names the columns.
    #[default]
    WithHeader,
    /// Every row is data; columns are addressed by position only.
    WithoutHeader,
}

impl HeaderOption {
    pub fn is_present(self) -> bool {
        matches!(self, HeaderOption::WithHeader)
    }
}

impl From<bool> for HeaderOption {
    fn from(present: bool) -> Self {
        if present {
            HeaderOption::WithHeader
        } else {
            HeaderOption::WithoutHeader
        }
    }
}

/// Declarative mapping of one record field to a table column.
///
/// The builder methods mirror the keys accepted by `#[column(...)]` in
/// `csv_entity!`, so `#[column(name = "dob", pos = 2, format = "yyyy-MM-dd")]`
/// becomes `FieldBinding::new("dob", kind).name("dob").pos(2).format("yyyy-MM-dd")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldBinding {
    /// Field identifier inside the record.
    pub field: String,
    /// Header name used to locate the column.
    pub column_name: Option<String>,
    /// 0-based column index.
    pub column_position: Option<usize>,
    /// Format pattern for temporal kinds, e.g. `yyyy-MM-dd`.
    pub format_pattern: Option<String>,
    /// Reading fails when a named column is absent from the header.
    pub required: bool,
    /// False for fields that cannot be written on the read path.
    pub assignable: bool,
    pub kind: ValueKind,
}

impl FieldBinding {
    pub fn new(field: impl Into<String>, kind: ValueKind) -> Self {
        Self {
            field: field.into(),
            column_name: None,
            column_position: None,
            format_pattern: None,
            required: false,
            assignable: true,
            kind,
        }
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.column_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn pos(mut self, position: usize) -> Self {
        self.column_position = Some(position);
        self
    }

    #[must_use]
    pub fn format(mut self, pattern: impl Into<String>) -> Self {
        self.format_pattern = Some(pattern.into());
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn readonly(mut self) -> Self {
        self.assignable = false;
        self
    }

    /// Column name when set and non-empty.
    pub fn named_column(&self) -> Option<&str> {
        self.column_name.as_deref().filter(|name| !name.is_empty())
    }

    /// Header cell written for this column.
    pub fn header_label(&self) -> &str {
        self.column_name.as_deref().unwrap_or("")
    }

    /// Format pattern when set and non-empty.
    pub fn pattern(&self) -> Option<&str> {
        self.format_pattern
            .as_deref()
            .filter(|pattern| !pattern.is_empty())
    }
}

/// Type-level descriptor of a record: its bindings and the mapping marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordType {
    pub name: String,
    /// True when the type is declared as a mapping target.
    pub mapping_target: bool,
    /// Bindings in declaration order.
    pub bindings: Vec<FieldBinding>,
}

impl RecordType {
    /// Descriptor for a type declared as a mapping target.
    pub fn entity(name: impl Into<String>, bindings: Vec<FieldBinding>) -> Self {
        Self {
            name: name.into(),
            mapping_target: true,
            bindings,
        }
    }

    /// Descriptor for a type that carries bindings but no marker.
    pub fn unmarked(name: impl Into<String>, bindings: Vec<FieldBinding>) -> Self {
        Self {
            name: name.into(),
            mapping_target: false,
            bindings,
        }
    }

    pub fn binding(&self, field: &str) -> Option<&FieldBinding> {
        self.bindings.iter().find(|binding| binding.field == field)
    }
}
