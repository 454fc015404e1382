//! Row and table shapes exchanged with the table reader and writer.

use std::collections::HashMap;

use crate::FieldBinding;

/// A table as produced by the table reader.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    /// Header row, when the source has one.
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn new(headers: Option<Vec<String>>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Name to position index for the header row.
    pub fn header_index(&self) -> Option<HeaderIndex> {
        self.headers.as_deref().map(HeaderIndex::from_headers)
    }
}

/// Name to position map built once per table from its header row.
///
/// Lookup is case-sensitive. When a name repeats, the last occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderIndex {
    positions: HashMap<String, usize>,
}

impl HeaderIndex {
    pub fn from_headers<S: AsRef<str>>(headers: &[S]) -> Self {
        let positions = headers
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.as_ref().to_string(), idx))
            .collect();
        Self { positions }
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// One data row, borrowed from its table.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    cells: &'a [String],
    index: Option<&'a HeaderIndex>,
}

impl<'a> Row<'a> {
    pub fn new(cells: &'a [String], index: Option<&'a HeaderIndex>) -> Self {
        Self { cells, index }
    }

    pub fn get(&self, position: usize) -> Option<&'a str> {
        self.cells.get(position).map(String::as_str)
    }

    /// Header position of `name`; `None` without a header or when unmapped.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.index.and_then(|index| index.position(name))
    }

    pub fn has_header(&self) -> bool {
        self.index.is_some()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Left-to-right column layout for a write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnPlan<'a> {
    columns: Vec<&'a FieldBinding>,
}

impl<'a> ColumnPlan<'a> {
    pub fn new(columns: Vec<&'a FieldBinding>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[&'a FieldBinding] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Field identifiers in column order.
    pub fn fields(&self) -> Vec<&'a str> {
        self.columns
            .iter()
            .map(|binding| binding.field.as_str())
            .collect()
    }
}

/// Encoded cells stored column by column.
///
/// When the table was built with a header, each column's first entry is
/// its header label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMajorTable {
    columns: Vec<Vec<Option<String>>>,
}

impl ColumnMajorTable {
    pub fn with_width(width: usize) -> Self {
        Self {
            columns: vec![Vec::new(); width],
        }
    }

    /// Append a cell to column `column`.
    ///
    /// # Panics
    ///
    /// Panics if `column` is outside the table width.
    pub fn push(&mut self, column: usize, cell: Option<String>) {
        self.columns[column].push(cell);
    }

    pub fn columns(&self) -> &[Vec<Option<String>>] {
        &self.columns
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows, header included.
    pub fn height(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// Transpose into physical rows; absent cells become empty strings.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        (0..self.height())
            .map(|row| {
                self.columns
                    .iter()
                    .map(|column| column.get(row).cloned().flatten().unwrap_or_default())
                    .collect()
            })
            .collect()
    }
}
