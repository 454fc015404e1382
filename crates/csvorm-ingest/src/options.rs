//! Read and write settings.

use csvorm_model::HeaderOption;

/// Field delimiter used when none is given.
pub const DEFAULT_DELIMITER: u8 = b',';

/// Settings for reading a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    pub header: HeaderOption,
    pub delimiter: u8,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            header: HeaderOption::WithHeader,
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl ReadOptions {
    pub fn new(header: HeaderOption) -> Self {
        Self {
            header,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Settings for writing a table.
///
/// Without `columns`, columns follow declared positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    pub header: HeaderOption,
    pub delimiter: u8,
    pub columns: Option<Vec<String>>,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            header: HeaderOption::WithHeader,
            delimiter: DEFAULT_DELIMITER,
            columns: None,
        }
    }
}

impl WriteOptions {
    pub fn new(header: HeaderOption) -> Self {
        Self {
            header,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }
}
