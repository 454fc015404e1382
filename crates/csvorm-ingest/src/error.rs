//! Error types for table reading and writing.

use std::path::PathBuf;

use csvorm_map::MappingError;
use thiserror::Error;

/// Errors that can occur while moving records in and out of CSV.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open a file for reading.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create a file for writing.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Errors ===
    /// Failed to parse a CSV file.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to emit a CSV file.
    #[error("failed to write CSV {path}: {source}")]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// CSV failure on a caller-supplied reader or writer.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O failure on a caller-supplied writer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Schema Errors ===
    /// Failed to read a schema file.
    #[error("failed to read schema {path}: {source}")]
    SchemaRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Schema text is not valid.
    #[error("invalid schema {origin}: {source}")]
    SchemaParse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    // === Mapping Errors ===
    #[error(transparent)]
    Mapping(#[from] MappingError),
}

/// Result type for ingest operations.
pub type Result<T> = std::result::Result<T, IngestError>;
