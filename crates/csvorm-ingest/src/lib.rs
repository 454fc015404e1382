//! CSV collaborators for the csvorm mapping engine.
//!
//! This crate reads CSV text into string tables, writes column-major tables
//! back out, loads schema files for runtime record types, and exposes the
//! record-level operations built on the mapping engine.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use csvorm_ingest::{read_table, write_table_with_columns};
//! use csvorm_model::HeaderOption;
//!
//! let users: Vec<User> = read_table(Path::new("users.csv"), HeaderOption::WithHeader)?;
//! write_table_with_columns(&users, Path::new("out.csv"), &["name", "dob"], HeaderOption::WithHeader)?;
//! ```

mod csv;
mod error;
mod options;
mod records;
mod schema;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading and Writing ===
pub use self::csv::{read_csv, read_csv_path, write_csv, write_csv_path};

// === Options ===
pub use options::{DEFAULT_DELIMITER, ReadOptions, WriteOptions};

// === Record Operations ===
pub use records::{
    read_dynamic, read_table, read_table_from, write_dynamic, write_table,
    write_table_to, write_table_with_columns,
};

// === Schema Files ===
pub use schema::{SchemaColumn, SchemaFile, load_schema, parse_schema};
