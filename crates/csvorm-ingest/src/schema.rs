//! JSON schema files describing record types at runtime.
//!
//! ```json
//! {
//!   "name": "User",
//!   "columns": [
//!     { "field": "name", "name": "name", "pos": 0, "type": "string" },
//!     { "field": "dob", "pos": 2, "type": "local_date", "format": "yyyy-MM-dd" }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use csvorm_model::{FieldBinding, RecordType, ValueKind};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{IngestError, Result};

/// A record type as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaFile {
    pub name: String,
    /// Mapping-target marker; schema files are targets unless they opt out.
    #[serde(default = "default_entity")]
    pub entity: bool,
    pub columns: Vec<SchemaColumn>,
}

/// One bound field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaColumn {
    pub field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<usize>,
    /// Type name, e.g. `integer`, `i64`, `local_date`.
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub readonly: bool,
}

fn default_entity() -> bool {
    true
}

impl SchemaFile {
    pub fn into_record_type(self) -> RecordType {
        let bindings = self
            .columns
            .into_iter()
            .map(SchemaColumn::into_binding)
            .collect();
        RecordType {
            name: self.name,
            mapping_target: self.entity,
            bindings,
        }
    }

    pub fn from_record_type(record_type: &RecordType) -> Self {
        Self {
            name: record_type.name.clone(),
            entity: record_type.mapping_target,
            columns: record_type
                .bindings
                .iter()
                .map(SchemaColumn::from_binding)
                .collect(),
        }
    }
}

impl SchemaColumn {
    fn into_binding(self) -> FieldBinding {
        FieldBinding {
            kind: ValueKind::from_type_name(&self.type_name),
            field: self.field,
            column_name: self.name,
            column_position: self.pos,
            format_pattern: self.format,
            required: self.required,
            assignable: !self.readonly,
        }
    }

    fn from_binding(binding: &FieldBinding) -> Self {
        Self {
            field: binding.field.clone(),
            name: binding.column_name.clone(),
            pos: binding.column_position,
            type_name: binding.kind.as_str().to_string(),
            format: binding.format_pattern.clone(),
            required: binding.required,
            readonly: !binding.assignable,
        }
    }
}

/// Parse schema JSON into a record type.
pub fn parse_schema(text: &str) -> Result<RecordType> {
    parse_schema_from(text, "<inline>")
}

/// Load a schema file into a record type.
pub fn load_schema(path: &Path) -> Result<RecordType> {
    let text = fs::read_to_string(path).map_err(|source| IngestError::SchemaRead {
        path: path.to_path_buf(),
        source,
    })?;
    let record_type = parse_schema_from(&text, &path.display().to_string())?;
    debug!(
        path = %path.display(),
        record_type = %record_type.name,
        columns = record_type.bindings.len(),
        "loaded schema"
    );
    Ok(record_type)
}

fn parse_schema_from(text: &str, origin: &str) -> Result<RecordType> {
    let schema: SchemaFile =
        serde_json::from_str(text).map_err(|source| IngestError::SchemaParse {
            origin: origin.to_string(),
            source,
        })?;
    Ok(schema.into_record_type())
}
