//! Binding extraction and validation.

use csvorm_model::{FieldBinding, HeaderOption, RecordType, ValueKind};
use tracing::debug;

use crate::codec::compile_pattern;
use crate::error::{MappingError, Result};

/// Bindings of a mapping target, in declaration order.
///
/// Kinds and format patterns are checked here once, so a malformed
/// descriptor fails before any row is converted.
pub fn resolve_bindings(record_type: &RecordType) -> Result<&[FieldBinding]> {
    if !record_type.mapping_target {
        return Err(MappingError::NotAMappingTarget {
            record_type: record_type.name.clone(),
        });
    }
    for binding in &record_type.bindings {
        if let ValueKind::Unsupported(type_name) = &binding.kind {
            return Err(MappingError::UnsupportedFieldType {
                field: binding.field.clone(),
                type_name: type_name.clone(),
            });
        }
        if binding.kind.is_temporal() {
            compile_pattern(binding)?;
        }
    }
    debug!(
        record_type = %record_type.name,
        bindings = record_type.bindings.len(),
        "resolved bindings"
    );
    Ok(&record_type.bindings)
}

/// Reject bindings the read path cannot assign.
pub fn check_assignable(bindings: &[FieldBinding]) -> Result<()> {
    match bindings.iter().find(|binding| !binding.assignable) {
        Some(binding) => Err(MappingError::NonAssignableField {
            field: binding.field.clone(),
        }),
        None => Ok(()),
    }
}

/// Check every binding can locate its column under `header`.
pub fn validate_bindings(bindings: &[FieldBinding], header: HeaderOption) -> Result<()> {
    for binding in bindings {
        let positioned = binding.column_position.is_some();
        match header {
            HeaderOption::WithoutHeader if !positioned => {
                return Err(MappingError::PositionRequired {
                    field: binding.field.clone(),
                });
            }
            HeaderOption::WithHeader if !positioned && binding.named_column().is_none() => {
                return Err(MappingError::NameOrPositionRequired {
                    field: binding.field.clone(),
                });
            }
            _ => {}
        }
    }
    Ok(())
}
