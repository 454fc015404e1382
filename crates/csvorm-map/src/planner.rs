//! Column order for written tables.

use std::collections::HashSet;

use csvorm_model::{ColumnPlan, FieldBinding, RecordType};
use tracing::debug;

use crate::error::{MappingError, Result};

/// True when the positions are exactly `{0, ..., n-1}` with no repeats.
pub fn is_complete_permutation(bindings: &[FieldBinding]) -> bool {
    let mut seen = HashSet::with_capacity(bindings.len());
    bindings.iter().all(|binding| {
        binding
            .column_position
            .is_some_and(|pos| pos < bindings.len() && seen.insert(pos))
    })
}

/// Order columns by declared position.
///
/// Positions that are not a complete permutation leave the declaration
/// order unchanged.
pub fn plan_by_position(bindings: &[FieldBinding]) -> ColumnPlan<'_> {
    let mut columns: Vec<&FieldBinding> = bindings.iter().collect();
    if is_complete_permutation(bindings) {
        columns.sort_by_key(|binding| binding.column_position);
    } else {
        debug!(
            bindings = bindings.len(),
            "positions are not a complete permutation; using declaration order"
        );
    }
    ColumnPlan::new(columns)
}

/// Order columns by an explicit list of column names.
///
/// Blank entries are skipped. The first binding with a matching name is
/// used, and the list order is kept as given.
pub fn plan_by_names<'a, S: AsRef<str>>(
    record_type: &'a RecordType,
    names: &[S],
) -> Result<ColumnPlan<'a>> {
    let mut columns = Vec::with_capacity(names.len());
    for name in names.iter().map(AsRef::as_ref) {
        if name.trim().is_empty() {
            continue;
        }
        let binding = record_type
            .bindings
            .iter()
            .find(|binding| binding.named_column() == Some(name))
            .ok_or_else(|| MappingError::ColumnNotFound {
                column: name.to_string(),
                record_type: record_type.name.clone(),
            })?;
        columns.push(binding);
    }
    Ok(ColumnPlan::new(columns))
}
