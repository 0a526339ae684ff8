//! Semantic invariants not expressible via JSON Schema.

use std::collections::HashSet;

use crate::core::types::Record;

/// Check semantic invariants of a record set:
/// - No duplicate ids
///
/// Returns stable error messages (empty on success), in input order.
pub fn validate_invariants(records: &[Record]) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    for (index, record) in records.iter().enumerate() {
        if !seen.insert(record.id) {
            errors.push(format!("duplicate id {} at index {}", record.id, index));
        }
    }
    errors
}
