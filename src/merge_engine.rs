use std::collections::HashMap;

use crate::string_record::{CompositeKey, MergedRecord, StringRecord};

// @module: Composite-key join of original and translated string tables

/// Merge an original string table with a translated one.
///
/// The join works in three passes:
/// 1. Every original record claims a translation slot under its composite
///    key, initialized to the empty string. Duplicate keys overwrite the
///    slot (last-write-wins, no error).
/// 2. Every translated record whose key has a slot overwrites that slot
///    with its text, empty strings included. Translated records without a
///    matching original are silently dropped.
/// 3. The original table is walked again in input order; each record whose
///    slot holds a non-empty translation emits one merged record. Duplicate
///    original keys therefore emit once per occurrence, so the output
///    preserves the original table's cardinality and order.
///
/// Inputs are not mutated.
pub fn merge(original: &[StringRecord], translated: &[StringRecord]) -> Vec<MergedRecord> {
    let mut slots: HashMap<CompositeKey, String> = HashMap::with_capacity(original.len());

    for record in original {
        slots.insert(record.key(), String::new());
    }

    for record in translated {
        if let Some(slot) = slots.get_mut(&record.key()) {
            slot.clone_from(&record.string);
        }
    }

    let mut merged = Vec::new();
    for record in original {
        if let Some(translation) = slots.get(&record.key()) {
            if !translation.is_empty() {
                merged.push(MergedRecord {
                    editor_id: record.editor_id.clone(),
                    record_type: record.record_type.clone(),
                    original: record.string.clone(),
                    string: translation.clone(),
                    index: record.index,
                });
            }
        }
    }

    merged
}
