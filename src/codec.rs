//! On-disk representation of the task collection: a JSON array of records.

use crate::error::{Result, TickError};
use crate::model::Task;

/// Parse backing-file contents into a task collection.
///
/// Fails with a format error when the input is not a JSON array of records,
/// when any record is missing a required field, or when a field has the
/// wrong value kind. Takes raw bytes so undecodable content of any sort,
/// including invalid UTF-8, surfaces as the same format error.
pub fn decode(raw: &[u8]) -> Result<Vec<Task>> {
    serde_json::from_slice(raw).map_err(TickError::Format)
}

/// Serialize a collection to its canonical on-disk form.
///
/// Deterministic: stable field order, two-space indentation, trailing
/// newline. `decode(encode(c))` returns a collection value-equal to `c`.
pub fn encode(tasks: &[Task]) -> Result<String> {
    let mut out = serde_json::to_string_pretty(tasks)?;
    out.push('\n');
    Ok(out)
}
