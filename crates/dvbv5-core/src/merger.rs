//! Merge engine for reconciling a previous channel file with a fresh scan
//!
//! The fresh scan is authoritative for which channels exist; the previous
//! file only supplies stream PIDs for channels that were off-air while
//! scanning and therefore lost them.

use crate::channel::ChannelSet;
use crate::error::Result;
use crate::parser::parse_file;
use std::path::Path;

/// Fields backfilled from the previous file when absent from the scan
pub const BACKFILL_FIELDS: [&str; 2] = ["VIDEO_PID", "AUDIO_PID"];

/// Merge a previous set into a freshly scanned set.
///
/// Output order is the scan's order. Channels absent from the scan are
/// dropped; fields present in the scan are never overwritten. Backfilled
/// fields are appended after the scan record's existing fields.
pub fn merge(previous: &ChannelSet, scan: &ChannelSet) -> ChannelSet {
    let mut merged = ChannelSet::new();

    for (key, record) in scan.iter() {
        let mut record = record.clone();

        if let Some(known) = previous.get(key) {
            for field in BACKFILL_FIELDS {
                if !record.has_field(field) {
                    if let Some(value) = known.field(field) {
                        record.set_field(field, value);
                    }
                }
            }
        }

        merged.insert(record);
    }

    merged
}

/// Parse both files and merge them
pub fn merge_files<P: AsRef<Path>>(previous: P, input: P) -> Result<ChannelSet> {
    let previous = parse_file(previous)?;
    let scan = parse_file(input)?;

    Ok(merge(&previous, &scan))
}
