//! Parser for the line-oriented DVBv5 channel-file format
//!
//! One channel per block: a `[NAME]` section header, zero or more
//! tab-indented `KEY = VALUE` lines, and a blank line that commits the block.

use crate::channel::{ChannelRecord, ChannelSet};
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Parse a channel file into a ChannelSet
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ChannelSet> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_content(&content, path)
}

/// Parse channel data from a string (useful for testing)
pub fn parse_str(content: &str, source_name: &str) -> Result<ChannelSet> {
    parse_content(content, Path::new(source_name))
}

fn parse_content(content: &str, path: &Path) -> Result<ChannelSet> {
    let mut channels = ChannelSet::new();
    let mut current: Option<ChannelRecord> = None;

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim_end();

        if let Some(rest) = line.strip_prefix('[') {
            // A new header discards any block still open without its
            // terminating blank line; commits happen only on blank lines.
            match rest.strip_suffix(']') {
                Some(name) => current = Some(ChannelRecord::new(name)),
                None => return Err(invalid_line(path, idx, raw)),
            }
        } else if line.is_empty() {
            if let Some(record) = current.take() {
                channels.insert(record);
            }
        } else if let Some(rest) = line.strip_prefix('\t') {
            // VALUE may itself contain '='; only the first " = " separates
            let Some((key, value)) = rest.split_once(" = ") else {
                return Err(invalid_line(path, idx, raw));
            };
            if let Some(record) = current.as_mut() {
                record.set_field(key, value);
            }
        } else {
            return Err(invalid_line(path, idx, raw));
        }
    }

    // Files without a trailing blank line still commit their last block
    if let Some(record) = current.take() {
        channels.insert(record);
    }

    Ok(channels)
}

fn invalid_line(path: &Path, idx: usize, raw: &str) -> Error {
    Error::InvalidLine {
        path: path.to_path_buf(),
        line: idx + 1,
        content: raw.to_string(),
    }
}
