//! Serialization of channel sets back to the DVBv5 channel-file format

use crate::channel::ChannelSet;
use crate::error::Result;
use std::fs;
use std::path::Path;

/// Format a channel set as channel-file text.
///
/// Each channel emits its `[NAME]` header, its fields in order, and a blank
/// separator line; one extra blank line follows the last channel.
pub fn format_channels(channels: &ChannelSet) -> String {
    let mut lines: Vec<String> = Vec::new();

    for (_, record) in channels.iter() {
        lines.push(format!("[{}]", record.name));
        for (key, value) in &record.fields {
            lines.push(format!("\t{key} = {value}"));
        }
        lines.push(String::new());
    }
    lines.push(String::new());

    lines.join("\n")
}

/// Format a channel set and write it to a file, replacing any previous
/// contents
pub fn write_file<P: AsRef<Path>>(channels: &ChannelSet, path: P) -> Result<()> {
    fs::write(path, format_channels(channels))?;
    Ok(())
}
