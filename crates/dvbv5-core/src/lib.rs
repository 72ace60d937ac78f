//! dvbv5-core: Core library for reconciling DVBv5 channel files
//!
//! This library provides functionality to:
//! - Parse DVBv5 channel files into ordered channel sets
//! - Merge a previous file with a fresh scan, backfilling video/audio PIDs
//!   for channels that were off-air while scanning
//! - Format channel sets back to the same file format

pub mod channel;
pub mod error;
pub mod formatter;
pub mod merger;
pub mod parser;

pub use channel::{ChannelKey, ChannelRecord, ChannelSet, DELIVERY_SYSTEM, FREQUENCY};
pub use error::{Error, Result};
pub use formatter::{format_channels, write_file};
pub use merger::{merge, merge_files, BACKFILL_FIELDS};
pub use parser::{parse_file, parse_str};
