//! Core types for representing DVBv5 channel data

use indexmap::IndexMap;

/// Field name holding the delivery system (e.g., DVBT2)
pub const DELIVERY_SYSTEM: &str = "DELIVERY_SYSTEM";
/// Field name holding the tuning frequency
pub const FREQUENCY: &str = "FREQUENCY";

/// Identity of a channel: display name plus the transponder it lives on.
///
/// Two records are the same channel only if the full tuple matches; the same
/// name at a different frequency or delivery system is a distinct channel
/// (a channel that moved, or one broadcast on multiple transponders).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelKey {
    /// Display name from the section header
    pub name: String,
    /// DELIVERY_SYSTEM field value, if the record has one
    pub delivery_system: Option<String>,
    /// FREQUENCY field value, if the record has one
    pub frequency: Option<String>,
}

/// A single channel block: its display name and its fields in file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelRecord {
    /// Display name, kept verbatim for header reconstruction
    pub name: String,
    /// Field name -> value, preserving first-insertion order
    pub fields: IndexMap<String, String>,
}

impl ChannelRecord {
    /// Create a new empty record
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: IndexMap::new(),
        }
    }

    /// Set a field value. A new field is appended after all existing fields;
    /// an existing field keeps its position and takes the new value.
    pub fn set_field(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Get a field value by name
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Check whether a field is present
    pub fn has_field(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Get the number of fields
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Derive the channel key from the name and tuning fields
    pub fn key(&self) -> ChannelKey {
        ChannelKey {
            name: self.name.clone(),
            delivery_system: self.fields.get(DELIVERY_SYSTEM).cloned(),
            frequency: self.fields.get(FREQUENCY).cloned(),
        }
    }
}

/// An ordered set of channels keyed by [`ChannelKey`]
///
/// Insertion order governs output order. Keys are unique: re-inserting an
/// existing key replaces the record but keeps the original position
/// (last-write-wins within one parse pass).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelSet {
    channels: IndexMap<ChannelKey, ChannelRecord>,
}

impl ChannelSet {
    /// Create a new empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its derived key, replacing any previous record
    /// with the same key
    pub fn insert(&mut self, record: ChannelRecord) {
        self.channels.insert(record.key(), record);
    }

    /// Get a record by key
    pub fn get(&self, key: &ChannelKey) -> Option<&ChannelRecord> {
        self.channels.get(key)
    }

    /// Check whether a key is present
    pub fn contains_key(&self, key: &ChannelKey) -> bool {
        self.channels.contains_key(key)
    }

    /// Get the number of channels
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Check whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Iterate channels in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&ChannelKey, &ChannelRecord)> {
        self.channels.iter()
    }

    /// Find the first record with the given display name, regardless of
    /// delivery system or frequency
    pub fn find_by_name(&self, name: &str) -> Option<&ChannelRecord> {
        self.channels.values().find(|r| r.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_derivation() {
        let mut record = ChannelRecord::new("BBC ONE");
        record.set_field(DELIVERY_SYSTEM, "DVBT2");
        record.set_field(FREQUENCY, "650000000");

        let key = record.key();
        assert_eq!(key.name, "BBC ONE");
        assert_eq!(key.delivery_system.as_deref(), Some("DVBT2"));
        assert_eq!(key.frequency.as_deref(), Some("650000000"));
    }

    #[test]
    fn test_key_with_missing_tuning_fields() {
        let record = ChannelRecord::new("BBC ONE");
        let key = record.key();

        assert_eq!(key.name, "BBC ONE");
        assert_eq!(key.delivery_system, None);
        assert_eq!(key.frequency, None);
    }

    #[test]
    fn test_same_name_different_frequency_is_distinct() {
        let mut a = ChannelRecord::new("BBC ONE");
        a.set_field(FREQUENCY, "650000000");
        let mut b = ChannelRecord::new("BBC ONE");
        b.set_field(FREQUENCY, "658000000");

        assert_ne!(a.key(), b.key());

        let mut set = ChannelSet::new();
        set.insert(a);
        set.insert(b);
        assert_eq!(set.channel_count(), 2);
    }

    #[test]
    fn test_set_field_overwrites_in_place() {
        let mut record = ChannelRecord::new("CH");
        record.set_field("SERVICE_ID", "1");
        record.set_field("VIDEO_PID", "101");
        record.set_field("SERVICE_ID", "2");

        let keys: Vec<&str> = record.fields.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["SERVICE_ID", "VIDEO_PID"]);
        assert_eq!(record.field("SERVICE_ID"), Some("2"));
    }

    #[test]
    fn test_set_insert_last_write_wins() {
        let mut first = ChannelRecord::new("CH");
        first.set_field("VIDEO_PID", "101");
        let mut second = ChannelRecord::new("CH");
        second.set_field("VIDEO_PID", "999");

        let mut set = ChannelSet::new();
        set.insert(first);
        set.insert(second);

        assert_eq!(set.channel_count(), 1);
        let record = set.find_by_name("CH").unwrap();
        assert_eq!(record.field("VIDEO_PID"), Some("999"));
    }
}
