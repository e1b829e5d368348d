//! A single key/value record.
//!
//! An `Entry` owns copies of the caller's key and value bytes plus the
//! cached full digest of its key (the fingerprint). Chain walks compare
//! fingerprints before key bytes; the table refreshes the fingerprint
//! whenever it files the entry, so a pre-built entry needs no knowledge of
//! the destination table's hasher or seed.

use crate::error::TableError;

/// One key/value pair, as stored in a bucket chain.
#[derive(Debug)]
pub struct Entry {
    key: Vec<u8>,
    value: Vec<u8>,
    fingerprint: u128,
}

impl Entry {
    /// Build an entry by copying `key` and `value`. Both may be empty;
    /// empty slices are valid degenerate keys and values.
    ///
    /// Fails with [`TableError::Alloc`] if either buffer cannot be
    /// reserved.
    pub fn new(key: &[u8], value: &[u8]) -> Result<Self, TableError> {
        Ok(Entry {
            key: copy_bytes(key)?,
            value: copy_bytes(value)?,
            fingerprint: 0,
        })
    }

    /// The key bytes.
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// The value bytes.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    pub(crate) fn fingerprint(&self) -> u128 {
        self.fingerprint
    }

    pub(crate) fn set_fingerprint(&mut self, fingerprint: u128) {
        self.fingerprint = fingerprint;
    }

    /// Swap in a new value buffer, returning the old one.
    pub(crate) fn replace_value(&mut self, value: Vec<u8>) -> Vec<u8> {
        core::mem::replace(&mut self.value, value)
    }

    pub(crate) fn into_value(self) -> Vec<u8> {
        self.value
    }
}

fn copy_bytes(src: &[u8]) -> Result<Vec<u8>, TableError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(src.len())?;
    buf.extend_from_slice(src);
    Ok(buf)
}
