//! The hash table engine: bucket array, chain walks, resize, and the
//! load-factor policy.
//!
//! Buckets are owned growable chains (`Vec<Entry>`); the bucket for a key
//! is its full digest reduced modulo the bucket count. Every entry caches
//! that digest as a fingerprint, and chain walks compare fingerprints
//! before key bytes. Rehashing on resize refiles entries by their stored
//! fingerprint, so user key bytes are never re-digested once filed.
//!
//! The collision counter is lifetime-cumulative: it increments whenever an
//! insert lands in a non-empty bucket and is never decremented by removal.
//! The load factor is `collisions / bucket_count`; when an insert pushes it
//! over the configured ceiling (and autoresize is on), the bucket array
//! doubles until the factor is back under the ceiling.

use crate::config::{Builder, KeyLayout, TableConfig, ValueLayout};
use crate::entry::Entry;
use crate::error::TableError;
use crate::hash::HashProvider;

type Bucket = Vec<Entry>;

/// A seeded, chained hash table over byte-slice keys and values.
///
/// Single-threaded per instance: all mutation goes through `&mut self`,
/// and no internal locking exists. Wrap the table (and the process-wide
/// seed, if used) in external synchronization before sharing across
/// threads.
pub struct HashTable {
    buckets: Vec<Bucket>,
    len: usize,
    collisions: u64,
    load_factor: f64,
    config: TableConfig,
    hasher: Box<dyn HashProvider>,
}

impl HashTable {
    /// An empty table with the default configuration: 64 buckets,
    /// autoresize on, variable layouts, the process-wide seed, and the
    /// x64_128 hasher.
    pub fn new() -> Self {
        let config = TableConfig::default();
        let mut buckets = Vec::new();
        buckets.resize_with(config.initial_buckets, Bucket::new);
        HashTable {
            buckets,
            len: 0,
            collisions: 0,
            load_factor: 0.0,
            hasher: crate::hash::HashKind::default().provider(),
            config,
        }
    }

    /// Start building a table with a non-default configuration.
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Validate `config` and allocate the empty bucket array.
    pub fn with_config(config: TableConfig) -> Result<Self, TableError> {
        Self::from_parts(config, crate::hash::HashKind::default().provider())
    }

    pub(crate) fn from_parts(
        config: TableConfig,
        hasher: Box<dyn HashProvider>,
    ) -> Result<Self, TableError> {
        config.validate()?;
        let mut buckets = Vec::new();
        buckets.try_reserve_exact(config.initial_buckets)?;
        buckets.resize_with(config.initial_buckets, Bucket::new);
        Ok(HashTable {
            buckets,
            len: 0,
            collisions: 0,
            load_factor: 0.0,
            config,
            hasher,
        })
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current size of the bucket array.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Lifetime count of inserts that landed in a non-empty bucket.
    pub fn collisions(&self) -> u64 {
        self.collisions
    }

    /// `collisions / bucket_count`, the quantity compared against the
    /// configured ceiling after each insert.
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    pub fn max_load_factor(&self) -> f64 {
        self.config.max_load_factor
    }

    fn digest(&self, key: &[u8]) -> u128 {
        self.hasher.digest(key, self.config.seed.current())
    }

    fn slot(&self, fingerprint: u128) -> usize {
        (fingerprint % self.buckets.len() as u128) as usize
    }

    fn check_layout(&self, key_len: usize, value_len: usize) -> Result<(), TableError> {
        if let KeyLayout::Fixed(expected) = self.config.key_layout {
            if key_len != expected {
                return Err(TableError::KeySize {
                    expected,
                    got: key_len,
                });
            }
        }
        if let ValueLayout::Fixed(expected) = self.config.value_layout {
            if value_len != expected {
                return Err(TableError::ValueSize {
                    expected,
                    got: value_len,
                });
            }
        }
        Ok(())
    }

    fn recompute_load_factor(&mut self) {
        self.load_factor = self.collisions as f64 / self.buckets.len() as f64;
    }

    /// Insert a key/value pair, copying both buffers.
    ///
    /// If the key is already present its value is replaced and the old
    /// value returned; the entry count does not change. Fresh inserts
    /// return `Ok(None)` and may grow the bucket array when the load
    /// factor crosses the ceiling. If that growth step fails to allocate,
    /// the error is reported but the new entry is already filed and the
    /// table remains fully consistent.
    pub fn insert(&mut self, key: &[u8], value: &[u8]) -> Result<Option<Vec<u8>>, TableError> {
        self.check_layout(key.len(), value.len())?;
        let entry = Entry::new(key, value)?;
        self.insert_entry(entry)
    }

    /// File a pre-built [`Entry`] directly, without copying its buffers.
    /// Replacement semantics match [`HashTable::insert`].
    pub fn insert_entry(&mut self, mut entry: Entry) -> Result<Option<Vec<u8>>, TableError> {
        self.check_layout(entry.key().len(), entry.value().len())?;
        entry.set_fingerprint(self.digest(entry.key()));

        let idx = self.slot(entry.fingerprint());
        let bucket = &mut self.buckets[idx];
        if let Some(existing) = bucket
            .iter_mut()
            .find(|e| e.fingerprint() == entry.fingerprint() && e.key() == entry.key())
        {
            let old = existing.replace_value(entry.into_value());
            return Ok(Some(old));
        }

        bucket.try_reserve(1)?;
        let collided = !bucket.is_empty();
        bucket.push(entry);
        self.len += 1;
        if collided {
            self.collisions += 1;
        }
        self.recompute_load_factor();

        if self.config.autoresize {
            while self.load_factor > self.config.max_load_factor {
                let next = self.buckets.len().saturating_mul(2);
                self.resize(next)?;
            }
        }
        Ok(None)
    }

    /// Borrow the value stored for `key`. Never allocates; the borrow ends
    /// before any subsequent mutation can run.
    pub fn get(&self, key: &[u8]) -> Option<&[u8]> {
        let fp = self.digest(key);
        self.buckets[self.slot(fp)]
            .iter()
            .find(|e| e.fingerprint() == fp && e.key() == key)
            .map(|e| e.value())
    }

    /// Whether `key` is present.
    pub fn contains(&self, key: &[u8]) -> bool {
        self.get(key).is_some()
    }

    /// Detach the entry for `key` and return its value. Absent keys are a
    /// no-op, not an error.
    pub fn remove(&mut self, key: &[u8]) -> Option<Vec<u8>> {
        let fp = self.digest(key);
        let idx = self.slot(fp);
        let bucket = &mut self.buckets[idx];
        let pos = bucket
            .iter()
            .position(|e| e.fingerprint() == fp && e.key() == key)?;
        let entry = bucket.swap_remove(pos);
        self.len -= 1;
        self.recompute_load_factor();
        Some(entry.into_value())
    }

    /// Collect a borrowed view of every live key. Order is unspecified
    /// and may change across any mutation.
    pub fn keys(&self) -> Vec<&[u8]> {
        self.buckets
            .iter()
            .flat_map(|b| b.iter().map(Entry::key))
            .collect()
    }

    /// Iterate over `(key, value)` pairs in unspecified order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            outer: self.buckets.iter(),
            inner: [].iter(),
        }
    }

    /// Drop every entry, keeping the bucket array at its current size.
    /// The collision statistic restarts with the now-empty population.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
        self.collisions = 0;
        self.recompute_load_factor();
    }

    /// The bucket `key` currently hashes to. Diagnostic only; the mapping
    /// changes across resize and reseed.
    pub fn bucket_index(&self, key: &[u8]) -> usize {
        self.slot(self.digest(key))
    }

    /// Rebuild the bucket array at `new_buckets` and refile every entry by
    /// its fingerprint modulo the new size. Shrinking is allowed and may
    /// lengthen chains. On allocation failure the old array is untouched
    /// and every entry stays reachable.
    pub fn resize(&mut self, new_buckets: usize) -> Result<(), TableError> {
        if new_buckets == 0 {
            return Err(TableError::ZeroBuckets);
        }
        let mut fresh: Vec<Bucket> = Vec::new();
        fresh.try_reserve_exact(new_buckets)?;
        fresh.resize_with(new_buckets, Bucket::new);

        #[cfg(feature = "logging")]
        let old_buckets = self.buckets.len();

        for bucket in &mut self.buckets {
            for entry in bucket.drain(..) {
                let idx = (entry.fingerprint() % new_buckets as u128) as usize;
                fresh[idx].push(entry);
            }
        }
        self.buckets = fresh;
        self.recompute_load_factor();

        #[cfg(feature = "logging")]
        log::trace!(
            "bucket array rebuilt: {} -> {} buckets, {} entries",
            old_buckets,
            new_buckets,
            self.len
        );
        Ok(())
    }
}

impl Default for HashTable {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a HashTable {
    type Item = (&'a [u8], &'a [u8]);
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Iterator over `(key, value)` pairs of a table.
pub struct Iter<'a> {
    outer: core::slice::Iter<'a, Bucket>,
    inner: core::slice::Iter<'a, Entry>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a [u8], &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(e) = self.inner.next() {
                return Some((e.key(), e.value()));
            }
            self.inner = self.outer.next()?.iter();
        }
    }
}
