//! Construction-time configuration and the table builder.

use crate::error::TableError;
use crate::hash::{HashKind, HashProvider};
use crate::seed::Seed;
use crate::table::HashTable;

/// Bucket count a table starts with unless configured otherwise.
pub const INITIAL_BUCKETS: usize = 64;

/// Load-factor ceiling used by [`HashTable::new`].
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.05;

/// Key sizing discipline. `Fixed(n)` rejects any key whose length is not
/// exactly `n` bytes at insert time, catching misuse that a runtime flag
/// would let slide until lookup.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum KeyLayout {
    #[default]
    Variable,
    Fixed(usize),
}

/// Value sizing discipline, mirroring [`KeyLayout`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ValueLayout {
    #[default]
    Variable,
    Fixed(usize),
}

/// Everything a table needs to know at construction.
#[derive(Clone, Copy, Debug)]
pub struct TableConfig {
    /// Resize when `collisions / bucket_count` exceeds this. Must be
    /// finite and positive.
    pub max_load_factor: f64,
    /// Starting bucket count. Must be nonzero.
    pub initial_buckets: usize,
    pub key_layout: KeyLayout,
    pub value_layout: ValueLayout,
    /// Grow automatically after inserts that push the load factor over
    /// the ceiling. Disable to manage capacity manually via
    /// [`HashTable::resize`].
    pub autoresize: bool,
    pub seed: Seed,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
            initial_buckets: INITIAL_BUCKETS,
            key_layout: KeyLayout::Variable,
            value_layout: ValueLayout::Variable,
            autoresize: true,
            seed: Seed::Global,
        }
    }
}

impl TableConfig {
    pub(crate) fn validate(&self) -> Result<(), TableError> {
        if !self.max_load_factor.is_finite() || self.max_load_factor <= 0.0 {
            return Err(TableError::InvalidLoadFactor(self.max_load_factor));
        }
        if self.initial_buckets == 0 {
            return Err(TableError::ZeroBuckets);
        }
        Ok(())
    }
}

/// Fluent construction for [`HashTable`]. Obtain one via
/// [`HashTable::builder`].
///
/// ```
/// use bytetable::{HashTable, HashKind, Seed};
///
/// let table = HashTable::builder()
///     .max_load_factor(0.1)
///     .hash_kind(HashKind::X86_32)
///     .seed(Seed::Fixed(42))
///     .build()
///     .unwrap();
/// assert_eq!(table.bucket_count(), 64);
/// ```
pub struct Builder {
    config: TableConfig,
    provider: Option<Box<dyn HashProvider>>,
    kind: HashKind,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    pub fn new() -> Self {
        Builder {
            config: TableConfig::default(),
            provider: None,
            kind: HashKind::default(),
        }
    }

    pub fn max_load_factor(mut self, max: f64) -> Self {
        self.config.max_load_factor = max;
        self
    }

    pub fn initial_buckets(mut self, buckets: usize) -> Self {
        self.config.initial_buckets = buckets;
        self
    }

    pub fn key_layout(mut self, layout: KeyLayout) -> Self {
        self.config.key_layout = layout;
        self
    }

    pub fn value_layout(mut self, layout: ValueLayout) -> Self {
        self.config.value_layout = layout;
        self
    }

    pub fn autoresize(mut self, on: bool) -> Self {
        self.config.autoresize = on;
        self
    }

    pub fn seed(mut self, seed: Seed) -> Self {
        self.config.seed = seed;
        self
    }

    /// Select one of the built-in MurmurHash3 providers.
    pub fn hash_kind(mut self, kind: HashKind) -> Self {
        self.kind = kind;
        self.provider = None;
        self
    }

    /// Inject a custom provider, overriding [`Builder::hash_kind`].
    /// Deterministic stubs plug in here to force collisions in tests.
    pub fn hash_provider(mut self, provider: Box<dyn HashProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Validate the configuration and allocate the empty table.
    pub fn build(self) -> Result<HashTable, TableError> {
        let provider = self.provider.unwrap_or_else(|| self.kind.provider());
        HashTable::from_parts(self.config, provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: non-positive and non-finite load factors are rejected at
    /// the boundary, never clamped.
    #[test]
    fn invalid_load_factor_rejected() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = HashTable::builder().max_load_factor(bad).build();
            assert!(matches!(err, Err(TableError::InvalidLoadFactor(_))));
        }
    }

    /// Invariant: a zero starting bucket count is a configuration error.
    #[test]
    fn zero_initial_buckets_rejected() {
        let err = HashTable::builder().initial_buckets(0).build();
        assert!(matches!(err, Err(TableError::ZeroBuckets)));
    }

    /// Invariant: defaults produce an empty table at the documented
    /// initial size.
    #[test]
    fn default_build_shape() {
        let t = HashTable::builder().build().unwrap();
        assert_eq!(t.bucket_count(), INITIAL_BUCKETS);
        assert_eq!(t.len(), 0);
        assert!(t.is_empty());
        assert_eq!(t.collisions(), 0);
    }
}
