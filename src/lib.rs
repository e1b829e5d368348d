//! bytetable: an embeddable, seeded, chained hash table for
//! arbitrary-length binary keys and values.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small hash table engine usable as a building block inside
//!   larger systems (interpreters, caches, indexes), built in safe,
//!   verifiable layers so each piece can be reasoned about independently.
//! - Layers:
//!   - hash: the `HashProvider` capability (one method, `digest`) with
//!     three built-in MurmurHash3 variants selectable per table, plus
//!     injection for deterministic test stubs.
//!   - seed: the process-wide seed cell and the per-table `Seed` source
//!     that decides whether a table follows it.
//!   - entry: one key/value record owning copied buffers and a cached
//!     digest fingerprint.
//!   - table: the engine proper; bucket array of owned chains, the full
//!     operation set, collision accounting, and the resize machinery.
//!
//! Constraints
//! - Single-threaded per instance: all mutation is `&mut self`; no
//!   internal locking. External synchronization is the caller's job,
//!   including around the process-wide seed.
//! - Keys are unique by byte equality; inserting an existing key replaces
//!   its value in place.
//! - The bucket array size only changes as a whole-table resize, never
//!   incrementally, and a resize either completes or leaves the prior
//!   array intact.
//! - Allocation failure is a distinct error kind, never conflated with
//!   key absence.
//!
//! Hashing and the seed
//! - Every digest is keyed by a 32-bit seed, so collision sets cannot be
//!   precomputed without it (basic hash-flooding deterrence, nothing
//!   cryptographic).
//! - Entries cache their full digest as a fingerprint; chain walks compare
//!   fingerprints before key bytes, and resize refiles entries by stored
//!   fingerprint without touching key bytes again.
//! - [`set_seed`] retargets every [`Seed::Global`] table at once and does
//!   not rehash anything: keys filed under the old seed become
//!   unreachable. Rebuild populated tables after reseeding if continuity
//!   matters. Tables constructed with [`Seed::Fixed`] are immune.
//!
//! Capacity policy
//! - The collision counter is lifetime-cumulative; the load factor is
//!   `collisions / bucket_count`. After an insert pushes it over the
//!   configured ceiling, the array doubles until back under (unless
//!   autoresize is disabled).
//!
//! Example
//! ```
//! use bytetable::{HashTable, Seed};
//!
//! let mut table = HashTable::builder().seed(Seed::Fixed(7)).build().unwrap();
//! table.insert(b"alpha", b"1").unwrap();
//! assert_eq!(table.get(b"alpha"), Some(&b"1"[..]));
//! assert_eq!(table.remove(b"alpha").as_deref(), Some(&b"1"[..]));
//! assert!(table.is_empty());
//! ```

mod config;
mod entry;
mod error;
pub mod hash;
mod seed;
mod table;
mod table_proptest;

// Public surface
pub use config::{
    Builder, KeyLayout, TableConfig, ValueLayout, DEFAULT_MAX_LOAD_FACTOR, INITIAL_BUCKETS,
};
pub use entry::Entry;
pub use error::TableError;
pub use hash::{HashKind, HashProvider};
pub use seed::{seed, set_seed, Seed};
pub use table::{HashTable, Iter};
