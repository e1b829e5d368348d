//! Process-wide hash seed and the per-table seed source.
//!
//! The seed keys every digest, so adversaries cannot precompute colliding
//! keys without knowing it. Tables default to the process-wide cell; tests
//! pin a [`Seed::Fixed`] value so they stay isolated from each other.
//!
//! Changing the seed does not rehash existing tables. A table populated
//! under one seed and queried under another will fail to locate its
//! entries, because bucket indexes derive from the digest. Callers that
//! reseed must rebuild populated tables if continuity is required.

use core::sync::atomic::{AtomicU32, Ordering};

// Fixed default so runs are reproducible until someone opts into a seed.
static PROCESS_SEED: AtomicU32 = AtomicU32::new(0);

/// Overwrite the process-wide seed consulted by every [`Seed::Global`]
/// table. The engine performs no internal locking; callers touching the
/// seed from multiple threads must synchronize externally.
///
/// See the module docs for the populated-table caveat.
pub fn set_seed(seed: u32) {
    PROCESS_SEED.store(seed, Ordering::Relaxed);
}

/// Read the current process-wide seed. Defaults to 0 before any
/// [`set_seed`] call.
pub fn seed() -> u32 {
    PROCESS_SEED.load(Ordering::Relaxed)
}

/// Where a table obtains the seed for its digests.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Seed {
    /// Consult the process-wide cell on every digest. This is the
    /// compatibility behavior: one `set_seed` call retargets all tables.
    #[default]
    Global,
    /// An instance-local constant, immune to [`set_seed`].
    Fixed(u32),
}

impl Seed {
    pub(crate) fn current(self) -> u32 {
        match self {
            Seed::Global => seed(),
            Seed::Fixed(s) => s,
        }
    }
}
