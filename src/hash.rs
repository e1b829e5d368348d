//! Hash function providers: a small capability interface over the three
//! MurmurHash3 variants, selectable per table and injectable for tests.
//!
//! Every provider folds the key bytes and a 32-bit seed into a `u128`
//! digest. The engine uses the low bits for bucket indexing and keeps the
//! full digest as an entry fingerprint, so a 32-bit provider simply widens
//! its output. Providers must be deterministic: same key and seed, same
//! digest, on every host.

/// A keyed hash over raw bytes. Implement this to inject a custom or
/// deterministic hasher at table construction (e.g. a constant-digest stub
/// that forces every key into one bucket).
pub trait HashProvider {
    /// Digest `key` under `seed`. Narrow hashes widen into the low bits.
    fn digest(&self, key: &[u8], seed: u32) -> u128;
}

/// Built-in provider selection.
///
/// The 32-bit variant is the cheapest and plenty for bucket indexing on
/// small tables; the 128-bit variants give the fingerprint more
/// discriminating power during chain walks. `X86_128` and `X64_128`
/// produce different digests for the same input; pick one and stay with it
/// for the lifetime of a table.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum HashKind {
    /// MurmurHash3 x86_32, widened to the low 32 bits of the digest.
    X86_32,
    /// MurmurHash3 x86_128, the variant tuned for 32-bit hosts.
    X86_128,
    /// MurmurHash3 x64_128, the variant tuned for 64-bit hosts.
    #[default]
    X64_128,
}

impl HashKind {
    pub(crate) fn provider(self) -> Box<dyn HashProvider> {
        match self {
            HashKind::X86_32 => Box::new(Murmur3X86_32),
            HashKind::X86_128 => Box::new(Murmur3X86_128),
            HashKind::X64_128 => Box::new(Murmur3X64_128),
        }
    }
}

/// Provider wrapping [`murmur3_x86_32`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Murmur3X86_32;

impl HashProvider for Murmur3X86_32 {
    fn digest(&self, key: &[u8], seed: u32) -> u128 {
        murmur3_x86_32(key, seed) as u128
    }
}

/// Provider wrapping [`murmur3_x86_128`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Murmur3X86_128;

impl HashProvider for Murmur3X86_128 {
    fn digest(&self, key: &[u8], seed: u32) -> u128 {
        murmur3_x86_128(key, seed)
    }
}

/// Provider wrapping [`murmur3_x64_128`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Murmur3X64_128;

impl HashProvider for Murmur3X64_128 {
    fn digest(&self, key: &[u8], seed: u32) -> u128 {
        murmur3_x64_128(key, seed)
    }
}

fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

fn fmix64(mut h: u64) -> u64 {
    h ^= h >> 33;
    h = h.wrapping_mul(0xff51_afd7_ed55_8ccd);
    h ^= h >> 33;
    h = h.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    h ^= h >> 33;
    h
}

/// MurmurHash3 x86_32 (reference semantics, little-endian block reads).
pub fn murmur3_x86_32(data: &[u8], seed: u32) -> u32 {
    const C1: u32 = 0xcc9e_2d51;
    const C2: u32 = 0x1b87_3593;

    let mut h1 = seed;
    let mut blocks = data.chunks_exact(4);
    for block in &mut blocks {
        let mut k1 = u32::from_le_bytes(block.try_into().unwrap());
        k1 = k1.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2);
        h1 ^= k1;
        h1 = h1.rotate_left(13).wrapping_mul(5).wrapping_add(0xe654_6b64);
    }

    let tail = blocks.remainder();
    let mut k1: u32 = 0;
    if tail.len() >= 3 {
        k1 ^= (tail[2] as u32) << 16;
    }
    if tail.len() >= 2 {
        k1 ^= (tail[1] as u32) << 8;
    }
    if !tail.is_empty() {
        k1 ^= tail[0] as u32;
        k1 = k1.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2);
        h1 ^= k1;
    }

    h1 ^= data.len() as u32;
    fmix32(h1)
}

/// MurmurHash3 x86_128. The four 32-bit lanes land little-endian in the
/// returned `u128`, matching the reference byte output.
pub fn murmur3_x86_128(data: &[u8], seed: u32) -> u128 {
    const C1: u32 = 0x239b_961b;
    const C2: u32 = 0xab0e_9789;
    const C3: u32 = 0x38b3_4ae5;
    const C4: u32 = 0xa1e3_8b93;

    let mut h1 = seed;
    let mut h2 = seed;
    let mut h3 = seed;
    let mut h4 = seed;

    let mut blocks = data.chunks_exact(16);
    for block in &mut blocks {
        let mut k1 = u32::from_le_bytes(block[0..4].try_into().unwrap());
        let mut k2 = u32::from_le_bytes(block[4..8].try_into().unwrap());
        let mut k3 = u32::from_le_bytes(block[8..12].try_into().unwrap());
        let mut k4 = u32::from_le_bytes(block[12..16].try_into().unwrap());

        k1 = k1.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2);
        h1 ^= k1;
        h1 = h1
            .rotate_left(19)
            .wrapping_add(h2)
            .wrapping_mul(5)
            .wrapping_add(0x561c_cd1b);

        k2 = k2.wrapping_mul(C2).rotate_left(16).wrapping_mul(C3);
        h2 ^= k2;
        h2 = h2
            .rotate_left(17)
            .wrapping_add(h3)
            .wrapping_mul(5)
            .wrapping_add(0x0bca_a747);

        k3 = k3.wrapping_mul(C3).rotate_left(17).wrapping_mul(C4);
        h3 ^= k3;
        h3 = h3
            .rotate_left(15)
            .wrapping_add(h4)
            .wrapping_mul(5)
            .wrapping_add(0x96cd_1c35);

        k4 = k4.wrapping_mul(C4).rotate_left(18).wrapping_mul(C1);
        h4 ^= k4;
        h4 = h4
            .rotate_left(13)
            .wrapping_add(h1)
            .wrapping_mul(5)
            .wrapping_add(0x32ac_3b17);
    }

    let tail = blocks.remainder();
    let t = tail.len();
    if t >= 13 {
        let mut k4: u32 = 0;
        for (i, &b) in tail[12..].iter().enumerate() {
            k4 ^= (b as u32) << (8 * i);
        }
        k4 = k4.wrapping_mul(C4).rotate_left(18).wrapping_mul(C1);
        h4 ^= k4;
    }
    if t >= 9 {
        let mut k3: u32 = 0;
        for (i, &b) in tail[8..t.min(12)].iter().enumerate() {
            k3 ^= (b as u32) << (8 * i);
        }
        k3 = k3.wrapping_mul(C3).rotate_left(17).wrapping_mul(C4);
        h3 ^= k3;
    }
    if t >= 5 {
        let mut k2: u32 = 0;
        for (i, &b) in tail[4..t.min(8)].iter().enumerate() {
            k2 ^= (b as u32) << (8 * i);
        }
        k2 = k2.wrapping_mul(C2).rotate_left(16).wrapping_mul(C3);
        h2 ^= k2;
    }
    if t >= 1 {
        let mut k1: u32 = 0;
        for (i, &b) in tail[..t.min(4)].iter().enumerate() {
            k1 ^= (b as u32) << (8 * i);
        }
        k1 = k1.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2);
        h1 ^= k1;
    }

    let len = data.len() as u32;
    h1 ^= len;
    h2 ^= len;
    h3 ^= len;
    h4 ^= len;

    h1 = h1.wrapping_add(h2).wrapping_add(h3).wrapping_add(h4);
    h2 = h2.wrapping_add(h1);
    h3 = h3.wrapping_add(h1);
    h4 = h4.wrapping_add(h1);

    h1 = fmix32(h1);
    h2 = fmix32(h2);
    h3 = fmix32(h3);
    h4 = fmix32(h4);

    h1 = h1.wrapping_add(h2).wrapping_add(h3).wrapping_add(h4);
    h2 = h2.wrapping_add(h1);
    h3 = h3.wrapping_add(h1);
    h4 = h4.wrapping_add(h1);

    (h1 as u128) | ((h2 as u128) << 32) | ((h3 as u128) << 64) | ((h4 as u128) << 96)
}

/// MurmurHash3 x64_128. The two 64-bit lanes land little-endian in the
/// returned `u128`, matching the reference byte output.
pub fn murmur3_x64_128(data: &[u8], seed: u32) -> u128 {
    const C1: u64 = 0x87c3_7b91_1142_53d5;
    const C2: u64 = 0x4cf5_ad43_2745_937f;

    let mut h1 = seed as u64;
    let mut h2 = seed as u64;

    let mut blocks = data.chunks_exact(16);
    for block in &mut blocks {
        let mut k1 = u64::from_le_bytes(block[0..8].try_into().unwrap());
        let mut k2 = u64::from_le_bytes(block[8..16].try_into().unwrap());

        k1 = k1.wrapping_mul(C1).rotate_left(31).wrapping_mul(C2);
        h1 ^= k1;
        h1 = h1
            .rotate_left(27)
            .wrapping_add(h2)
            .wrapping_mul(5)
            .wrapping_add(0x52dc_e729);

        k2 = k2.wrapping_mul(C2).rotate_left(33).wrapping_mul(C1);
        h2 ^= k2;
        h2 = h2
            .rotate_left(31)
            .wrapping_add(h1)
            .wrapping_mul(5)
            .wrapping_add(0x3849_5ab5);
    }

    let tail = blocks.remainder();
    let t = tail.len();
    if t >= 9 {
        let mut k2: u64 = 0;
        for (i, &b) in tail[8..].iter().enumerate() {
            k2 ^= (b as u64) << (8 * i);
        }
        k2 = k2.wrapping_mul(C2).rotate_left(33).wrapping_mul(C1);
        h2 ^= k2;
    }
    if t >= 1 {
        let mut k1: u64 = 0;
        for (i, &b) in tail[..t.min(8)].iter().enumerate() {
            k1 ^= (b as u64) << (8 * i);
        }
        k1 = k1.wrapping_mul(C1).rotate_left(31).wrapping_mul(C2);
        h1 ^= k1;
    }

    let len = data.len() as u64;
    h1 ^= len;
    h2 ^= len;

    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);
    h1 = fmix64(h1);
    h2 = fmix64(h2);
    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);

    (h1 as u128) | ((h2 as u128) << 64)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: the x86_32 variant matches the published reference
    /// vectors for the empty key.
    #[test]
    fn x86_32_empty_key_vectors() {
        assert_eq!(murmur3_x86_32(b"", 0), 0);
        assert_eq!(murmur3_x86_32(b"", 1), 0x514e_28b7);
        assert_eq!(murmur3_x86_32(b"", 0xffff_ffff), 0x81f1_6f39);
    }

    /// Invariant: the x86_32 variant matches reference vectors for short
    /// keys under seed zero, exercising both block and tail paths.
    #[test]
    fn x86_32_short_key_vectors() {
        assert_eq!(murmur3_x86_32(b"\0\0\0\0", 0), 0x2362_f9de);
        assert_eq!(murmur3_x86_32(b"hello", 0), 0x248b_fa47);
        assert_eq!(murmur3_x86_32(b"hello, world", 0), 0x149b_bb7f);
    }

    /// Invariant: both 128-bit variants collapse to an all-zero digest for
    /// the empty key under seed zero (direct consequence of the reference
    /// finalizer on zero state).
    #[test]
    fn x128_empty_key_seed_zero_is_zero() {
        assert_eq!(murmur3_x86_128(b"", 0), 0);
        assert_eq!(murmur3_x64_128(b"", 0), 0);
    }

    /// Invariant: digests are deterministic and seed-sensitive, and the
    /// three variants disagree with each other on the same input.
    #[test]
    fn variants_are_seeded_and_distinct() {
        let key = b"the quick brown fox";
        for kind in [HashKind::X86_32, HashKind::X86_128, HashKind::X64_128] {
            let p = kind.provider();
            assert_eq!(p.digest(key, 7), p.digest(key, 7));
            assert_ne!(p.digest(key, 7), p.digest(key, 8));
        }
        let a = murmur3_x86_128(key, 7);
        let b = murmur3_x64_128(key, 7);
        assert_ne!(a, b);
    }

    /// Invariant: every tail length from 0 to 16 is handled; digests for
    /// prefixes of a buffer are pairwise distinct for all three variants.
    #[test]
    fn all_tail_lengths_distinct() {
        let buf: Vec<u8> = (1u8..=17).collect();
        for kind in [HashKind::X86_32, HashKind::X86_128, HashKind::X64_128] {
            let p = kind.provider();
            let digests: Vec<u128> = (0..=buf.len()).map(|n| p.digest(&buf[..n], 3)).collect();
            for i in 0..digests.len() {
                for j in (i + 1)..digests.len() {
                    assert_ne!(digests[i], digests[j], "collision at lengths {i} vs {j}");
                }
            }
        }
    }
}
