// Integration suite for the public table surface (consolidated).
//
// Each test documents the behavior being verified. Everything here pins
// Seed::Fixed so the suite is deterministic and independent of the
// process-wide seed cell, which tests/reseed.rs exercises in isolation.

use bytetable::{Entry, HashTable, Seed, INITIAL_BUCKETS};

fn key8(i: u32) -> [u8; 8] {
    let mut k = [0u8; 8];
    k[..4].copy_from_slice(&i.to_le_bytes());
    k[4..].copy_from_slice(&i.wrapping_mul(0x9e37_79b9).to_le_bytes());
    k
}

// Test: the sizing scenario from the engine's contract. 20 distinct
// 8-byte keys with 4-byte values under max_load_factor = 0.1 and the
// default 64 buckets; all retrievable, size exact. Further inserts push
// the collision rate over the ceiling and the array must grow past 64.
#[test]
fn tight_ceiling_growth_scenario() {
    let mut t = HashTable::builder()
        .max_load_factor(0.1)
        .seed(Seed::Fixed(0x5eed))
        .build()
        .unwrap();
    assert_eq!(t.bucket_count(), 64);

    for i in 0..20u32 {
        t.insert(&key8(i), &i.to_le_bytes()).unwrap();
    }
    assert_eq!(t.len(), 20);
    for i in 0..20u32 {
        assert_eq!(t.get(&key8(i)), Some(&i.to_le_bytes()[..]));
    }

    // 64 buckets cannot hold 300 keys without collisions piling well past
    // a 0.1 ratio; the triggering insert must have grown the array.
    for i in 20..300u32 {
        t.insert(&key8(i), &i.to_le_bytes()).unwrap();
    }
    assert!(t.bucket_count() > 64, "bucket array did not grow");
    assert!(t.load_factor() <= t.max_load_factor());
    assert_eq!(t.len(), 300);
    for i in 0..300u32 {
        assert_eq!(t.get(&key8(i)), Some(&i.to_le_bytes()[..]));
    }
}

// Test: clear on a populated table empties it without touching the
// bucket array size, and the table remains usable.
#[test]
fn clear_preserves_bucket_count() {
    let mut t = HashTable::builder()
        .max_load_factor(0.1)
        .seed(Seed::Fixed(0xc1ea))
        .build()
        .unwrap();
    for i in 0..200u32 {
        t.insert(&key8(i), b"val").unwrap();
    }
    let buckets = t.bucket_count();
    assert!(buckets > INITIAL_BUCKETS);

    t.clear();
    assert_eq!(t.len(), 0);
    assert_eq!(t.bucket_count(), buckets);
    assert!(!t.contains(&key8(0)));

    t.insert(b"fresh", b"entry").unwrap();
    assert_eq!(t.get(b"fresh"), Some(&b"entry"[..]));
}

// Test: interleaved inserts, removals, and explicit resizes in both
// directions never lose a surviving entry or resurrect a removed one.
#[test]
fn resize_invariance_under_interleaving() {
    let mut t = HashTable::builder()
        .seed(Seed::Fixed(77))
        .autoresize(false)
        .build()
        .unwrap();

    let mut model: std::collections::HashMap<[u8; 8], u32> = std::collections::HashMap::new();
    for i in 0..120u32 {
        t.insert(&key8(i), &i.to_le_bytes()).unwrap();
        model.insert(key8(i), i);
        if i % 3 == 0 {
            t.remove(&key8(i / 2));
            model.remove(&key8(i / 2));
        }
        match i {
            40 => t.resize(7).unwrap(),
            80 => t.resize(1024).unwrap(),
            100 => t.resize(64).unwrap(),
            _ => {}
        }
    }

    assert_eq!(t.len(), model.len());
    for (k, v) in &model {
        assert_eq!(t.get(k), Some(&v.to_le_bytes()[..]));
    }
    for i in 0..120u32 {
        if !model.contains_key(&key8(i)) {
            assert!(!t.contains(&key8(i)), "removed key {i} resurfaced");
        }
    }
}

// Test: pre-built entries file like copied inserts and show up in keys().
#[test]
fn prebuilt_entries_and_key_enumeration() {
    let mut t = HashTable::builder().seed(Seed::Fixed(5)).build().unwrap();
    t.insert_entry(Entry::new(b"one", b"1").unwrap()).unwrap();
    t.insert_entry(Entry::new(b"two", b"2").unwrap()).unwrap();
    t.insert(b"three", b"3").unwrap();

    let mut keys = t.keys();
    keys.sort();
    assert_eq!(keys, vec![&b"one"[..], b"three", b"two"]);

    let total: usize = t.iter().map(|(_, v)| v.len()).sum();
    assert_eq!(total, 3);
}
