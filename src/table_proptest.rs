#![cfg(test)]

// Property tests for the table engine kept inside the crate so they can
// exercise the full surface without feature gates. The state machine runs
// against a std HashMap model, interleaving explicit resizes and clears
// with the usual operations, across all three built-in hash kinds and
// both autoresize settings.

use crate::{HashKind, HashTable, Seed};
use proptest::prelude::*;
use std::collections::HashMap;

#[derive(Clone, Debug)]
enum Op {
    Insert(Vec<u8>, Vec<u8>),
    Remove(Vec<u8>),
    Get(Vec<u8>),
    Contains(Vec<u8>),
    Resize(usize),
    Clear,
}

// Tiny key alphabet so duplicate keys and chain collisions actually occur.
fn arb_key() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(0u8..4, 0..4)
}

fn arb_value() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 0..6)
}

fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    proptest::collection::vec(
        prop_oneof![
            4 => (arb_key(), arb_value()).prop_map(|(k, v)| Op::Insert(k, v)),
            2 => arb_key().prop_map(Op::Remove),
            2 => arb_key().prop_map(Op::Get),
            1 => arb_key().prop_map(Op::Contains),
            1 => (1usize..96).prop_map(Op::Resize),
            1 => Just(Op::Clear),
        ],
        1..200,
    )
}

fn arb_kind() -> impl Strategy<Value = HashKind> {
    prop_oneof![
        Just(HashKind::X86_32),
        Just(HashKind::X86_128),
        Just(HashKind::X64_128),
    ]
}

proptest! {
    #[test]
    fn prop_state_machine(ops in arb_ops(), kind in arb_kind(), autoresize in any::<bool>()) {
        let mut sut = HashTable::builder()
            .seed(Seed::Fixed(11))
            .hash_kind(kind)
            .max_load_factor(0.25)
            .autoresize(autoresize)
            .build()
            .unwrap();
        let mut model: HashMap<Vec<u8>, Vec<u8>> = HashMap::new();

        for op in ops {
            match op {
                Op::Insert(k, v) => {
                    let old = sut.insert(&k, &v).unwrap();
                    let model_old = model.insert(k, v);
                    prop_assert_eq!(old, model_old);
                }
                Op::Remove(k) => {
                    prop_assert_eq!(sut.remove(&k), model.remove(&k));
                }
                Op::Get(k) => {
                    prop_assert_eq!(sut.get(&k), model.get(&k).map(|v| v.as_slice()));
                }
                Op::Contains(k) => {
                    prop_assert_eq!(sut.contains(&k), model.contains_key(&k));
                }
                Op::Resize(n) => {
                    sut.resize(n).unwrap();
                    prop_assert_eq!(sut.bucket_count(), n);
                }
                Op::Clear => {
                    sut.clear();
                    model.clear();
                }
            }
            prop_assert_eq!(sut.len(), model.len());
            prop_assert!(sut.bucket_count() > 0);
        }

        // Final sweep: every surviving key retrievable with its last value,
        // enumeration agrees with the model exactly.
        for (k, v) in &model {
            prop_assert_eq!(sut.get(k), Some(v.as_slice()));
        }
        let mut keys: Vec<Vec<u8>> = sut.keys().into_iter().map(<[u8]>::to_vec).collect();
        keys.sort();
        let mut expected: Vec<Vec<u8>> = model.keys().cloned().collect();
        expected.sort();
        prop_assert_eq!(keys, expected);
        prop_assert_eq!(sut.iter().count(), model.len());
    }
}
