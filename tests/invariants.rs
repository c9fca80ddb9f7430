use proptest::prelude::*;
use std::collections::HashMap as StdHashMap;
use swissmap::SwissMap;

#[derive(Clone, Debug)]
enum Op {
    Put(u64, u32),
    Remove(u64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u64..64, any::<u32>()).prop_map(|(k, v)| Op::Put(k, v)),
        (0u64..64).prop_map(Op::Remove),
    ]
}

proptest! {
    /// A map driven by an operation sequence agrees with a plain `HashMap`
    /// run through the same sequence: same presence, same values, same
    /// final count.
    #[test]
    fn matches_a_reference_map_after_any_operation_sequence(ops in prop::collection::vec(op_strategy(), 0..500)) {
        let mut map = SwissMap::new();
        let mut reference: StdHashMap<u64, u32> = StdHashMap::new();

        for op in ops {
            match op {
                Op::Put(key, value) => {
                    map.put(key, value).unwrap();
                    reference.insert(key, value);
                }
                Op::Remove(key) => {
                    let removed = map.remove(key);
                    let expected = reference.remove(&key).is_some();
                    prop_assert_eq!(removed, expected);
                }
            }
        }

        prop_assert_eq!(map.len(), reference.len());
        for (key, value) in &reference {
            prop_assert_eq!(map.get(*key), Some(value));
        }
        for key in 0u64..64 {
            if !reference.contains_key(&key) {
                prop_assert_eq!(map.get(key), None);
            }
        }
    }

    /// Capacity is always zero or a power of two at least 16, and size never
    /// exceeds three quarters of capacity.
    #[test]
    fn capacity_stays_a_power_of_two_within_the_load_factor(ops in prop::collection::vec(op_strategy(), 0..500)) {
        let mut map = SwissMap::new();
        for op in ops {
            match op {
                Op::Put(key, value) => { map.put(key, value).unwrap(); }
                Op::Remove(key) => { map.remove(key); }
            }
            let capacity = map.capacity();
            prop_assert!(capacity == 0 || (capacity.is_power_of_two() && capacity >= 16));
            if capacity > 0 {
                prop_assert!(map.len() <= (capacity / 4) * 3);
            }
        }
    }

    /// put immediately followed by get of the same key returns that value.
    #[test]
    fn put_then_get_is_consistent(key in any::<u64>(), value in any::<u32>()) {
        let mut map = SwissMap::new();
        map.put(key, value).unwrap();
        prop_assert_eq!(map.get(key), Some(&value));
    }

    /// Overwriting a key leaves size unchanged and returns the new value.
    #[test]
    fn overwrite_preserves_size(key in any::<u64>(), first in any::<u32>(), second in any::<u32>()) {
        let mut map = SwissMap::new();
        map.put(key, first).unwrap();
        let size_before = map.len();
        map.put(key, second).unwrap();
        prop_assert_eq!(map.len(), size_before);
        prop_assert_eq!(map.get(key), Some(&second));
    }

    /// Growth driven purely by insertion preserves every live key's value.
    #[test]
    fn growth_preserves_the_key_value_multiset(keys in prop::collection::hash_set(any::<u64>(), 0..300)) {
        let mut map = SwissMap::new();
        for &key in &keys {
            map.put(key, key.wrapping_mul(7) as u32).unwrap();
        }
        prop_assert_eq!(map.len(), keys.len());
        for &key in &keys {
            prop_assert_eq!(map.get(key), Some(&(key.wrapping_mul(7) as u32)));
        }
    }
}
