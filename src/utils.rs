use fnv::FnvHasher;
use std::{
    collections::{HashMap, HashSet},
    hash::{BuildHasherDefault, Hash}
};

use crate::errors::*;
use crate::random::RandomSource;

pub type FnvHashSet<T> = HashSet<T, BuildHasherDefault<FnvHasher>>;
pub type FnvHashMap<K, V> = HashMap<K, V, BuildHasherDefault<FnvHasher>>;

/// Construct a hash set with the specified capacity. The hashing algorithm is much faster than the default
/// on short keys such as integers and small strings.
/// Note it is less robust against security attacks on key collisions.
#[cfg(test)]
pub fn fnv_hashset<T: Hash + Eq>(capacity: usize) -> FnvHashSet<T> {
    let fnv = BuildHasherDefault::<FnvHasher>::default();
    HashSet::<T, _>::with_capacity_and_hasher(capacity, fnv)
}

/// Construct a hash map with the specified capacity, hashed with fnv.
pub fn fnv_hashmap<K: Hash + Eq, V>(capacity: usize) -> FnvHashMap<K, V> {
    let fnv = BuildHasherDefault::<FnvHasher>::default();
    HashMap::<K, V, _>::with_capacity_and_hasher(capacity, fnv)
}

/// Fisher-Yates shuffle in place.
///
/// Walks a counter down from the length, swapping the slot below the counter with a uniformly
/// drawn slot under it. Makes exactly `items.len()` draws; the last one is from a range of one.
/// The first failed draw stops the shuffle and is returned, leaving `items` part shuffled.
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) -> Result<()> {
    let mut counter = items.len();
    while counter > 0 {
        let index = rng.gen_index(counter)?;
        counter -= 1;
        items.swap(counter, index);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{seeded_rng, RecordingSource, ReplaySource};
    use itertools::Itertools;

    #[test]
    fn identity_draws_keep_the_order() {
        let mut items = ['a', 'b', 'c', 'd'];
        let mut rng = ReplaySource::identity_shuffles(1, 4);
        shuffle(&mut items, &mut rng).unwrap();
        assert_eq!(items, ['a', 'b', 'c', 'd']);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn zero_draws_rotate() {
        // each step swaps the top of the counter with the front
        let mut items = [1, 2, 3, 4];
        let mut rng = ReplaySource::new(vec![0, 0, 0, 0]);
        shuffle(&mut items, &mut rng).unwrap();
        assert_eq!(items, [2, 3, 4, 1]);
    }

    #[test]
    fn one_draw_per_item() {
        let mut rng = RecordingSource::new(seeded_rng(1));
        let mut items = (0..10).collect::<Vec<_>>();
        shuffle(&mut items, &mut rng).unwrap();
        assert_eq!(rng.recorded().len(), 10);
        // draw i comes from a range of 10 - i
        for (i, &draw) in rng.recorded().iter().enumerate() {
            assert!(draw < 10 - i);
        }
        assert_eq!(*rng.recorded().last().unwrap(), 0);
    }

    #[test]
    fn empty_and_single_item_slices() {
        let mut rng = ReplaySource::new(vec![0]);
        let mut empty: [u8; 0] = [];
        shuffle(&mut empty, &mut rng).unwrap();
        assert_eq!(rng.draws_made(), 0);

        let mut single = [7];
        shuffle(&mut single, &mut rng).unwrap();
        assert_eq!(single, [7]);
        assert_eq!(rng.draws_made(), 1);
    }

    #[test]
    fn failed_draw_is_propagated() {
        let mut rng = ReplaySource::new(vec![3, 2]);
        let mut items = [0, 1, 2, 3];
        assert!(shuffle(&mut items, &mut rng).is_err());
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = seeded_rng(77);
        for len in 0..20 {
            let mut items = (0..len).collect::<Vec<_>>();
            shuffle(&mut items, &mut rng).unwrap();
            assert_eq!(items.iter().cloned().sorted().collect::<Vec<_>>(), (0..len).collect::<Vec<_>>());
        }
    }

    #[test]
    fn every_permutation_of_three_turns_up() {
        let mut rng = seeded_rng(5);
        let mut seen = fnv_hashset(6);
        for _ in 0..600 {
            let mut items = [0, 1, 2];
            shuffle(&mut items, &mut rng).unwrap();
            seen.insert(items);
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn all_permutations_are_reachable_from_draws() {
        // 4 * 3 * 2 * 1 distinct draw scripts give 24 distinct orders
        let mut orders = fnv_hashset(24);
        for a in 0..4 {
            for b in 0..3 {
                for c in 0..2 {
                    let mut rng = ReplaySource::new(vec![a, b, c, 0]);
                    let mut items = [0, 1, 2, 3];
                    shuffle(&mut items, &mut rng).unwrap();
                    orders.insert(items);
                }
            }
        }
        assert_eq!(orders.len(), 24);
    }
}
