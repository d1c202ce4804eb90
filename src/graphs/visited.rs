use bit_vec::BitVec;
use rustc_hash::FxHashSet;
use std::hash::Hash;

use crate::graphs::vertices::VertexKey;

/// Per-traversal record of which vertices have been discovered.
pub trait Visited<V>: Default {
    /// Marks `value` as visited. Returns true only the first time.
    fn visit(&mut self, value: V) -> bool;

    fn is_visited(&self, value: &V) -> bool;
}

impl<V> Visited<V> for FxHashSet<V>
where
    V: Eq + Hash + Copy,
{
    #[inline]
    fn visit(&mut self, value: V) -> bool {
        self.insert(value)
    }

    #[inline]
    fn is_visited(&self, value: &V) -> bool {
        self.contains(value)
    }
}

/// Dense visited set indexed by key slot.
///
/// Grows on demand, so it can start empty or be presized with the vertex
/// store's slot count.
impl Visited<VertexKey> for BitVec {
    #[inline]
    fn visit(&mut self, value: VertexKey) -> bool {
        let index = value.index();
        let len = self.len();
        if index >= len {
            self.grow(index + 1 - len, false);
        }

        if self[index] {
            false
        } else {
            self.set(index, true);
            true
        }
    }

    #[inline]
    fn is_visited(&self, value: &VertexKey) -> bool {
        self.get(value.index()).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use proptest::prelude::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use crate::graphs::vertices::VertexStore;

    /// Keys `0..n` handed out by a real store.
    fn keys(n: usize) -> Vec<VertexKey> {
        let mut store = VertexStore::new();
        (0..n)
            .map(|i| store.insert(i.to_string(), 0.0).unwrap())
            .collect()
    }

    #[test]
    fn bitvec_visit_returns_true_only_first_time() {
        let keys = keys(8);
        let mut visited = BitVec::from_elem(8, false);
        assert!(keys.iter().all(|k| !visited.is_visited(k)));

        assert!(visited.visit(keys[3]));
        assert!(!visited.visit(keys[3]));
        assert!(visited.is_visited(&keys[3]));

        for (i, key) in keys.iter().enumerate() {
            if i != 3 {
                assert!(!visited.is_visited(key));
            }
        }
    }

    #[test]
    fn bitvec_grows_on_out_of_range_visit() {
        let keys = keys(12);
        let mut visited = BitVec::default();
        assert!(!visited.is_visited(&keys[10]));

        assert!(visited.visit(keys[10]));
        assert!(visited.len() > 10);
        assert!(visited.is_visited(&keys[10]));
        assert!(!visited.visit(keys[10]));
    }

    #[test]
    fn hashset_visited_tracks_keys() {
        let keys = keys(4);
        let mut visited: FxHashSet<VertexKey> = FxHashSet::default();
        assert!(visited.visit(keys[1]));
        assert!(!visited.visit(keys[1]));
        assert!(visited.is_visited(&keys[1]));
        assert!(!visited.is_visited(&keys[2]));
    }

    proptest! {
        // Both implementations agree with a plain HashSet on first-visit
        // results and membership.
        #[test]
        fn prop_visited_matches_hashset(indices in proptest::collection::vec(0usize..200, 0..200)) {
            let keys = keys(200);
            let mut bits = BitVec::default();
            let mut hashed: FxHashSet<VertexKey> = FxHashSet::default();
            let mut reference = HashSet::new();

            for i in indices {
                let key = keys[i];
                let was_new = reference.insert(key);
                prop_assert_eq!(bits.visit(key), was_new);
                prop_assert_eq!(hashed.visit(key), was_new);
                prop_assert!(bits.is_visited(&key));
                prop_assert!(hashed.is_visited(&key));
            }

            for key in &keys {
                prop_assert_eq!(bits.is_visited(key), reference.contains(key));
            }
        }
    }

    #[test]
    fn random_stress_bitvec_visited() {
        let keys = keys(256);
        let mut rng = ChaCha8Rng::seed_from_u64(0x_4B45_5953_4C4F_5453);

        for _case in 0..100 {
            let initial_len = rng.random_range(0..64);
            let mut visited = BitVec::from_elem(initial_len, false);
            let mut reference = HashSet::new();

            let steps = rng.random_range(0..500);
            for _ in 0..steps {
                let key = keys[rng.random_range(0..256)];
                assert_eq!(visited.visit(key), reference.insert(key));
                assert!(visited.len() > key.index());
            }

            for key in &reference {
                assert!(visited.is_visited(key));
            }
        }
    }
}
