//! Append-or-initialize accumulation into collection-valued maps.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};
use std::iter;

/// Appends `value` to the collection stored under `key`, creating an empty
/// collection first if the key has no entry yet.
///
/// The collection type is chosen by the caller through the
/// `Default + Extend<V>` bound; `Vec`, `VecDeque`, and `LinkedList` all
/// qualify. An existing collection is mutated in place through the entry
/// API, never replaced, so insertion order accumulates across calls and no
/// other entry of the map is touched.
pub fn add_to_collection<K, C, V, S>(map: &mut HashMap<K, C, S>, key: K, value: V)
where
    K: Eq + Hash,
    C: Default + Extend<V>,
    S: BuildHasher,
{
    map.entry(key).or_default().extend(iter::once(value));
}
