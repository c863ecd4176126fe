//! Hash collections used throughout voidkit.
//!
//! Counters and indexes are keyed by small `Copy` ids, so we use aHash
//! instead of SipHash. The `Index*` variants keep first-insertion order,
//! which makes the partition model come out in source order.

/// Hash map backed by hashbrown and aHash.
pub type FastHashMap<K, V> = hashbrown::HashMap<K, V, ahash::RandomState>;

/// Hash set backed by hashbrown and aHash.
pub type FastHashSet<T> = hashbrown::HashSet<T, ahash::RandomState>;

/// Insertion-ordered hash map keyed with aHash.
pub type FastIndexMap<K, V> = indexmap::IndexMap<K, V, ahash::RandomState>;
