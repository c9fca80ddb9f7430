use crate::error::Result;
use crate::raw::RawTable;
use crate::seed;

/// A single-threaded, open-addressed hash map keyed by `u64`.
///
/// Backed by a SwissTable-style layout: one metadata byte per slot, probed
/// 16 slots at a time with SIMD compares. There is no iteration API and no
/// ordering guarantee across a rehash — see the crate root documentation.
pub struct SwissMap<V> {
    raw: RawTable<V>,
}

impl<V> SwissMap<V> {
    /// An empty map. No allocation happens until the first [`SwissMap::put`].
    pub fn new() -> Self {
        Self { raw: RawTable::new(seed::current_default_seed()) }
    }

    /// An empty map pre-sized so that inserting up to `capacity` keys (more
    /// precisely: growing the table to hold `capacity` slots) will not
    /// itself trigger a rehash.
    ///
    /// # Errors
    /// Returns [`crate::SwissMapError::AllocationFailed`] if the initial
    /// allocation fails, or [`crate::SwissMapError::CapacityOverflow`] if
    /// `capacity` has no representable power-of-two table size.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self { raw: RawTable::with_capacity(capacity, seed::current_default_seed())? })
    }

    /// An empty map that captures `seed` instead of the current process-wide
    /// default. Two maps built with the same seed hash identical keys to
    /// identical slots; maps built with different seeds do not.
    pub fn with_seed(seed: u64) -> Self {
        Self { raw: RawTable::new(seed) }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Whether the map holds no keys.
    pub fn is_empty(&self) -> bool {
        self.raw.len() == 0
    }

    /// Number of slots in the backing table. Always `0` or a power of two
    /// `>= 16`.
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// The hash seed captured at construction.
    pub fn seed(&self) -> u64 {
        self.raw.seed()
    }

    /// Looks up `key`.
    pub fn get(&self, key: u64) -> Option<&V> {
        self.raw.get(key)
    }

    /// Looks up `key`, yielding a mutable reference to its value.
    pub fn get_mut(&mut self, key: u64) -> Option<&mut V> {
        self.raw.get_mut(key)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: u64) -> bool {
        self.raw.contains_key(key)
    }

    /// Inserts `value` under `key`, replacing and dropping any previous
    /// value for that key.
    ///
    /// # Errors
    /// Fails only if this is the first insert into a map with no prior
    /// allocation and that allocation fails; the map is left empty. A
    /// growth triggered by crossing the 75% load factor *after* a
    /// successful insert never fails this call — see the crate root
    /// documentation for that tradeoff.
    pub fn put(&mut self, key: u64, value: V) -> Result<()> {
        self.raw.put(key, value)
    }

    /// Removes `key`, dropping its value. Returns whether the key was
    /// present.
    pub fn remove(&mut self, key: u64) -> bool {
        self.raw.remove(key)
    }

    /// Ensures the table holds at least `capacity` slots, growing it if
    /// necessary. A no-op if the table is already at least that large.
    ///
    /// # Errors
    /// Returns [`crate::SwissMapError`] if growth is needed and allocation
    /// fails, or if `capacity` has no representable power-of-two table
    /// size. The map is left unchanged on failure.
    pub fn reserve(&mut self, capacity: usize) -> Result<()> {
        self.raw.reserve(capacity)
    }
}

impl<V> Default for SwissMap<V> {
    fn default() -> Self {
        Self::new()
    }
}
