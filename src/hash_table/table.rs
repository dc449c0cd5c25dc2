use crate::container::Container;
use crate::hash_table::entry::{Entry, Slot};
use crate::hash_table::{Error, Result};
use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash, Hasher};
use std::mem;

const INITIAL_CAPACITY: usize = 20;
const MAX_LOAD_FACTOR: f64 = 0.5;

/// How the table resolves two keys hashing to the same bucket.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Eq, PartialEq)]
pub enum CollisionBehavior {
    /// Each bucket is a chain of entries; colliding entries are appended and deleted entries are
    /// tombstoned in place.
    Chaining,
    /// Each bucket holds at most one entry; colliding entries probe for another slot at
    /// `(h(key) + c1 * i + c2 * i * i) mod capacity` and deleted entries leave a tombstone to
    /// keep later probe sequences intact.
    QuadraticProbing,
    /// Collisions are not resolved: an insert into a bucket occupied by a different key is
    /// silently rejected.
    Abort,
}

/// The outcome of a `put`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PutOutcome {
    /// The entry was stored without hitting an occupied bucket.
    NoCollision,
    /// The entry was appended to a chain that already held a different key.
    Chained,
    /// An entry with the same key existed and had its value replaced.
    Updated,
}

enum Buckets<K, V> {
    Chained(Vec<Vec<Slot<K, V>>>),
    Probed(Vec<Slot<K, V>>),
}

impl<K, V> Buckets<K, V> {
    fn with_capacity(behavior: CollisionBehavior, capacity: usize) -> Self {
        match behavior {
            CollisionBehavior::QuadraticProbing => {
                Buckets::Probed((0..capacity).map(|_| Slot::Empty).collect())
            },
            CollisionBehavior::Chaining | CollisionBehavior::Abort => {
                Buckets::Chained((0..capacity).map(|_| Vec::new()).collect())
            },
        }
    }

    fn capacity(&self) -> usize {
        match self {
            Buckets::Chained(ref chains) => chains.len(),
            Buckets::Probed(ref slots) => slots.len(),
        }
    }
}

/// An associative container keyed by a key extracted from each value, with a configurable
/// collision resolution policy.
///
/// The table keeps its load factor (live entries over capacity) below one half by reallocating
/// at the next prime above double the capacity and reinserting every live entry, which naturally
/// discards tombstones.
///
/// # Examples
/// ```
/// use comparative_collections::hash_table::{CollisionBehavior, HashTable};
///
/// let mut table = HashTable::new(CollisionBehavior::Chaining, |value: &u32| *value % 100, None)
///     .unwrap();
///
/// table.put(1, 101).unwrap();
/// table.put(2, 202).unwrap();
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.find(&1), Some(&101));
///
/// assert_eq!(table.remove(&1), Some(101));
/// assert_eq!(table.remove(&1), None);
/// ```
pub struct HashTable<K, V, F, B = RandomState> {
    buckets: Buckets<K, V>,
    size: usize,
    behavior: CollisionBehavior,
    key_of: F,
    coefficients: (u64, u64),
    hasher_builder: B,
}

impl<K, V, F> HashTable<K, V, F, RandomState>
where
    K: Hash + Eq,
    F: Fn(&V) -> K,
{
    /// Constructs a new, empty `HashTable<K, V, F>` with the given collision behavior and
    /// key-extraction function.
    ///
    /// The probing coefficients `(c1, c2)` are required when the behavior is
    /// `QuadraticProbing` and ignored otherwise; requesting quadratic probing without them
    /// returns `Error::MisconfiguredCollisionPolicy`.
    ///
    /// # Examples
    /// ```
    /// use comparative_collections::hash_table::{CollisionBehavior, Error, HashTable};
    ///
    /// let table = HashTable::new(CollisionBehavior::QuadraticProbing, |value: &u32| *value, None);
    /// assert_eq!(table.err(), Some(Error::MisconfiguredCollisionPolicy));
    ///
    /// let table =
    ///     HashTable::new(CollisionBehavior::QuadraticProbing, |value: &u32| *value, Some((1, 3)));
    /// assert!(table.is_ok());
    /// ```
    pub fn new(
        behavior: CollisionBehavior,
        key_of: F,
        coefficients: Option<(u64, u64)>,
    ) -> Result<Self> {
        Self::with_hasher(behavior, key_of, coefficients, RandomState::new())
    }
}

impl<K, V, F, B> HashTable<K, V, F, B>
where
    K: Hash + Eq,
    F: Fn(&V) -> K,
    B: BuildHasher,
{
    /// Constructs a new, empty `HashTable<K, V, F, B>` that hashes keys with `hasher_builder`.
    ///
    /// # Examples
    /// ```
    /// use comparative_collections::hash_table::{
    ///     BuildPassthroughHasher,
    ///     CollisionBehavior,
    ///     HashTable,
    /// };
    ///
    /// let mut table = HashTable::with_hasher(
    ///     CollisionBehavior::Chaining,
    ///     |value: &u32| *value,
    ///     None,
    ///     BuildPassthroughHasher::default(),
    /// )
    /// .unwrap();
    ///
    /// table.put(1, 1).unwrap();
    /// assert_eq!(table.find(&1), Some(&1));
    /// ```
    pub fn with_hasher(
        behavior: CollisionBehavior,
        key_of: F,
        coefficients: Option<(u64, u64)>,
        hasher_builder: B,
    ) -> Result<Self> {
        let coefficients = match (behavior, coefficients) {
            (CollisionBehavior::QuadraticProbing, Some(coefficients)) => coefficients,
            (CollisionBehavior::QuadraticProbing, None) => {
                return Err(Error::MisconfiguredCollisionPolicy);
            },
            (_, _) => (0, 0),
        };

        Ok(HashTable {
            buckets: Buckets::with_capacity(behavior, INITIAL_CAPACITY),
            size: 0,
            behavior,
            key_of,
            coefficients,
            hasher_builder,
        })
    }

    fn capacity(&self) -> usize {
        self.buckets.capacity()
    }

    fn bucket_index(&self, key: &K) -> usize {
        let mut hasher = self.hasher_builder.build_hasher();
        key.hash(&mut hasher);
        (hasher.finish() % self.capacity() as u64) as usize
    }

    // Walks the quadratic probe sequence for `key`. Stops at the index of the live entry holding
    // `key`, or at the slot an insert of `key` should use: the first tombstone seen if there was
    // one, otherwise the first empty slot. `None` means every slot was tried without finding the
    // key or a usable slot.
    fn probe(&self, key: &K, for_insert: bool) -> Option<usize> {
        let slots = match self.buckets {
            Buckets::Probed(ref slots) => slots,
            Buckets::Chained(_) => unreachable!(),
        };
        let capacity = slots.len() as u64;
        let origin = self.bucket_index(key) as u64;
        let (c1, c2) = self.coefficients;
        let mut first_tombstone = None;

        for i in 0..capacity {
            let offset = c1.wrapping_mul(i).wrapping_add(c2.wrapping_mul(i).wrapping_mul(i));
            let index = (origin.wrapping_add(offset) % capacity) as usize;

            match slots[index] {
                Slot::Empty => {
                    return match first_tombstone {
                        Some(reusable) if for_insert => Some(reusable),
                        _ => Some(index),
                    };
                },
                Slot::Tombstone => {
                    if for_insert && first_tombstone.is_none() {
                        first_tombstone = Some(index);
                    }
                },
                Slot::Live(ref entry) => {
                    if entry.key == *key {
                        return Some(index);
                    }
                },
            }
        }

        // The full sequence confirmed no live entry holds the key, so an insert may still reuse
        // a tombstoned slot.
        if for_insert {
            first_tombstone
        } else {
            None
        }
    }

    /// Inserts a key-value pair into the table, reporting whether the entry was stored without a
    /// collision, appended to a chain, or updated in place.
    ///
    /// Returns `Error::TableFull` if quadratic probing tries every slot without finding a usable
    /// one.
    ///
    /// # Examples
    /// ```
    /// use comparative_collections::hash_table::{CollisionBehavior, HashTable, PutOutcome};
    ///
    /// let mut table =
    ///     HashTable::new(CollisionBehavior::Chaining, |value: &u32| *value, None).unwrap();
    ///
    /// assert_eq!(table.put(1, 1), Ok(PutOutcome::NoCollision));
    /// assert_eq!(table.put(1, 2), Ok(PutOutcome::Updated));
    /// assert_eq!(table.find(&1), Some(&2));
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Result<PutOutcome> {
        if self.size as f64 / self.capacity() as f64 >= MAX_LOAD_FACTOR {
            self.resize()?;
        }

        match self.behavior {
            CollisionBehavior::Chaining => Ok(self.put_chained(key, value)),
            CollisionBehavior::QuadraticProbing => self.put_probed(key, value),
            CollisionBehavior::Abort => Ok(self.put_abort(key, value)),
        }
    }

    fn put_chained(&mut self, key: K, value: V) -> PutOutcome {
        let index = self.bucket_index(&key);
        let chain = match self.buckets {
            Buckets::Chained(ref mut chains) => &mut chains[index],
            Buckets::Probed(_) => unreachable!(),
        };

        let mut collided = false;
        for slot in chain.iter_mut() {
            if let Some(entry) = slot.as_live_mut() {
                if entry.key == key {
                    entry.value = value;
                    return PutOutcome::Updated;
                }
                collided = true;
            }
        }

        chain.push(Slot::Live(Entry { key, value }));
        self.size += 1;
        if collided {
            PutOutcome::Chained
        } else {
            PutOutcome::NoCollision
        }
    }

    fn put_probed(&mut self, key: K, value: V) -> Result<PutOutcome> {
        let index = match self.probe(&key, true) {
            Some(index) => index,
            None => return Err(Error::TableFull),
        };
        let slots = match self.buckets {
            Buckets::Probed(ref mut slots) => slots,
            Buckets::Chained(_) => unreachable!(),
        };

        match slots[index] {
            // the probe only stops at a live slot when the keys match
            Slot::Live(ref mut entry) => {
                entry.value = value;
                Ok(PutOutcome::Updated)
            },
            Slot::Empty | Slot::Tombstone => {
                slots[index] = Slot::Live(Entry { key, value });
                self.size += 1;
                Ok(PutOutcome::NoCollision)
            },
        }
    }

    fn put_abort(&mut self, key: K, value: V) -> PutOutcome {
        let index = self.bucket_index(&key);
        let chain = match self.buckets {
            Buckets::Chained(ref mut chains) => &mut chains[index],
            Buckets::Probed(_) => unreachable!(),
        };

        for slot in chain.iter_mut() {
            if let Some(entry) = slot.as_live_mut() {
                return if entry.key == key {
                    entry.value = value;
                    PutOutcome::Updated
                } else {
                    // the colliding insert is rejected without mutating the table
                    PutOutcome::NoCollision
                };
            }
        }

        chain.push(Slot::Live(Entry { key, value }));
        self.size += 1;
        PutOutcome::NoCollision
    }

    /// Removes the entry with the given key from the table, returning its value, or `None` if
    /// the key is absent. The entry is tombstoned in place rather than evicted, so probe
    /// sequences and chains running past it stay intact.
    ///
    /// # Examples
    /// ```
    /// use comparative_collections::hash_table::{CollisionBehavior, HashTable};
    ///
    /// let mut table =
    ///     HashTable::new(CollisionBehavior::Chaining, |value: &u32| *value, None).unwrap();
    ///
    /// table.put(1, 1).unwrap();
    /// assert_eq!(table.remove(&1), Some(1));
    /// assert_eq!(table.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        match self.behavior {
            CollisionBehavior::Chaining | CollisionBehavior::Abort => {
                let index = self.bucket_index(key);
                let chain = match self.buckets {
                    Buckets::Chained(ref mut chains) => &mut chains[index],
                    Buckets::Probed(_) => unreachable!(),
                };

                for slot in chain.iter_mut() {
                    let found = match slot.as_live() {
                        Some(entry) => entry.key == *key,
                        None => false,
                    };
                    if found {
                        self.size -= 1;
                        return match mem::replace(slot, Slot::Tombstone) {
                            Slot::Live(entry) => Some(entry.value),
                            Slot::Empty | Slot::Tombstone => unreachable!(),
                        };
                    }
                }
                None
            },
            CollisionBehavior::QuadraticProbing => {
                let index = self.probe(key, false)?;
                let slots = match self.buckets {
                    Buckets::Probed(ref mut slots) => slots,
                    Buckets::Chained(_) => unreachable!(),
                };

                if slots[index].is_live() {
                    self.size -= 1;
                    match mem::replace(&mut slots[index], Slot::Tombstone) {
                        Slot::Live(entry) => Some(entry.value),
                        Slot::Empty | Slot::Tombstone => unreachable!(),
                    }
                } else {
                    None
                }
            },
        }
    }

    /// Returns a reference to the value stored under the given key, or `None` if the key is
    /// absent. Tombstoned entries are ignored.
    ///
    /// # Examples
    /// ```
    /// use comparative_collections::hash_table::{CollisionBehavior, HashTable};
    ///
    /// let mut table =
    ///     HashTable::new(CollisionBehavior::Chaining, |value: &u32| *value, None).unwrap();
    ///
    /// table.put(1, 1).unwrap();
    /// assert_eq!(table.find(&1), Some(&1));
    /// assert_eq!(table.find(&2), None);
    /// ```
    pub fn find(&self, key: &K) -> Option<&V> {
        match self.behavior {
            CollisionBehavior::Chaining | CollisionBehavior::Abort => {
                let index = self.bucket_index(key);
                let chain = match self.buckets {
                    Buckets::Chained(ref chains) => &chains[index],
                    Buckets::Probed(_) => unreachable!(),
                };

                chain
                    .iter()
                    .filter_map(Slot::as_live)
                    .find(|entry| entry.key == *key)
                    .map(|entry| &entry.value)
            },
            CollisionBehavior::QuadraticProbing => {
                let index = self.probe(key, false)?;
                let slots = match self.buckets {
                    Buckets::Probed(ref slots) => slots,
                    Buckets::Chained(_) => unreachable!(),
                };
                slots[index].as_live().map(|entry| &entry.value)
            },
        }
    }

    /// Returns the number of live entries in the table. Tombstoned entries do not count.
    ///
    /// # Examples
    /// ```
    /// use comparative_collections::hash_table::{CollisionBehavior, HashTable};
    ///
    /// let mut table =
    ///     HashTable::new(CollisionBehavior::Chaining, |value: &u32| *value, None).unwrap();
    ///
    /// table.put(1, 1).unwrap();
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the table holds no live entries.
    ///
    /// # Examples
    /// ```
    /// use comparative_collections::hash_table::{CollisionBehavior, HashTable};
    ///
    /// let table: HashTable<u32, u32, _> =
    ///     HashTable::new(CollisionBehavior::Chaining, |value: &u32| *value, None).unwrap();
    /// assert!(table.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Clears the table, removing all entries and restoring the initial capacity.
    ///
    /// # Examples
    /// ```
    /// use comparative_collections::hash_table::{CollisionBehavior, HashTable};
    ///
    /// let mut table =
    ///     HashTable::new(CollisionBehavior::Chaining, |value: &u32| *value, None).unwrap();
    ///
    /// table.put(1, 1).unwrap();
    /// table.clear();
    /// assert_eq!(table.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.buckets = Buckets::with_capacity(self.behavior, INITIAL_CAPACITY);
        self.size = 0;
    }

    // Reallocates the bucket array at the next prime above double the capacity and reinserts
    // every live entry through the normal insert path, discarding tombstones.
    fn resize(&mut self) -> Result<()> {
        let new_capacity = next_prime(2 * self.capacity());
        let old_buckets = mem::replace(
            &mut self.buckets,
            Buckets::with_capacity(self.behavior, new_capacity),
        );
        self.size = 0;

        match old_buckets {
            Buckets::Chained(chains) => {
                for chain in chains {
                    for slot in chain {
                        if let Slot::Live(entry) = slot {
                            self.put(entry.key, entry.value)?;
                        }
                    }
                }
            },
            Buckets::Probed(slots) => {
                for slot in slots {
                    if let Slot::Live(entry) = slot {
                        self.put(entry.key, entry.value)?;
                    }
                }
            },
        }

        Ok(())
    }
}

impl<K, V, F, B> Container<V> for HashTable<K, V, F, B>
where
    K: Hash + Eq,
    F: Fn(&V) -> K,
    B: BuildHasher,
{
    fn insert(&mut self, element: V) -> bool {
        let key = (self.key_of)(&element);
        match self.put(key, element) {
            Ok(PutOutcome::Updated) => false,
            Ok(_) => true,
            // resizing at the load factor threshold keeps a full table unreachable
            Err(err) => panic!("{}", err),
        }
    }

    fn delete(&mut self, element: &V) -> Option<V> {
        let key = (self.key_of)(element);
        self.remove(&key)
    }

    fn search(&mut self, element: &V) -> Option<&V> {
        let key = (self.key_of)(element);
        self.find(&key)
    }

    fn len(&self) -> usize {
        self.size
    }
}

fn next_prime(mut n: usize) -> usize {
    while !is_prime(n) {
        n += 1;
    }
    n
}

fn is_prime(n: usize) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut i = 3;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}
