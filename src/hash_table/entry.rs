/// A key-value pair stored in the table.
#[derive(Serialize, Deserialize, Debug)]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
}

/// The state of a single storage slot.
///
/// A tombstone is a logically deleted entry kept physically in place so that probe sequences
/// running past it stay intact; it counts as empty for the load factor but not for probing.
/// Chains reuse the same representation for their links, minus the `Empty` state.
#[derive(Serialize, Deserialize, Debug)]
pub enum Slot<K, V> {
    Empty,
    Live(Entry<K, V>),
    Tombstone,
}

impl<K, V> Slot<K, V> {
    pub fn as_live(&self) -> Option<&Entry<K, V>> {
        match self {
            Slot::Live(ref entry) => Some(entry),
            Slot::Empty | Slot::Tombstone => None,
        }
    }

    pub fn as_live_mut(&mut self) -> Option<&mut Entry<K, V>> {
        match self {
            Slot::Live(ref mut entry) => Some(entry),
            Slot::Empty | Slot::Tombstone => None,
        }
    }

    pub fn is_live(&self) -> bool {
        self.as_live().is_some()
    }
}
