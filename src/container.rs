//! The uniform contract satisfied by every container in this crate.

/// The minimal polymorphic interface shared by `AvlSet`, `SplaySet`, and `HashTable`.
///
/// All three containers resolve an element to a key (the element's own ordering for the trees,
/// a caller-supplied extraction function for the hash table) and agree on the same semantics:
/// inserting an element whose key is already present reports `false`, and deleting or searching
/// for an absent key is ordinary control flow yielding `None`, never an error.
///
/// `search` takes `&mut self` because a splay tree restructures itself on every access; a lookup
/// is never a pure query there, so the contract accommodates the most restrictive implementor.
///
/// # Examples
///
/// ```
/// use comparative_collections::avl_tree::AvlSet;
/// use comparative_collections::container::Container;
/// use comparative_collections::splay_tree::SplaySet;
///
/// fn exercise<C>(container: &mut C)
/// where
///     C: Container<u32>,
/// {
///     assert!(container.insert(1));
///     assert!(!container.insert(1));
///     assert_eq!(container.search(&1), Some(&1));
///     assert_eq!(container.delete(&1), Some(1));
///     assert_eq!(container.search(&1), None);
/// }
///
/// exercise(&mut AvlSet::new());
/// exercise(&mut SplaySet::new());
/// ```
pub trait Container<T> {
    /// Inserts an element, returning `true` unless an element with the same key is already
    /// present, in which case the container reports `false`.
    fn insert(&mut self, element: T) -> bool;

    /// Deletes the element with the same key as `element`, returning the stored element, or
    /// `None` if it is absent.
    fn delete(&mut self, element: &T) -> Option<T>;

    /// Searches for the element with the same key as `element`, returning a reference to the
    /// stored element, or `None` if it is absent.
    fn search(&mut self, element: &T) -> Option<&T>;

    /// Returns the number of elements in the container.
    fn len(&self) -> usize;

    /// Returns `true` if the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
