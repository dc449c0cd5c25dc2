use crate::container::Container;
use crate::splay_tree::node::Node;
use crate::splay_tree::tree;

/// An ordered set implemented using a splay tree.
///
/// A splay tree is a self-adjusting binary search tree with the additional property that recently
/// accessed elements are quick to access again. Every operation, including lookups, restructures
/// the tree by "splaying" the accessed value to the root, so operations run in `O(log n)`
/// amortized time without any balance metadata in the nodes.
///
/// # Examples
/// ```
/// use comparative_collections::splay_tree::SplaySet;
///
/// let mut set = SplaySet::new();
/// assert!(set.insert(0));
/// assert!(set.insert(3));
/// assert!(!set.insert(3));
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.remove(&0), Some(0));
/// assert_eq!(set.remove(&1), None);
/// ```
pub struct SplaySet<T> {
    tree: tree::Tree<T>,
    len: usize,
}

impl<T> SplaySet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `SplaySet<T>`.
    ///
    /// # Examples
    /// ```
    /// use comparative_collections::splay_tree::SplaySet;
    ///
    /// let set: SplaySet<u32> = SplaySet::new();
    /// ```
    pub fn new() -> Self {
        SplaySet { tree: None, len: 0 }
    }

    /// Inserts a value into the set, splaying it to the root. Returns `true` if the value was
    /// inserted, and `false` if the value was already present, in which case the set holds the
    /// same values as before, reshaped by the splay.
    ///
    /// # Examples
    /// ```
    /// use comparative_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let inserted = tree::insert(&mut self.tree, value);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes a value from the set. If the value exists in the set, it will return the stored
    /// value. Otherwise it will return `None` and leave the set in its splayed state.
    ///
    /// # Examples
    /// ```
    /// use comparative_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// assert_eq!(set.remove(&1), Some(1));
    /// assert_eq!(set.remove(&1), None);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let removed = tree::remove(&mut self.tree, value);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Returns a reference to the stored value equal to `value`, or `None` if no such value
    /// exists. The lookup is never a pure query: the accessed value, or the closest approach to
    /// it, is splayed to the root.
    ///
    /// # Examples
    /// ```
    /// use comparative_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// assert_eq!(set.get(&1), Some(&1));
    /// assert_eq!(set.get(&2), None);
    /// ```
    pub fn get(&mut self, value: &T) -> Option<&T> {
        tree::get(&mut self.tree, value)
    }

    /// Checks if a value exists in the set, splaying the tree as `get` does.
    ///
    /// # Examples
    /// ```
    /// use comparative_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&mut self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    /// ```
    /// use comparative_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use comparative_collections::splay_tree::SplaySet;
    ///
    /// let set: SplaySet<u32> = SplaySet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    /// ```
    /// use comparative_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns an iterator over the set. The iterator will yield values using in-order
    /// traversal, so they are produced in ascending order. Iterating does not splay the tree.
    ///
    /// # Examples
    /// ```
    /// use comparative_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(3);
    /// set.insert(1);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> SplaySetIter<'_, T> {
        SplaySetIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }

    #[cfg(test)]
    fn root(&self) -> Option<&T> {
        self.tree.as_ref().map(|node| &node.value)
    }
}

impl<T> IntoIterator for SplaySet<T>
where
    T: Ord,
{
    type IntoIter = SplaySetIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        SplaySetIntoIter {
            current: self.tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a SplaySet<T>
where
    T: 'a + Ord,
{
    type IntoIter = SplaySetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `SplaySet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned values.
pub struct SplaySetIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> Iterator for SplaySetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { value, right, .. } = node;
            self.current = right;
            value
        })
    }
}

/// An iterator for `SplaySet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct SplaySetIter<'a, T> {
    current: &'a tree::Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for SplaySetIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = &node.right;
            &node.value
        })
    }
}

impl<T> Default for SplaySet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Container<T> for SplaySet<T>
where
    T: Ord,
{
    fn insert(&mut self, element: T) -> bool {
        SplaySet::insert(self, element)
    }

    fn delete(&mut self, element: &T) -> Option<T> {
        self.remove(element)
    }

    fn search(&mut self, element: &T) -> Option<&T> {
        self.get(element)
    }

    fn len(&self) -> usize {
        self.len
    }
}
