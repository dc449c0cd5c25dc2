use crate::avl_tree::node::Node;
use crate::avl_tree::tree;
use crate::container::Container;

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of the two child subtrees of any node differ by at most one. All operations run in
/// `O(log n)` time in the worst case.
///
/// # Examples
/// ```
/// use comparative_collections::avl_tree::AvlSet;
///
/// let mut set = AvlSet::new();
/// assert!(set.insert(0));
/// assert!(set.insert(3));
/// assert!(!set.insert(3));
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.remove(&0), Some(0));
/// assert_eq!(set.remove(&1), None);
/// ```
pub struct AvlSet<T> {
    tree: tree::Tree<T>,
    len: usize,
}

impl<T> AvlSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlSet<T>`.
    ///
    /// # Examples
    /// ```
    /// use comparative_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// ```
    pub fn new() -> Self {
        AvlSet { tree: None, len: 0 }
    }

    /// Inserts a value into the set. Returns `true` if the value was inserted, and `false` if
    /// the value was already present, in which case the set is left unchanged.
    ///
    /// # Examples
    /// ```
    /// use comparative_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
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
    /// value. Otherwise it will return `None`.
    ///
    /// # Examples
    /// ```
    /// use comparative_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
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
    /// exists.
    ///
    /// # Examples
    /// ```
    /// use comparative_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.get(&1), Some(&1));
    /// assert_eq!(set.get(&2), None);
    /// ```
    pub fn get(&self, value: &T) -> Option<&T> {
        tree::get(&self.tree, value)
    }

    /// Checks if a value exists in the set.
    ///
    /// # Examples
    /// ```
    /// use comparative_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    /// ```
    /// use comparative_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
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
    /// use comparative_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    /// ```
    /// use comparative_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
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
    /// traversal, so they are produced in ascending order.
    ///
    /// # Examples
    /// ```
    /// use comparative_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(3);
    /// set.insert(1);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlSetIter<'_, T> {
        AvlSetIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }
}

impl<T> IntoIterator for AvlSet<T>
where
    T: Ord,
{
    type IntoIter = AvlSetIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        AvlSetIntoIter {
            current: self.tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a AvlSet<T>
where
    T: 'a + Ord,
{
    type IntoIter = AvlSetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned values.
pub struct AvlSetIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> Iterator for AvlSetIntoIter<T> {
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

/// An iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct AvlSetIter<'a, T> {
    current: &'a tree::Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for AvlSetIter<'a, T> {
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

impl<T> Default for AvlSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Container<T> for AvlSet<T>
where
    T: Ord,
{
    fn insert(&mut self, element: T) -> bool {
        AvlSet::insert(self, element)
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

#[cfg(test)]
mod tests {
    use super::AvlSet;

    #[test]
    fn test_len_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert!(set.is_empty());
    }

    #[test]
    fn test_insert() {
        let mut set = AvlSet::new();
        assert!(set.insert(1));
        assert!(set.contains(&1));
        assert_eq!(set.get(&1), Some(&1));
    }

    #[test]
    fn test_insert_duplicate_is_rejected() {
        let mut set = AvlSet::new();
        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1]);
    }

    #[test]
    fn test_remove() {
        let mut set = AvlSet::new();
        set.insert(1);
        assert_eq!(set.remove(&1), Some(1));
        assert!(!set.contains(&1));
        assert_eq!(set.remove(&1), None);
    }

    #[test]
    fn test_remove_from_empty() {
        let mut set: AvlSet<u32> = AvlSet::new();
        assert_eq!(set.remove(&1), None);
    }

    #[test]
    fn test_insert_triggers_right_rotation() {
        let mut set = AvlSet::new();
        set.insert(30);
        set.insert(20);
        set.insert(10);

        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&10, &20, &30]);
    }

    #[test]
    fn test_insert_triggers_left_rotation() {
        let mut set = AvlSet::new();
        set.insert(10);
        set.insert(20);
        set.insert(30);

        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&10, &20, &30]);
    }

    #[test]
    fn test_insert_triggers_left_right_rotation() {
        let mut set = AvlSet::new();
        set.insert(30);
        set.insert(10);
        set.insert(20);

        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&10, &20, &30]);
    }

    #[test]
    fn test_insert_triggers_right_left_rotation() {
        let mut set = AvlSet::new();
        set.insert(10);
        set.insert(30);
        set.insert(20);

        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&10, &20, &30]);
    }

    #[test]
    fn test_remove_leaf() {
        let mut set = AvlSet::new();
        set.insert(10);
        set.insert(5);
        set.insert(15);

        assert_eq!(set.remove(&5), Some(5));
        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&10, &15]);
    }

    #[test]
    fn test_remove_node_with_one_child() {
        let mut set = AvlSet::new();
        set.insert(10);
        set.insert(5);
        set.insert(2);

        assert_eq!(set.remove(&5), Some(5));
        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&2, &10]);
    }

    #[test]
    fn test_remove_node_with_two_children() {
        let mut set = AvlSet::new();
        set.insert(20);
        set.insert(10);
        set.insert(30);
        set.insert(25);
        set.insert(40);

        assert_eq!(set.remove(&30), Some(30));
        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&10, &20, &25, &40]);
        assert_eq!(set.get(&30), None);
    }

    #[test]
    fn test_into_iter() {
        let mut set = AvlSet::new();
        set.insert(1);
        set.insert(5);
        set.insert(3);

        assert_eq!(set.into_iter().collect::<Vec<u32>>(), vec![1, 3, 5]);
    }

    #[test]
    fn test_iter() {
        let mut set = AvlSet::new();
        set.insert(1);
        set.insert(5);
        set.insert(3);

        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1, &3, &5]);
    }
}
