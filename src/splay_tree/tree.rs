use crate::splay_tree::node::Node;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

/// Restructures the subtree so that the node holding `value`, or the last node visited when
/// `value` is absent, becomes the subtree root.
pub fn splay<T>(node: &mut Box<Node<T>>, value: &T)
where
    T: Ord,
{
    match value.cmp(&node.value) {
        Ordering::Equal => {},
        Ordering::Less => {
            let zig_zig = {
                let child = match node.left {
                    Some(ref mut child) => child,
                    None => return,
                };
                match value.cmp(&child.value) {
                    Ordering::Less => {
                        if let Some(ref mut grandchild) = child.left {
                            splay(grandchild, value);
                        }
                        true
                    },
                    Ordering::Greater => {
                        if let Some(ref mut grandchild) = child.right {
                            splay(grandchild, value);
                        }
                        if child.right.is_some() {
                            child.rotate_left();
                        }
                        false
                    },
                    Ordering::Equal => false,
                }
            };

            if zig_zig {
                node.rotate_right();
            }
            if node.left.is_some() {
                node.rotate_right();
            }
        },
        Ordering::Greater => {
            let zag_zag = {
                let child = match node.right {
                    Some(ref mut child) => child,
                    None => return,
                };
                match value.cmp(&child.value) {
                    Ordering::Greater => {
                        if let Some(ref mut grandchild) = child.right {
                            splay(grandchild, value);
                        }
                        true
                    },
                    Ordering::Less => {
                        if let Some(ref mut grandchild) = child.left {
                            splay(grandchild, value);
                        }
                        if child.left.is_some() {
                            child.rotate_right();
                        }
                        false
                    },
                    Ordering::Equal => false,
                }
            };

            if zag_zag {
                node.rotate_left();
            }
            if node.right.is_some() {
                node.rotate_left();
            }
        },
    }
}

pub fn insert<T>(tree: &mut Tree<T>, value: T) -> bool
where
    T: Ord,
{
    match tree {
        Some(ref mut node) => {
            splay(node, &value);
            match value.cmp(&node.value) {
                Ordering::Less => {
                    let mut new_node = Node::new(value);
                    new_node.left = node.left.take();
                    mem::swap(&mut **node, &mut new_node);
                    node.right = Some(Box::new(new_node));
                    true
                },
                Ordering::Greater => {
                    let mut new_node = Node::new(value);
                    new_node.right = node.right.take();
                    mem::swap(&mut **node, &mut new_node);
                    node.left = Some(Box::new(new_node));
                    true
                },
                Ordering::Equal => false,
            }
        },
        None => {
            *tree = Some(Box::new(Node::new(value)));
            true
        },
    }
}

pub fn remove<T>(tree: &mut Tree<T>, value: &T) -> Option<T>
where
    T: Ord,
{
    match tree {
        Some(ref mut node) => {
            splay(node, value);
            if node.value != *value {
                return None;
            }
        },
        None => return None,
    }

    let unboxed_node = *tree.take().expect("Expected non-empty tree.");
    let Node { value: removed, left, right } = unboxed_node;
    *tree = match left {
        Some(mut left_node) => {
            // `value` is no longer present, so this splay brings the maximum of the left
            // subtree to its root, which has no right child.
            splay(&mut left_node, value);
            left_node.right = right;
            Some(left_node)
        },
        None => right,
    };
    Some(removed)
}

pub fn get<'a, T>(tree: &'a mut Tree<T>, value: &T) -> Option<&'a T>
where
    T: Ord,
{
    match tree {
        Some(ref mut node) => {
            splay(node, value);
            if node.value == *value {
                Some(&node.value)
            } else {
                None
            }
        },
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root_value<T>(tree: &Tree<T>) -> Option<&T> {
        tree.as_ref().map(|node| &node.value)
    }

    #[test]
    fn test_splay_moves_value_to_root() {
        let mut tree = None;
        for value in [50, 30, 70, 20, 40].iter() {
            insert(&mut tree, *value);
        }

        let mut node = tree.take().unwrap();
        splay(&mut node, &40);
        assert_eq!(node.value, 40);
    }

    #[test]
    fn test_splay_miss_moves_closest_approach_to_root() {
        let mut tree = None;
        for value in [50, 30, 70].iter() {
            insert(&mut tree, *value);
        }

        let mut node = tree.take().unwrap();
        splay(&mut node, &31);
        assert!(node.value == 30 || node.value == 50);
    }

    #[test]
    fn test_insert_splays_previous_root_into_children() {
        let mut tree = None;
        insert(&mut tree, 10);
        insert(&mut tree, 20);
        assert_eq!(root_value(&tree), Some(&20));

        insert(&mut tree, 5);
        assert_eq!(root_value(&tree), Some(&5));
    }

    #[test]
    fn test_remove_joins_subtrees() {
        let mut tree = None;
        for value in [10, 5, 20].iter() {
            insert(&mut tree, *value);
        }

        assert_eq!(remove(&mut tree, &20), Some(20));
        assert_eq!(remove(&mut tree, &20), None);
        assert_eq!(remove(&mut tree, &5), Some(5));
        assert_eq!(remove(&mut tree, &10), Some(10));
        assert!(tree.is_none());
        assert_eq!(remove(&mut tree, &10), None);
    }
}
