//! Interchangeable in-memory containers (a height-balanced binary search tree, a self-adjusting
//! binary search tree, and a hash table with configurable collision resolution) that all satisfy
//! the same insert/delete/search contract, so callers can swap implementations transparently and
//! compare their structural trade-offs.

#[macro_use]
extern crate serde_derive;

pub mod avl_tree;
pub mod container;
pub mod hash_table;
pub mod splay_tree;
