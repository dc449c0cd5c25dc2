//! Hash table keyed by a caller-supplied key-extraction function, with configurable collision
//! resolution: separate chaining, quadratic probing with lazy deletion, or aborting on any
//! collision.

mod entry;
mod passthrough;
mod table;

pub use self::entry::{Entry, Slot};
pub use self::passthrough::{BuildPassthroughHasher, PassthroughHasher};
pub use self::table::{CollisionBehavior, HashTable, PutOutcome};

use std::error;
use std::fmt;
use std::result;

#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// A quadratic probe tried every slot without finding the key or a usable slot. Resizing at
    /// the load factor threshold keeps this practically unreachable, but the probe still detects
    /// and reports it rather than looping.
    TableFull,
    /// Quadratic probing was requested without explicit probing coefficients.
    MisconfiguredCollisionPolicy,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::TableFull => write!(f, "Hash table is full."),
            Error::MisconfiguredCollisionPolicy => write!(
                f,
                "Quadratic probing requires explicit probing coefficients.",
            ),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
