//! Task collections and result containers.
//!
//! Combinators accept either an ordered sequence of tasks or a mapping from
//! string key to task. This module normalizes both shapes into one iteration
//! model of `(Key, T)` pairs, and builds a result container of the matching
//! shape before any task runs.
//!
//! It includes:
//! - [`Key`], the identifier of one task,
//! - [`Keyed`], an insertion-ordered string mapping,
//! - [`Collection`], the tagged input,
//! - [`Results`], the tagged output.

mod adapter;
mod keyed;
mod results;

pub(crate) use adapter::adapt;
pub(crate) use results::Slots;

pub use keyed::Keyed;
pub use results::Results;

use std::fmt;

/// Identifier of a task within its collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Position in an ordered sequence.
    Index(usize),

    /// Key in a keyed collection.
    Name(String),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "#{index}"),
            Key::Name(name) => write!(f, "{name:?}"),
        }
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_owned())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}

/// Input of a combinator: an ordered sequence or a keyed mapping.
///
/// Iteration order is sequence order, or insertion order for keyed input.
pub enum Collection<T> {
    /// Items identified by their index.
    Sequence(Vec<T>),

    /// Items identified by a unique string key.
    Keyed(Keyed<T>),
}

impl<T> Collection<T> {
    /// Number of items in the collection.
    pub fn len(&self) -> usize {
        match self {
            Collection::Sequence(items) => items.len(),
            Collection::Keyed(items) => items.len(),
        }
    }

    /// Returns `true` if the collection holds no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        Collection::Sequence(items)
    }
}

impl<T> From<Keyed<T>> for Collection<T> {
    fn from(items: Keyed<T>) -> Self {
        Collection::Keyed(items)
    }
}

impl<T> fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Sequence(items) => f.debug_tuple("Sequence").field(&items.len()).finish(),
            Collection::Keyed(items) => f
                .debug_tuple("Keyed")
                .field(&items.keys().collect::<Vec<_>>())
                .finish(),
        }
    }
}
