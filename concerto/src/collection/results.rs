use super::{Key, Keyed};
use crate::completion::Outcome;

use std::ops::Index;

/// The aggregated outcome of a combinator, shaped like its input.
///
/// A sequence of tasks yields a sequence of outcomes aligned by index; a
/// keyed collection yields a mapping aligned by key. Completion order never
/// affects the layout.
#[derive(Debug, Clone, PartialEq)]
pub enum Results<V> {
    /// Outcomes in original index order.
    Sequence(Vec<Outcome<V>>),

    /// Outcomes under their original keys.
    Keyed(Keyed<Outcome<V>>),
}

impl<V> Results<V> {
    /// Number of outcomes.
    pub fn len(&self) -> usize {
        match self {
            Results::Sequence(outcomes) => outcomes.len(),
            Results::Keyed(outcomes) => outcomes.len(),
        }
    }

    /// Returns `true` if there are no outcomes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up the outcome of the task identified by `key`.
    ///
    /// Returns `None` if the key does not match the container's shape.
    pub fn get(&self, key: &Key) -> Option<&Outcome<V>> {
        match (self, key) {
            (Results::Sequence(outcomes), Key::Index(index)) => outcomes.get(*index),
            (Results::Keyed(outcomes), Key::Name(name)) => outcomes.get(name),
            _ => None,
        }
    }

    /// Returns the outcomes if the input was a sequence.
    pub fn as_sequence(&self) -> Option<&[Outcome<V>]> {
        match self {
            Results::Sequence(outcomes) => Some(outcomes),
            Results::Keyed(_) => None,
        }
    }

    /// Returns the outcomes if the input was keyed.
    pub fn as_keyed(&self) -> Option<&Keyed<Outcome<V>>> {
        match self {
            Results::Sequence(_) => None,
            Results::Keyed(outcomes) => Some(outcomes),
        }
    }

    /// Consumes the container and returns its outcomes in iteration order.
    pub fn into_outcomes(self) -> Vec<Outcome<V>> {
        match self {
            Results::Sequence(outcomes) => outcomes,
            Results::Keyed(outcomes) => outcomes.into_iter().map(|(_, o)| o).collect(),
        }
    }
}

impl<V> Index<usize> for Results<V> {
    type Output = Outcome<V>;

    /// # Panics
    ///
    /// Panics if the results are keyed or `index` is out of bounds.
    fn index(&self, index: usize) -> &Outcome<V> {
        match self {
            Results::Sequence(outcomes) => &outcomes[index],
            Results::Keyed(_) => panic!("cannot index keyed results by position"),
        }
    }
}

impl<V> Index<&str> for Results<V> {
    type Output = Outcome<V>;

    /// # Panics
    ///
    /// Panics if the results are a sequence or `key` is missing.
    fn index(&self, key: &str) -> &Outcome<V> {
        match self {
            Results::Keyed(outcomes) => outcomes
                .get(key)
                .unwrap_or_else(|| panic!("no result for key {key:?}")),
            Results::Sequence(_) => panic!("cannot index sequence results by key"),
        }
    }
}

/// Layout of a result container.
#[derive(Debug, Default)]
enum Shape {
    #[default]
    Sequence,
    Keyed(Vec<String>),
}

/// Fixed-shape result container filled in by the engine.
///
/// One slot per task, allocated before any task runs so completions can be
/// written by slot index in any order.
#[derive(Debug)]
pub(crate) struct Slots<V> {
    shape: Shape,
    values: Vec<Option<Outcome<V>>>,
}

impl<V> Slots<V> {
    pub(crate) fn sequence(len: usize) -> Self {
        Self {
            shape: Shape::Sequence,
            values: std::iter::repeat_with(|| None).take(len).collect(),
        }
    }

    pub(crate) fn keyed(keys: Vec<String>) -> Self {
        Self {
            values: std::iter::repeat_with(|| None).take(keys.len()).collect(),
            shape: Shape::Keyed(keys),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    /// Identifier of the task owning `slot`.
    pub(crate) fn key(&self, slot: usize) -> Key {
        match &self.shape {
            Shape::Sequence => Key::Index(slot),
            Shape::Keyed(keys) => keys
                .get(slot)
                .map_or(Key::Index(slot), |name| Key::Name(name.clone())),
        }
    }

    pub(crate) fn fill(&mut self, slot: usize, outcome: Outcome<V>) {
        if let Some(value) = self.values.get_mut(slot) {
            *value = Some(outcome);
        }
    }

    /// Converts into the public container. Unfilled slots become
    /// [`Outcome::Empty`].
    pub(crate) fn into_results(self) -> Results<V> {
        let outcomes = self.values.into_iter().map(Option::unwrap_or_default);

        match self.shape {
            Shape::Sequence => Results::Sequence(outcomes.collect()),
            Shape::Keyed(keys) => Results::Keyed(keys.into_iter().zip(outcomes).collect()),
        }
    }
}

impl<V> Default for Slots<V> {
    fn default() -> Self {
        Self::sequence(0)
    }
}
