/// What a task reported on success.
///
/// A task signals completion with zero, one, or several values. A single
/// value is stored as-is; two or more are kept together, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<V> {
    /// Completed without a value.
    Empty,

    /// Completed with exactly one value.
    Single(V),

    /// Completed with two or more values.
    Multiple(Vec<V>),
}

impl<V> Outcome<V> {
    /// Builds an outcome from the values a task signalled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use concerto::Outcome;
    ///
    /// assert_eq!(Outcome::<i32>::from_values(vec![]), Outcome::Empty);
    /// assert_eq!(Outcome::from_values(vec![1]), Outcome::Single(1));
    /// assert_eq!(Outcome::from_values(vec![3, 3]), Outcome::Multiple(vec![3, 3]));
    /// ```
    pub fn from_values(mut values: Vec<V>) -> Self {
        match values.len() {
            0 => Outcome::Empty,
            1 => match values.pop() {
                Some(value) => Outcome::Single(value),
                None => Outcome::Empty,
            },
            _ => Outcome::Multiple(values),
        }
    }

    /// Returns `true` for [`Outcome::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Outcome::Empty)
    }

    /// The value, if exactly one was signalled.
    pub fn single(&self) -> Option<&V> {
        match self {
            Outcome::Single(value) => Some(value),
            _ => None,
        }
    }

    /// Consumes the outcome and returns the value, if exactly one was signalled.
    pub fn into_single(self) -> Option<V> {
        match self {
            Outcome::Single(value) => Some(value),
            _ => None,
        }
    }

    /// All signalled values, in order.
    pub fn values(&self) -> &[V] {
        match self {
            Outcome::Empty => &[],
            Outcome::Single(value) => std::slice::from_ref(value),
            Outcome::Multiple(values) => values,
        }
    }

    /// Consumes the outcome and returns all signalled values, in order.
    pub fn into_values(self) -> Vec<V> {
        match self {
            Outcome::Empty => Vec::new(),
            Outcome::Single(value) => vec![value],
            Outcome::Multiple(values) => values,
        }
    }
}

impl<V> Default for Outcome<V> {
    fn default() -> Self {
        Outcome::Empty
    }
}

impl<V> From<V> for Outcome<V> {
    fn from(value: V) -> Self {
        Outcome::Single(value)
    }
}
