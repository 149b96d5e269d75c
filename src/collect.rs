//! Normalization of call-site argument shapes.
//!
//! Variadic constructors and combinators in this crate accept their input in
//! three shapes: positional values, a single nested ordered sequence, or a
//! single lazy producer. [`Arguments`] names those shapes and
//! [`Arguments::collect`] turns any of them into the same canonical ordered
//! sequence, so `array![1, 2, 3]`, `Array::build(vec![1, 2, 3])` and
//! `Array::build(Arguments::producer(1..=3))` are indistinguishable once
//! built.
//!
//! # Examples
//!
//! ```rust
//! use fpbox::collect::{Arguments, collect};
//!
//! let positional = collect(Arguments::Variadic(vec![1, 2, 3]));
//! let nested = collect(vec![1, 2, 3]);
//! let produced = collect(Arguments::producer((1..=3).map(|x| x)));
//!
//! assert_eq!(positional, nested);
//! assert_eq!(nested, produced);
//! ```

use std::collections::VecDeque;
use std::fmt;

/// The shape in which a caller supplied a list of values.
pub enum Arguments<'a, T> {
    /// Values passed positionally, e.g. through [`array!`](crate::array).
    Variadic(Vec<T>),
    /// A single ordered sequence whose contents are the values.
    Nested(Vec<T>),
    /// A single lazy producer, drained in order when collected.
    Producer(Box<dyn Iterator<Item = T> + 'a>),
}

impl<'a, T> Arguments<'a, T> {
    /// Wraps a lazy producer without drawing from it.
    pub fn producer<I>(producer: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Self::Producer(Box::new(producer.into_iter()))
    }

    /// Converts the arguments into the canonical ordered sequence.
    ///
    /// An empty argument list yields an empty sequence; this never fails.
    pub fn collect(self) -> Vec<T> {
        match self {
            Self::Variadic(values) | Self::Nested(values) => values,
            Self::Producer(producer) => producer.collect(),
        }
    }

    const fn shape(&self) -> &'static str {
        match self {
            Self::Variadic(_) => "variadic",
            Self::Nested(_) => "nested",
            Self::Producer(_) => "producer",
        }
    }
}

/// Collects arguments of any accepted shape into the canonical sequence.
pub fn collect<'a, T>(arguments: impl Into<Arguments<'a, T>>) -> Vec<T> {
    let arguments = arguments.into();
    tracing::trace!(shape = arguments.shape(), "collecting arguments");
    arguments.collect()
}

impl<T> From<Vec<T>> for Arguments<'_, T> {
    fn from(values: Vec<T>) -> Self {
        Self::Nested(values)
    }
}

impl<T, const N: usize> From<[T; N]> for Arguments<'_, T> {
    fn from(values: [T; N]) -> Self {
        Self::Nested(Vec::from(values))
    }
}

impl<T: Clone> From<&[T]> for Arguments<'_, T> {
    fn from(values: &[T]) -> Self {
        Self::Nested(values.to_vec())
    }
}

impl<T> From<VecDeque<T>> for Arguments<'_, T> {
    fn from(values: VecDeque<T>) -> Self {
        Self::Nested(values.into())
    }
}

impl<T: fmt::Debug> fmt::Debug for Arguments<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variadic(values) => formatter.debug_tuple("Variadic").field(values).finish(),
            Self::Nested(values) => formatter.debug_tuple("Nested").field(values).finish(),
            Self::Producer(_) => formatter.write_str("Producer(<pending>)"),
        }
    }
}
