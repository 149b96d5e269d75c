//! Immutable homogeneous sequences.
//!
//! [`Array<T>`] is an ordered, immutable sequence whose elements all share
//! the single type `T`. Homogeneity is a property of the type itself; input
//! whose element types are only known at runtime goes through
//! [`Array::from_dynamic`], which validates it first.
//!
//! Every operation returns a new array; nothing mutates an existing one.
//!
//! # Examples
//!
//! ```rust
//! use fpbox::array;
//! use fpbox::collect::Arguments;
//! use fpbox::sequence::Array;
//!
//! let positional = array![1, 2, 3];
//! let nested = Array::build(vec![1, 2, 3]);
//! let produced = Array::build(Arguments::producer(1..=3));
//! assert_eq!(positional, nested);
//! assert_eq!(nested, produced);
//!
//! let longer = positional + vec![4, 5];
//! assert_eq!(longer.to_string(), "[1, 2, 3, 4, 5]");
//! ```

use std::any::Any;
use std::fmt;
use std::ops::{Add, Index};

use crate::collect::{Arguments, collect};
use crate::error::Result;

use super::{Dynamic, DynamicArray};

/// Builds an [`Array`](crate::sequence::Array) from positional values.
///
/// # Examples
///
/// ```rust
/// use fpbox::array;
/// use fpbox::sequence::Array;
///
/// let empty: Array<i32> = array![];
/// assert!(empty.is_empty());
/// assert_eq!(array!['a', 'b'].len(), 2);
/// ```
#[macro_export]
macro_rules! array {
    () => {
        $crate::sequence::Array::build($crate::collect::Arguments::Variadic(::std::vec::Vec::new()))
    };
    ($($element:expr),+ $(,)?) => {
        $crate::sequence::Array::build($crate::collect::Arguments::Variadic(::std::vec![$($element),+]))
    };
}

/// An immutable ordered sequence of values of one type.
///
/// # Rendering
///
/// `Display` renders `[a, b, c]` using each element's `Display`; an
/// `Array<Char>` renders as a quoted string instead (see
/// [`Char`](super::Char)). `Debug` always renders the element list.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Array<T> {
    items: Vec<T>,
}

impl<T> Array<T> {
    /// Creates an empty array.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Builds an array from arguments in any shape the collector accepts.
    pub fn build<'a>(arguments: impl Into<Arguments<'a, T>>) -> Self
    where
        T: 'a,
    {
        Self {
            items: collect(arguments),
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the array has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrows the element at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// The first element.
    #[inline]
    pub fn head(&self) -> Option<&T> {
        self.items.first()
    }

    /// The last element.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Views the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Unwraps the elements.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Any> Array<T> {
    /// Builds an array from values whose types are only known at runtime.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`](crate::Error::TypeMismatch) if the
    /// values do not share one runtime type, or if that type is not `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpbox::sequence::{Array, Dynamic};
    ///
    /// let numbers = Array::<i32>::from_dynamic(vec![Dynamic::new(1), Dynamic::new(2)]);
    /// assert_eq!(numbers.unwrap().as_slice(), &[1, 2]);
    ///
    /// let mixed = Array::<i32>::from_dynamic(vec![Dynamic::new(1), Dynamic::new("2")]);
    /// assert!(mixed.is_err());
    /// ```
    pub fn from_dynamic<'a>(arguments: impl Into<Arguments<'a, Dynamic>>) -> Result<Self> {
        DynamicArray::build(arguments)?.downcast()
    }
}

impl<T: Clone> Array<T> {
    /// Everything after the first element; empty if there is none.
    #[must_use]
    pub fn tail(&self) -> Self {
        self.items.get(1..).map_or_else(Self::new, |rest| Self::from(rest.to_vec()))
    }

    /// Everything before the last element; empty if there is none.
    #[must_use]
    pub fn init(&self) -> Self {
        self.items
            .split_last()
            .map_or_else(Self::new, |(_, rest)| Self::from(rest.to_vec()))
    }

    /// The elements in reverse order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.items.iter().rev().cloned().collect()
    }

    /// Returns a new array holding these elements followed by `other`.
    ///
    /// `other` may be another `Array`, a `Vec`, a slice, or a lazy producer.
    #[must_use]
    pub fn concat<'a>(&self, other: impl Into<Arguments<'a, T>>) -> Self
    where
        T: 'a,
    {
        let mut items = self.items.clone();
        items.extend(collect(other));
        Self { items }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Array<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Array<T> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> From<Array<T>> for Vec<T> {
    #[inline]
    fn from(array: Array<T>) -> Self {
        array.items
    }
}

impl<T> From<Array<T>> for Arguments<'_, T> {
    fn from(array: Array<T>) -> Self {
        Self::Nested(array.items)
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Array<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> AsRef<[T]> for Array<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> Index<usize> for Array<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> Add for Array<T> {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self.items.extend(other.items);
        self
    }
}

impl<T> Add<Vec<T>> for Array<T> {
    type Output = Self;

    fn add(mut self, other: Vec<T>) -> Self {
        self.items.extend(other);
        self
    }
}

impl<T: Clone> Add<&[T]> for Array<T> {
    type Output = Self;

    fn add(mut self, other: &[T]) -> Self {
        self.items.extend_from_slice(other);
        self
    }
}

impl<T: fmt::Debug> fmt::Debug for Array<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Array<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in &self.items {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Array<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(&self.items)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Array<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}
