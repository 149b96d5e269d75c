//! Type-erased homogeneous sequences.

use std::any::{Any, TypeId, type_name};
use std::fmt;

use crate::collect::{Arguments, collect};
use crate::error::{Error, Result};

use super::{Array, Dynamic, check_homogeneous};

/// An immutable sequence of [`Dynamic`] values that all share one runtime
/// type.
///
/// This is the validating boundary in front of [`Array`]: heterogeneous
/// input is checked here, once, and a checked sequence can then be turned
/// into a statically typed `Array<T>` with [`DynamicArray::downcast`].
///
/// An empty `DynamicArray` has no element type; the first non-empty
/// concatenation fixes it.
///
/// # Examples
///
/// ```rust
/// use fpbox::Error;
/// use fpbox::sequence::{Dynamic, DynamicArray};
///
/// let numbers = DynamicArray::build(vec![Dynamic::new(1), Dynamic::new(2)]).unwrap();
/// assert_eq!(numbers.element_type(), Some("i32"));
///
/// let mixed = numbers.concat(vec![Dynamic::new("three")]);
/// assert!(matches!(mixed, Err(Error::TypeMismatch { index: 2, .. })));
/// ```
pub struct DynamicArray {
    items: Vec<Dynamic>,
}

impl DynamicArray {
    /// Creates an empty, unconstrained sequence.
    #[inline]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Collects `arguments` and checks that they are homogeneous.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if two values have different runtime
    /// types.
    pub fn build<'a>(arguments: impl Into<Arguments<'a, Dynamic>>) -> Result<Self> {
        let items = collect(arguments);
        check_homogeneous(&items)?;
        Ok(Self { items })
    }

    /// Appends `other` and re-validates the combined sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the two sides hold different
    /// runtime types.
    pub fn concat<'a>(self, other: impl Into<Arguments<'a, Dynamic>>) -> Result<Self> {
        let mut items = self.items;
        items.extend(collect(other));
        check_homogeneous(&items)?;
        Ok(Self { items })
    }

    /// The runtime type shared by all elements, or `None` when empty.
    pub fn element_type_id(&self) -> Option<TypeId> {
        self.items.first().map(Dynamic::runtime_type)
    }

    /// The name of the shared element type, or `None` when empty.
    pub fn element_type(&self) -> Option<&'static str> {
        self.items.first().map(Dynamic::type_name)
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrows the element at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Dynamic> {
        self.items.get(index)
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Dynamic> {
        self.items.iter()
    }

    /// Converts into a statically typed [`Array`].
    ///
    /// An empty sequence converts to an empty array of any element type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] at index 0 if the element type is not
    /// `T`.
    pub fn downcast<T: Any>(self) -> Result<Array<T>> {
        let mut values = Vec::with_capacity(self.items.len());
        for (index, item) in self.items.into_iter().enumerate() {
            match item.downcast::<T>() {
                Ok(value) => values.push(value),
                Err(item) => {
                    let error = Error::TypeMismatch {
                        index,
                        expected: type_name::<T>(),
                        found: item.type_name(),
                    };
                    tracing::debug!(%error, "dynamic sequence holds another element type");
                    return Err(error);
                }
            }
        }
        Ok(Array::from(values))
    }
}

impl Default for DynamicArray {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl From<DynamicArray> for Arguments<'_, Dynamic> {
    fn from(array: DynamicArray) -> Self {
        Self::Nested(array.items)
    }
}

impl IntoIterator for DynamicArray {
    type Item = Dynamic;
    type IntoIter = std::vec::IntoIter<Dynamic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a DynamicArray {
    type Item = &'a Dynamic;
    type IntoIter = std::slice::Iter<'a, Dynamic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Debug for DynamicArray {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.items.iter()).finish()
    }
}
