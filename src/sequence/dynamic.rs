//! Values whose type is only known at runtime.
//!
//! [`Dynamic`] is the boundary type for input that arrives heterogeneous:
//! it pairs a type-erased value with the name of its concrete type so that
//! homogeneity failures can be reported precisely.

use std::any::{Any, TypeId, type_name};
use std::fmt;

/// A type-erased value tagged with its concrete runtime type.
///
/// Two `Dynamic` values have the same runtime type exactly when their
/// concrete types are the same nominal type.
///
/// # Examples
///
/// ```rust
/// use fpbox::sequence::Dynamic;
///
/// let number = Dynamic::new(42_i32);
/// assert!(number.is::<i32>());
/// assert!(!number.is::<i64>());
/// assert_eq!(number.downcast::<i32>().ok(), Some(42));
/// ```
pub struct Dynamic {
    value: Box<dyn Any>,
    type_name: &'static str,
}

impl Dynamic {
    /// Erases the type of `value`, remembering its name.
    pub fn new<T: Any>(value: T) -> Self {
        Self {
            value: Box::new(value),
            type_name: type_name::<T>(),
        }
    }

    /// The [`TypeId`] of the wrapped value's concrete type.
    pub fn runtime_type(&self) -> TypeId {
        Any::type_id(&*self.value)
    }

    /// The name of the wrapped value's concrete type.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns `true` if the wrapped value is exactly a `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Borrows the wrapped value as a `T`, if that is its type.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Recovers the wrapped value as a `T`, or gives `self` back unchanged.
    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        let type_name = self.type_name;
        self.value
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|value| Self { value, type_name })
    }
}

impl fmt::Debug for Dynamic {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Dynamic(<{}>)", self.type_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn runtime_type_is_the_concrete_type() {
        let value = Dynamic::new(String::from("text"));
        assert_eq!(value.runtime_type(), TypeId::of::<String>());
        assert_ne!(value.runtime_type(), TypeId::of::<Box<dyn Any>>());
    }

    #[rstest]
    #[case(Dynamic::new(1_u8), "u8")]
    #[case(Dynamic::new(1.5_f64), "f64")]
    #[case(Dynamic::new("str"), "&str")]
    fn type_name_is_recorded(#[case] value: Dynamic, #[case] expected: &str) {
        assert_eq!(value.type_name(), expected);
    }

    #[test]
    fn failed_downcast_returns_the_value() {
        let value = Dynamic::new(7_i32);
        let value = value.downcast::<i64>().unwrap_err();
        assert_eq!(value.type_name(), "i32");
        assert_eq!(value.downcast_ref::<i32>(), Some(&7));
    }

    #[test]
    fn debug_shows_the_type_name() {
        assert_eq!(format!("{:?}", Dynamic::new(true)), "Dynamic(<bool>)");
    }
}
