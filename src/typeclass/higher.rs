//! Higher-kinded type emulation through generic associated types.
//!
//! We cannot write a trait that abstracts over `Vec<_>` or `Array<_>` as
//! type constructors directly, so the constructor is recovered from a fully
//! applied type through [`TypeConstructor::WithType`].

use std::collections::VecDeque;

use crate::sequence::Array;

/// A container type applied to some element type.
///
/// # Laws
///
/// For any `F: TypeConstructor`, `F::WithType<F::Inner>` is `F`.
///
/// # Example
///
/// ```rust
/// use fpbox::sequence::Array;
/// use fpbox::typeclass::TypeConstructor;
///
/// fn assert_family<T: TypeConstructor<WithType<char> = Array<char>>>() {}
/// assert_family::<Array<i32>>();
/// ```
pub trait TypeConstructor {
    /// The element type the constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}

impl<T> TypeConstructor for VecDeque<T> {
    type Inner = T;
    type WithType<B> = VecDeque<B>;
}

impl<T> TypeConstructor for Array<T> {
    type Inner = T;
    type WithType<B> = Array<B>;
}
