//! Container-family abstraction for the strict combinators.
//!
//! Strict combinators such as [`map`](crate::combinators::map) rebuild their
//! result in the same container family as their input: mapping over a
//! `Vec<i32>` yields a `Vec<B>`, mapping over an `Array<i32>` yields an
//! `Array<B>`. Rust has no higher-kinded types, so [`TypeConstructor`]
//! emulates "the same container applied to another element type" through a
//! generic associated type.
//!
//! # Examples
//!
//! ```rust
//! use fpbox::typeclass::TypeConstructor;
//!
//! fn rebuild<C, B>(container: C, function: impl FnMut(C::Inner) -> B) -> C::WithType<B>
//! where
//!     C: TypeConstructor + IntoIterator<Item = <C as TypeConstructor>::Inner>,
//!     C::WithType<B>: FromIterator<B>,
//! {
//!     container.into_iter().map(function).collect()
//! }
//!
//! let lengths: Vec<usize> = rebuild(vec!["a", "bb"], str::len);
//! assert_eq!(lengths, vec![1, 2]);
//! ```

mod higher;

pub use higher::TypeConstructor;
