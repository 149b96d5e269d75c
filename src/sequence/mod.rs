//! Homogeneous sequences and character cells.
//!
//! - [`Array`]: an immutable ordered sequence of one element type
//! - [`Char`]: a single-character cell; `Array<Char>` renders as text
//! - [`chars_of`]: the bridge from native text to `Array<Char>`
//!
//! `Array<T>` is homogeneous by its type. Input whose types are only known
//! at runtime is represented as [`Dynamic`] values and validated by the
//! homogeneity checker ([`is_homogeneous`], [`check_homogeneous`]) before it
//! can become a typed array, either directly through
//! [`Array::from_dynamic`] or through a [`DynamicArray`].
//!
//! # Examples
//!
//! ```rust
//! use fpbox::array;
//! use fpbox::sequence::{Array, Dynamic, chars_of};
//!
//! assert_eq!(array![1, 2, 3].to_string(), "[1, 2, 3]");
//! assert_eq!(chars_of("hello").to_string(), "\"hello\"");
//!
//! let checked = Array::<i32>::from_dynamic(vec![Dynamic::new(1), Dynamic::new(2.0)]);
//! assert!(checked.is_err());
//! ```

mod array;
mod char;
mod dynamic;
mod dynamic_array;
mod homogeneity;

pub use array::Array;
pub use char::{Char, chars_of};
pub use dynamic::Dynamic;
pub use dynamic_array::DynamicArray;
pub use homogeneity::{check_homogeneous, is_homogeneous};
