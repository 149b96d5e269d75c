//! # fpbox
//!
//! A small functional programming toolbox: an immutable homogeneous
//! [`Array`](sequence::Array), a lazy [`Stream`](stream::Stream) pipeline,
//! and generic combinators built on top of them.
//!
//! ## Overview
//!
//! - **Collector**: [`collect`] normalizes positional, nested and lazy
//!   argument shapes into one ordered sequence
//! - **Sequences**: [`Array`](sequence::Array), [`Char`](sequence::Char),
//!   and the runtime homogeneity check for type-erased input
//! - **Streams**: deferred `map`, `filter`, `reduce`, `take_while`,
//!   `drop_while` stages, drawn only on demand
//! - **Combinators**: strict `map`/`filter`/folds, `partition`, `binmap`,
//!   `compose`, `curry`
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for `Array` and `Char`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fpbox::prelude::*;
//!
//! let words = array!["apple", "kiwi", "banana", "fig"];
//! let (long, short) = partition(|word: &&str| word.len() > 4, words);
//! assert_eq!(long.to_string(), "[apple, banana]");
//! assert_eq!(short.to_string(), "[kiwi, fig]");
//!
//! let squares_below_fifty = Stream::new(1..)
//!     .map(|x: u32| x * x)
//!     .take_while(|x| *x < 50)
//!     .to_array();
//! assert_eq!(squares_below_fifty, array![1, 4, 9, 16, 25, 36, 49]);
//!
//! assert_eq!(chars_of("fp").to_string(), "\"fp\"");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the data types, the combinators and the macros.
///
/// # Usage
///
/// ```rust
/// use fpbox::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collect::{Arguments, collect};
    pub use crate::combinators::*;
    pub use crate::error::Error;
    pub use crate::sequence::*;
    pub use crate::stream::Stream;
    pub use crate::typeclass::TypeConstructor;
    pub use crate::{array, compose, curry};
}

pub mod collect;
pub mod combinators;
pub mod error;
pub mod sequence;
pub mod stream;
pub mod typeclass;

pub use error::{Error, Result};

static_assertions::assert_impl_all!(sequence::Array<i32>: Send, Sync, Clone, Eq, std::hash::Hash);
static_assertions::assert_impl_all!(sequence::Char: Send, Sync, Copy, Eq, Ord);
static_assertions::assert_impl_all!(Error: std::error::Error, Send, Sync, Clone);
static_assertions::assert_not_impl_any!(sequence::Char: std::fmt::Display);
static_assertions::assert_not_impl_any!(sequence::Dynamic: Send, Sync, Clone);
