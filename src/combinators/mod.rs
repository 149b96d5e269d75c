//! Generic combinators.
//!
//! - Strict sequence combinators ([`map`], [`filter`], [`partition`],
//!   [`binmap`], folds) drain their input and rebuild the result in the
//!   caller's container family, so a `Vec` in gives a `Vec` out and an
//!   [`Array`](crate::sequence::Array) in gives an `Array` out.
//! - [`head`], [`last`], [`tail`] and [`init`] take the ends of any
//!   sequence; `tail` and `init` keep the container family too.
//! - Function combinators ([`c`], [`compose`], [`flip`], [`identity`])
//!   build new functions and never touch sequences.
//! - [`curry`] wraps a function of declared [`Arity`] for
//!   one-argument-at-a-time application; the [`curry!`](crate::curry!)
//!   macro does the same for functions of positional parameters.
//!
//! # Examples
//!
//! ```rust
//! use fpbox::array;
//! use fpbox::combinators::{binmap, partition};
//!
//! let (even, odd) = partition(|x: &i32| x % 2 == 0, array![1, 2, 3, 4]);
//! assert_eq!(even, array![2, 4]);
//! assert_eq!(odd, array![1, 3]);
//!
//! assert_eq!(binmap(|x: i32, y: i32| y - x, vec![1, 4, 9]), vec![3, 5]);
//! ```

mod compose;
mod curry;
mod strict;

pub use compose::{Function, boxed, c, compose, flip, identity};
pub use curry::{Application, Arity, Curried, curry};
pub use strict::{
    binmap, filter, flipped_binmap, foldl, foldr, head, init, last, map, partition, reduce,
    reverse, sum, tail,
};
