//! Function composition.
//!
//! [`c`] composes two functions of any types. [`compose`] composes an
//! ordered list of same-typed unary functions taken in any shape the
//! collector accepts, and [`compose!`](crate::compose!) is its positional
//! form. In every case the rightmost function is applied first.
//!
//! # Laws
//!
//! - **Associativity**: `c(f, c(g, h)) == c(c(f, g), h)`
//! - **Identity**: `c(identity, f) == f == c(f, identity)`

use crate::collect::{Arguments, collect};
use crate::error::{Error, Result};

/// A boxed unary function from `T` to `T`, the element type of
/// [`compose`]'s input.
pub type Function<'f, T> = Box<dyn Fn(T) -> T + 'f>;

/// Returns the value unchanged.
///
/// The unit of composition.
///
/// # Examples
///
/// ```rust
/// use fpbox::combinators::identity;
///
/// assert_eq!(identity(42), 42);
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Swaps the arguments of a binary function: `flip(f)(b, a) == f(a, b)`.
///
/// # Examples
///
/// ```rust
/// use fpbox::combinators::flip;
///
/// let subtract_from = flip(|x: i32, y: i32| x - y);
/// assert_eq!(subtract_from(1, 10), 9);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}

/// Composes two functions: `c(f, g)(x) == f(g(x))`.
///
/// # Examples
///
/// ```rust
/// use fpbox::combinators::c;
///
/// let length_of_number = c(|s: String| s.len(), |n: i32| n.to_string());
/// assert_eq!(length_of_number(12345), 5);
/// ```
#[inline]
pub fn c<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |input| outer(inner(input))
}

/// Boxes a unary function so it can sit in a list passed to [`compose`].
#[inline]
pub fn boxed<'f, T, F>(function: F) -> Function<'f, T>
where
    F: Fn(T) -> T + 'f,
{
    Box::new(function)
}

/// Composes an ordered list of unary functions into one.
///
/// `compose([f1, f2, ..., fn])(x) == f1(f2(...fn(x)))`.
///
/// # Errors
///
/// Returns [`Error::ConfigurationError`] if the list is empty, since an
/// empty composition has no function to apply.
///
/// # Examples
///
/// ```rust
/// use fpbox::combinators::{boxed, compose};
///
/// let add_one_after_hundredfold = compose(vec![
///     boxed(|x: i32| x + 1),
///     boxed(|x: i32| x * 100),
/// ])
/// .unwrap();
/// assert_eq!(add_one_after_hundredfold(1), 101);
///
/// assert!(compose(Vec::<fpbox::combinators::Function<i32>>::new()).is_err());
/// ```
pub fn compose<'a, 'f, T: 'f>(
    functions: impl Into<Arguments<'a, Function<'f, T>>>,
) -> Result<Function<'f, T>> {
    collect(functions)
        .into_iter()
        .reduce(|outer, inner| Box::new(c(outer, inner)))
        .ok_or_else(|| {
            let error = Error::ConfigurationError {
                combinator: "compose",
                reason: "no functions to compose",
            };
            tracing::debug!(%error, "rejected empty composition");
            error
        })
}

/// Composes unary functions given positionally, rightmost first.
///
/// `compose![f, g, h]` is [`compose`] over `[f, g, h]`, so it yields a
/// `Result`. With no functions it is the empty composition and fails.
///
/// # Examples
///
/// ```rust
/// use fpbox::compose;
///
/// let composed = compose![|x: i32| x + 1, |x: i32| x * 100].unwrap();
/// assert_eq!(composed(1), 101);
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        $crate::combinators::compose($crate::collect::Arguments::Variadic(::std::vec::Vec::<
            $crate::combinators::Function<'_, _>,
        >::new()))
    };
    ($($function:expr),+ $(,)?) => {
        $crate::combinators::compose($crate::collect::Arguments::Variadic(::std::vec![
            $($crate::combinators::boxed($function)),+
        ]))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn add_one(x: i32) -> i32 {
        x + 1
    }

    fn times_hundred(x: i32) -> i32 {
        x * 100
    }

    fn minus_three(x: i32) -> i32 {
        x - 3
    }

    #[test]
    fn compose_applies_rightmost_first() {
        let composed = compose(vec![boxed(add_one), boxed(times_hundred)]).unwrap();
        assert_eq!(composed(1), 101);
    }

    #[test]
    fn compose_accepts_every_argument_shape() {
        let positional = compose![add_one, times_hundred].unwrap();
        let nested = compose([boxed(add_one), boxed(times_hundred)]).unwrap();
        let produced = compose(Arguments::producer([add_one, times_hundred].into_iter().map(boxed))).unwrap();
        for x in -3..3 {
            assert_eq!(positional(x), nested(x));
            assert_eq!(nested(x), produced(x));
        }
    }

    #[test]
    fn compose_of_one_function_is_that_function() {
        let composed = compose![minus_three].unwrap();
        assert_eq!(composed(10), 7);
    }

    #[test]
    fn empty_composition_is_a_configuration_error() {
        let result = compose(Vec::<Function<'_, i32>>::new());
        assert!(matches!(
            result,
            Err(Error::ConfigurationError { combinator: "compose", .. })
        ));
        let empty: Result<Function<'_, u8>> = compose![];
        assert!(empty.is_err());
    }

    #[rstest]
    #[case(0)]
    #[case(7)]
    #[case(-12)]
    fn composition_is_associative(#[case] x: i32) {
        let left = c(add_one, c(times_hundred, minus_three));
        let right = c(c(add_one, times_hundred), minus_three);
        assert_eq!(left(x), right(x));
    }

    #[rstest]
    #[case(0)]
    #[case(41)]
    fn identity_is_the_unit(#[case] x: i32) {
        assert_eq!(c(identity, add_one)(x), add_one(x));
        assert_eq!(c(add_one, identity)(x), add_one(x));
    }

    #[test]
    fn double_flip_is_identity() {
        let subtract = |x: i32, y: i32| x - y;
        assert_eq!(flip(flip(subtract))(10, 4), subtract(10, 4));
        assert_eq!(flip(subtract)(10, 4), subtract(4, 10));
    }

    #[test]
    fn composed_functions_may_borrow() {
        let offset = 5;
        let composed = compose![|x: i32| x + offset, |x: i32| x * offset].unwrap();
        assert_eq!(composed(2), 15);
    }
}
