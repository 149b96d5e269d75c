//! Currying with an explicitly declared arity.
//!
//! A function is wrapped once with [`curry`] together with its [`Arity`];
//! the resulting [`Curried`] wrapper accepts one argument per application.
//! Applying a wrapper never mutates it: each application returns a fresh
//! [`Application`], so one partially applied wrapper can be reused as the
//! base of several independent calls.
//!
//! Arguments are passed to the wrapped function as a slice, in the order
//! they were supplied.
//!
//! Functions of positional parameters, including parameters of different
//! types, are curried with the [`curry!`](crate::curry!) macro instead.
//!
//! # Examples
//!
//! ```rust
//! use fpbox::combinators::{Arity, curry};
//!
//! let pair = curry(Arity::Fixed(2), |arguments: &[i32]| (arguments[0], arguments[1])).unwrap();
//!
//! let ten_first = pair.apply(10).into_partial().unwrap();
//! assert_eq!(ten_first.apply(20).into_value(), Some((10, 20)));
//! assert_eq!(ten_first.apply(30).into_value(), Some((10, 30)));
//! ```

use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::error::{Error, Result};

/// The declared parameter count of a function handed to [`curry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// Exactly this many parameters.
    Fixed(usize),
    /// Any number of parameters.
    Variadic,
}

impl fmt::Display for Arity {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(count) => write!(formatter, "arity {count}"),
            Self::Variadic => formatter.write_str("variadic arity"),
        }
    }
}

/// A function waiting for its remaining arguments.
pub struct Curried<'f, A, R> {
    function: Rc<dyn Fn(&[A]) -> R + 'f>,
    arity: usize,
    supplied: SmallVec<[A; 4]>,
}

/// The outcome of supplying one argument to a [`Curried`] function.
#[derive(Debug)]
pub enum Application<'f, A, R> {
    /// More arguments are needed.
    Partial(Curried<'f, A, R>),
    /// Every argument was supplied and the function ran.
    Saturated(R),
}

/// Wraps `function`, which takes its arguments as a slice of exactly
/// `arity` values, for one-argument-at-a-time application.
///
/// # Errors
///
/// Returns [`Error::UncurriableFunction`] when `arity` is
/// [`Arity::Variadic`] or [`Arity::Fixed`]`(0)`: neither has a point at
/// which the function is saturated.
pub fn curry<'f, A, R, F>(arity: Arity, function: F) -> Result<Curried<'f, A, R>>
where
    F: Fn(&[A]) -> R + 'f,
{
    match arity {
        Arity::Fixed(count) if count > 0 => Ok(Curried {
            function: Rc::new(function),
            arity: count,
            supplied: SmallVec::new(),
        }),
        _ => {
            let error = Error::UncurriableFunction { arity };
            tracing::debug!(%error, "rejected curry");
            Err(error)
        }
    }
}

impl<'f, A: Clone, R> Curried<'f, A, R> {
    /// Supplies the next argument.
    ///
    /// Runs the wrapped function if `argument` is the last one it needs;
    /// otherwise returns a new wrapper carrying every argument supplied so
    /// far. `self` is left untouched either way.
    pub fn apply(&self, argument: A) -> Application<'f, A, R> {
        let mut supplied = self.supplied.clone();
        supplied.push(argument);
        if supplied.len() == self.arity {
            Application::Saturated((self.function)(&supplied))
        } else {
            Application::Partial(Self {
                function: Rc::clone(&self.function),
                arity: self.arity,
                supplied,
            })
        }
    }
}

impl<A, R> Curried<'_, A, R> {
    /// The declared arity of the wrapped function.
    #[must_use]
    pub const fn arity(&self) -> Arity {
        Arity::Fixed(self.arity)
    }

    /// The arguments supplied so far, in order.
    #[must_use]
    pub fn supplied(&self) -> &[A] {
        &self.supplied
    }

    /// How many arguments are still needed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.arity - self.supplied.len()
    }
}

impl<A: Clone, R> Clone for Curried<'_, A, R> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
            arity: self.arity,
            supplied: self.supplied.clone(),
        }
    }
}

impl<A: fmt::Debug, R> fmt::Debug for Curried<'_, A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Curried")
            .field("arity", &self.arity)
            .field("supplied", &self.supplied.as_slice())
            .finish_non_exhaustive()
    }
}

impl<'f, A: Clone, R> Application<'f, A, R> {
    /// Supplies the next argument to a partial application.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigurationError`] if the function already ran.
    pub fn apply(self, argument: A) -> Result<Self> {
        match self {
            Self::Partial(curried) => Ok(curried.apply(argument)),
            Self::Saturated(_) => Err(Error::ConfigurationError {
                combinator: "curry",
                reason: "every argument was already supplied",
            }),
        }
    }
}

impl<'f, A, R> Application<'f, A, R> {
    /// Returns `true` if the wrapped function ran.
    #[must_use]
    pub const fn is_saturated(&self) -> bool {
        matches!(self, Self::Saturated(_))
    }

    /// The function's result, if it ran.
    #[must_use]
    pub fn into_value(self) -> Option<R> {
        match self {
            Self::Saturated(value) => Some(value),
            Self::Partial(_) => None,
        }
    }

    /// The wrapper awaiting more arguments, if the function has not run.
    #[must_use]
    pub fn into_partial(self) -> Option<Curried<'f, A, R>> {
        match self {
            Self::Partial(curried) => Some(curried),
            Self::Saturated(_) => None,
        }
    }
}

/// Curries a function of positional parameters with a statically declared
/// arity.
///
/// `curry!(f, n)` turns `f(a1, ..., an)` into `n` nested single-argument
/// closures, so the parameters may have different types. The function and
/// every argument supplied before the last are shared through [`Rc`], and
/// each call clones them out again, so any partial application can be
/// called any number of times.
///
/// Arities 1 through 6 are supported. Arity 0 has no point at which the
/// function could be saturated and is rejected at compile time.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - Argument types (except the last) must implement [`Clone`]
///
/// # Examples
///
/// ```rust
/// use fpbox::curry;
///
/// fn label(count: usize, noun: &str) -> String {
///     format!("{count} {noun}")
/// }
///
/// let curried = curry!(label, 2);
/// let three = curried(3);
/// assert_eq!(three("apples"), "3 apples");
/// assert_eq!(three("pears"), "3 pears");
/// ```
///
/// ```compile_fail
/// use fpbox::curry;
///
/// let nothing = curry!(|| 0, 0);
/// ```
///
/// [`Rc`]: std::rc::Rc
#[macro_export]
macro_rules! curry {
    (@curried $function:ident [$($bound:ident)*] $last:ident) => {
        move |$last| {
            $function(
                $(::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&$bound)),)*
                $last,
            )
        }
    };
    (@curried $function:ident [$($bound:ident)*] $next:ident $($rest:ident)+) => {
        move |$next| {
            let $function = ::std::rc::Rc::clone(&$function);
            $(let $bound = ::std::rc::Rc::clone(&$bound);)*
            let $next = ::std::rc::Rc::new($next);
            $crate::curry!(@curried $function [$($bound)* $next] $($rest)+)
        }
    };
    ($function:expr, 0 $(,)?) => {
        ::std::compile_error!("cannot curry a function with arity 0")
    };
    ($function:expr, 1 $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        $crate::curry!(@curried function [] arg1)
    }};
    ($function:expr, 2 $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        $crate::curry!(@curried function [] arg1 arg2)
    }};
    ($function:expr, 3 $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        $crate::curry!(@curried function [] arg1 arg2 arg3)
    }};
    ($function:expr, 4 $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        $crate::curry!(@curried function [] arg1 arg2 arg3 arg4)
    }};
    ($function:expr, 5 $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        $crate::curry!(@curried function [] arg1 arg2 arg3 arg4 arg5)
    }};
    ($function:expr, 6 $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        $crate::curry!(@curried function [] arg1 arg2 arg3 arg4 arg5 arg6)
    }};
    ($function:expr, $arity:literal $(,)?) => {
        ::std::compile_error!("curry! supports arities 1 through 6")
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    fn pair(arguments: &[i32]) -> (i32, i32) {
        (arguments[0], arguments[1])
    }

    #[test]
    fn arguments_arrive_in_supplied_order() {
        let curried = curry(Arity::Fixed(2), pair).unwrap();
        let forward = curried.apply(10).apply(20).unwrap().into_value();
        let backward = curried.apply(20).apply(10).unwrap().into_value();
        assert_eq!(forward, Some((10, 20)));
        assert_eq!(backward, Some((20, 10)));
    }

    #[test]
    fn partial_application_can_be_reused() {
        let curried = curry(Arity::Fixed(3), |xs: &[i32]| xs.iter().sum::<i32>()).unwrap();
        let base = curried.apply(1).apply(2).unwrap().into_partial().unwrap();
        assert_eq!(base.supplied(), &[1, 2]);
        assert_eq!(base.remaining(), 1);

        assert_eq!(base.apply(10).into_value(), Some(13));
        assert_eq!(base.apply(20).into_value(), Some(23));
        assert_eq!(base.supplied(), &[1, 2]);
    }

    #[test]
    fn function_runs_only_when_saturated() {
        let calls = Cell::new(0);
        let curried = curry(Arity::Fixed(2), |xs: &[i32]| {
            calls.set(calls.get() + 1);
            xs[0] * xs[1]
        })
        .unwrap();

        let partial = curried.apply(6);
        assert!(!partial.is_saturated());
        assert_eq!(calls.get(), 0);

        let done = partial.apply(7).unwrap();
        assert!(done.is_saturated());
        assert_eq!(calls.get(), 1);
        assert_eq!(done.into_value(), Some(42));
    }

    #[test]
    fn unary_function_saturates_on_first_application() {
        let curried = curry(Arity::Fixed(1), |xs: &[&str]| xs[0].len()).unwrap();
        assert_eq!(curried.arity(), Arity::Fixed(1));
        assert_eq!(curried.apply("four").into_value(), Some(4));
    }

    #[rstest]
    #[case(Arity::Variadic)]
    #[case(Arity::Fixed(0))]
    fn uncurriable_arity_fails_at_wrap_time(#[case] arity: Arity) {
        let result = curry(arity, |xs: &[i32]| xs.len());
        assert_eq!(result.unwrap_err(), Error::UncurriableFunction { arity });
    }

    #[test]
    fn applying_a_saturated_result_is_an_error() {
        let curried = curry(Arity::Fixed(1), |xs: &[i32]| xs[0]).unwrap();
        let result = curried.apply(1).apply(2);
        assert!(matches!(
            result,
            Err(Error::ConfigurationError { combinator: "curry", .. })
        ));
    }

    #[rstest]
    #[case(Arity::Fixed(3), "arity 3")]
    #[case(Arity::Variadic, "variadic arity")]
    fn arity_display(#[case] arity: Arity, #[case] expected: &str) {
        assert_eq!(arity.to_string(), expected);
    }

    #[test]
    fn debug_shows_progress() {
        let curried = curry(Arity::Fixed(2), pair).unwrap();
        let partial = curried.apply(5).into_partial().unwrap();
        assert_eq!(format!("{partial:?}"), "Curried { arity: 2, supplied: [5], .. }");
    }

    fn describe(count: u8, name: String, price: f64) -> String {
        format!("{count} x {name} @ {price:.2}")
    }

    #[test]
    fn positional_parameters_of_different_types() {
        let curried = crate::curry!(describe, 3);
        assert_eq!(curried(2)(String::from("tea"))(1.5), "2 x tea @ 1.50");
    }

    #[test]
    fn positional_partial_application_can_be_reused() {
        let curried = crate::curry!(describe, 3);
        let two_teas = curried(2)(String::from("tea"));
        assert_eq!(two_teas(1.0), "2 x tea @ 1.00");
        assert_eq!(two_teas(2.25), "2 x tea @ 2.25");

        let two = curried(2);
        assert_eq!(two(String::from("jam"))(3.0), "2 x jam @ 3.00");
        assert_eq!(two(String::from("bread"))(0.5), "2 x bread @ 0.50");
    }

    #[test]
    fn positional_function_runs_only_when_saturated() {
        let calls = Cell::new(0);
        let curried = crate::curry!(
            |left: i32, right: i32| {
                calls.set(calls.get() + 1);
                left - right
            },
            2
        );

        let ten_minus = curried(10);
        assert_eq!(calls.get(), 0);
        assert_eq!(ten_minus(3), 7);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn positional_arity_one_and_six() {
        let length = crate::curry!(|text: &str| text.len(), 1);
        assert_eq!(length("four"), 4);

        let sum = crate::curry!(
            |a: i32, b: i32, c: i32, d: i32, e: i32, f: i32| a + b + c + d + e + f,
            6
        );
        assert_eq!(sum(1)(2)(3)(4)(5)(6), 21);
    }
}
