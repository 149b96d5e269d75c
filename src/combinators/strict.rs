//! Strict combinators over whole sequences.
//!
//! Each function drains its input through a [`Stream`] pipeline and
//! rebuilds the result in the caller's container family: a `Vec` in gives a
//! `Vec` out, an [`Array`](crate::sequence::Array) in gives an `Array` out.

use std::ops::Add;

use crate::stream::Stream;
use crate::typeclass::TypeConstructor;

use super::flip;

/// Applies `function` to every element, keeping the container family.
///
/// # Examples
///
/// ```rust
/// use fpbox::array;
/// use fpbox::combinators::map;
///
/// assert_eq!(map(|x: i32| x * 2, vec![1, 2, 3]), vec![2, 4, 6]);
/// assert_eq!(map(|c: char| c.to_digit(10), array!['1', '2']), array![Some(1), Some(2)]);
/// ```
pub fn map<C, B, F>(function: F, xs: C) -> C::WithType<B>
where
    C: TypeConstructor + IntoIterator<Item = <C as TypeConstructor>::Inner>,
    C::WithType<B>: FromIterator<B>,
    F: FnMut(<C as TypeConstructor>::Inner) -> B,
{
    Stream::new(xs).map(function).collect()
}

/// Keeps the elements for which `predicate` holds, in order.
///
/// # Examples
///
/// ```rust
/// use fpbox::combinators::filter;
///
/// assert_eq!(filter(|x: &i32| x % 2 == 1, vec![1, 2, 3, 4, 5]), vec![1, 3, 5]);
/// ```
pub fn filter<C, P>(predicate: P, xs: C) -> C
where
    C: IntoIterator + FromIterator<C::Item>,
    P: FnMut(&C::Item) -> bool,
{
    Stream::new(xs).filter(predicate).collect()
}

/// Splits `xs` into the elements that satisfy `predicate` and those that
/// do not, both in the caller's container family and both in input order.
///
/// `predicate` is called exactly once per element.
///
/// # Examples
///
/// ```rust
/// use fpbox::combinators::partition;
///
/// let (small, large) = partition(|x: &i32| *x < 3, vec![4, 1, 3, 2]);
/// assert_eq!(small, vec![1, 2]);
/// assert_eq!(large, vec![4, 3]);
/// ```
pub fn partition<C, P>(mut predicate: P, xs: C) -> (C, C)
where
    C: IntoIterator + FromIterator<C::Item>,
    P: FnMut(&C::Item) -> bool,
{
    let mut passed = Vec::new();
    let mut failed = Vec::new();
    for element in xs {
        if predicate(&element) {
            passed.push(element);
        } else {
            failed.push(element);
        }
    }
    (passed.into_iter().collect(), failed.into_iter().collect())
}

/// Applies `function` to each pair of neighbours: `function(xs[i], xs[i + 1])`.
///
/// The result has one element fewer than `xs`, or none if `xs` has fewer
/// than two.
///
/// # Examples
///
/// ```rust
/// use fpbox::combinators::binmap;
///
/// let steps = binmap(|x: i32, y: i32| x - y, vec![10, 15, 20, 25, 30]);
/// assert_eq!(steps, vec![-5, -5, -5, -5]);
/// ```
pub fn binmap<C, B, F>(function: F, xs: C) -> C::WithType<B>
where
    C: TypeConstructor + IntoIterator<Item = <C as TypeConstructor>::Inner>,
    <C as TypeConstructor>::Inner: Clone,
    C::WithType<B>: FromIterator<B>,
    F: FnMut(<C as TypeConstructor>::Inner, <C as TypeConstructor>::Inner) -> B,
{
    Stream::new(xs).binmap(function).collect()
}

/// Like [`binmap`] with the arguments swapped: `function(xs[i + 1], xs[i])`.
///
/// # Examples
///
/// ```rust
/// use fpbox::combinators::flipped_binmap;
///
/// let steps = flipped_binmap(|x: i32, y: i32| x - y, vec![10, 15, 20, 25, 30]);
/// assert_eq!(steps, vec![5, 5, 5, 5]);
/// ```
pub fn flipped_binmap<C, B, F>(function: F, xs: C) -> C::WithType<B>
where
    C: TypeConstructor + IntoIterator<Item = <C as TypeConstructor>::Inner>,
    <C as TypeConstructor>::Inner: Clone,
    C::WithType<B>: FromIterator<B>,
    F: Fn(<C as TypeConstructor>::Inner, <C as TypeConstructor>::Inner) -> B,
{
    binmap(flip(function), xs)
}

/// Left fold: `function(...function(function(initial, x1), x2)..., xn)`.
///
/// # Examples
///
/// ```rust
/// use fpbox::combinators::foldl;
///
/// assert_eq!(foldl(|acc: i32, x: i32| acc - x, 10, vec![1, 2, 3]), 4);
/// ```
pub fn foldl<I, B, F>(function: F, initial: B, xs: I) -> B
where
    I: IntoIterator,
    F: FnMut(B, I::Item) -> B,
{
    xs.into_iter().fold(initial, function)
}

/// Right fold: `function(x1, function(x2, ...function(xn, initial)))`.
///
/// # Examples
///
/// ```rust
/// use fpbox::combinators::foldr;
///
/// assert_eq!(foldr(|x: i32, acc: i32| x - acc, 0, vec![1, 2, 3]), 2);
/// ```
pub fn foldr<I, B, F>(mut function: F, initial: B, xs: I) -> B
where
    I: IntoIterator,
    I::IntoIter: DoubleEndedIterator,
    F: FnMut(I::Item, B) -> B,
{
    xs.into_iter().rev().fold(initial, |accumulator, element| function(element, accumulator))
}

/// Left fold without a seed; `None` for empty input.
///
/// # Examples
///
/// ```rust
/// use fpbox::combinators::reduce;
///
/// assert_eq!(reduce(|x: i32, y: i32| x.max(y), vec![3, 9, 2]), Some(9));
/// assert_eq!(reduce(|x: i32, y: i32| x + y, Vec::new()), None);
/// ```
pub fn reduce<I, F>(function: F, xs: I) -> Option<I::Item>
where
    I: IntoIterator,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    Stream::new(xs).reduce(function).next()
}

/// Sums the elements through their `Add` implementation; `None` for empty
/// input.
///
/// Works for any `Add`, not only numbers.
///
/// # Examples
///
/// ```rust
/// use fpbox::array;
/// use fpbox::combinators::sum;
///
/// assert_eq!(sum(vec![1, 2, 3]), Some(6));
/// assert_eq!(sum(vec![array![1], array![2, 3]]), Some(array![1, 2, 3]));
/// ```
pub fn sum<I>(xs: I) -> Option<I::Item>
where
    I: IntoIterator,
    I::Item: Add<Output = I::Item>,
{
    reduce(|left, right| left + right, xs)
}

/// Reverses the elements, keeping the container family.
///
/// # Examples
///
/// ```rust
/// use fpbox::combinators::reverse;
///
/// assert_eq!(reverse(vec![1, 2, 3]), vec![3, 2, 1]);
/// ```
pub fn reverse<C>(xs: C) -> C
where
    C: IntoIterator + FromIterator<C::Item>,
    C::IntoIter: DoubleEndedIterator,
{
    xs.into_iter().rev().collect()
}

/// The first element, if any.
///
/// # Examples
///
/// ```rust
/// use fpbox::array;
/// use fpbox::combinators::head;
///
/// assert_eq!(head(array![1, 2, 3]), Some(1));
/// assert_eq!(head(Vec::<i32>::new()), None);
/// ```
pub fn head<I: IntoIterator>(xs: I) -> Option<I::Item> {
    xs.into_iter().next()
}

/// The last element, if any.
pub fn last<I: IntoIterator>(xs: I) -> Option<I::Item> {
    xs.into_iter().last()
}

/// Everything after the first element, keeping the container family.
///
/// Empty input gives empty output.
///
/// # Examples
///
/// ```rust
/// use fpbox::array;
/// use fpbox::combinators::tail;
///
/// assert_eq!(tail(array![1, 2, 3]), array![2, 3]);
/// assert!(tail(vec!['x']).is_empty());
/// ```
pub fn tail<C>(xs: C) -> C
where
    C: IntoIterator + FromIterator<C::Item>,
{
    xs.into_iter().skip(1).collect()
}

/// Everything before the last element, keeping the container family.
///
/// Empty input gives empty output.
pub fn init<C>(xs: C) -> C
where
    C: IntoIterator + FromIterator<C::Item>,
    C::IntoIter: DoubleEndedIterator,
{
    let mut items = xs.into_iter();
    items.next_back();
    items.collect()
}
