//! One pull-based iterator per pipeline stage.
//!
//! Each stage owns its upstream iterator and draws from it only inside
//! `next`. Constructing a stage never touches the upstream.

use std::fmt;

/// Yields `function(x)` for each upstream element `x`.
#[derive(Clone)]
pub struct Map<I, F> {
    source: I,
    function: F,
}

impl<I, F> Map<I, F> {
    pub(super) const fn new(source: I, function: F) -> Self {
        Self { source, function }
    }
}

impl<B, I: Iterator, F: FnMut(I::Item) -> B> Iterator for Map<I, F> {
    type Item = B;

    #[inline]
    fn next(&mut self) -> Option<B> {
        self.source.next().map(&mut self.function)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

/// Yields the upstream elements that satisfy the predicate.
#[derive(Clone)]
pub struct Filter<I, P> {
    source: I,
    predicate: P,
}

impl<I, P> Filter<I, P> {
    pub(super) const fn new(source: I, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<I: Iterator, P: FnMut(&I::Item) -> bool> Iterator for Filter<I, P> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let element = self.source.next()?;
            if (self.predicate)(&element) {
                return Some(element);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

/// Yields upstream elements until the first one that fails the predicate.
///
/// The failing element is consumed from the upstream but never yielded, and
/// nothing after it is ever drawn.
#[derive(Clone)]
pub struct TakeWhile<I, P> {
    source: I,
    predicate: P,
    finished: bool,
}

impl<I, P> TakeWhile<I, P> {
    pub(super) const fn new(source: I, predicate: P) -> Self {
        Self {
            source,
            predicate,
            finished: false,
        }
    }
}

impl<I: Iterator, P: FnMut(&I::Item) -> bool> Iterator for TakeWhile<I, P> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.finished {
            return None;
        }
        let element = self.source.next()?;
        if (self.predicate)(&element) {
            Some(element)
        } else {
            self.finished = true;
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            (0, self.source.size_hint().1)
        }
    }
}

/// Skips upstream elements while the predicate holds, then yields the rest
/// unconditionally.
#[derive(Clone)]
pub struct DropWhile<I, P> {
    source: I,
    predicate: P,
    dropping: bool,
}

impl<I, P> DropWhile<I, P> {
    pub(super) const fn new(source: I, predicate: P) -> Self {
        Self {
            source,
            predicate,
            dropping: true,
        }
    }
}

impl<I: Iterator, P: FnMut(&I::Item) -> bool> Iterator for DropWhile<I, P> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if !self.dropping {
            return self.source.next();
        }
        loop {
            let element = self.source.next()?;
            if !(self.predicate)(&element) {
                self.dropping = false;
                return Some(element);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        if self.dropping { (0, upper) } else { (lower, upper) }
    }
}

/// Yields one value: the left fold of the whole upstream without a seed.
///
/// Drawing that value drains the upstream. An empty upstream yields
/// nothing.
#[derive(Clone)]
pub struct Reduce<I, F> {
    source: I,
    function: F,
    finished: bool,
}

impl<I, F> Reduce<I, F> {
    pub(super) const fn new(source: I, function: F) -> Self {
        Self {
            source,
            function,
            finished: false,
        }
    }
}

impl<I: Iterator, F: FnMut(I::Item, I::Item) -> I::Item> Iterator for Reduce<I, F> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.finished {
            return None;
        }
        self.finished = true;
        let first = self.source.next()?;
        Some(self.source.by_ref().fold(first, &mut self.function))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished { (0, Some(0)) } else { (0, Some(1)) }
    }
}

/// Yields one value: the left fold of the whole upstream from a seed.
#[derive(Clone)]
pub struct Fold<I, B, F> {
    source: I,
    seed: Option<B>,
    function: F,
}

impl<I, B, F> Fold<I, B, F> {
    pub(super) const fn new(source: I, seed: B, function: F) -> Self {
        Self {
            source,
            seed: Some(seed),
            function,
        }
    }
}

impl<I: Iterator, B, F: FnMut(B, I::Item) -> B> Iterator for Fold<I, B, F> {
    type Item = B;

    fn next(&mut self) -> Option<B> {
        let seed = self.seed.take()?;
        Some(self.source.by_ref().fold(seed, &mut self.function))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.seed.is_some());
        (remaining, Some(remaining))
    }
}

/// The argument order a [`Pairwise`] stage passes neighbours in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOrder {
    /// `function(xs[i], xs[i + 1])`
    Forward,
    /// `function(xs[i + 1], xs[i])`
    Flipped,
}

/// Yields `function` applied to each pair of upstream neighbours.
///
/// `n` upstream elements produce `n - 1` values; fewer than two produce
/// none.
pub struct Pairwise<I: Iterator, F> {
    source: I,
    function: F,
    order: PairOrder,
    previous: Option<I::Item>,
    started: bool,
}

impl<I: Iterator, F> Pairwise<I, F> {
    pub(super) const fn new(source: I, function: F, order: PairOrder) -> Self {
        Self {
            source,
            function,
            order,
            previous: None,
            started: false,
        }
    }
}

impl<I, F> Clone for Pairwise<I, F>
where
    I: Iterator + Clone,
    I::Item: Clone,
    F: Clone,
{
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            function: self.function.clone(),
            order: self.order,
            previous: self.previous.clone(),
            started: self.started,
        }
    }
}

impl<B, I, F> Iterator for Pairwise<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> B,
{
    type Item = B;

    fn next(&mut self) -> Option<B> {
        if !self.started {
            self.started = true;
            self.previous = self.source.next();
        }
        let left = self.previous.take()?;
        let right = self.source.next()?;
        self.previous = Some(right.clone());
        Some(match self.order {
            PairOrder::Forward => (self.function)(left, right),
            PairOrder::Flipped => (self.function)(right, left),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        if self.started {
            if self.previous.is_some() { (lower, upper) } else { (0, Some(0)) }
        } else {
            (lower.saturating_sub(1), upper.map(|upper| upper.saturating_sub(1)))
        }
    }
}

macro_rules! opaque_debug {
    ($($stage:ident<$($parameter:ident),+>),+ $(,)?) => {
        $(
            impl<$($parameter),+> fmt::Debug for $stage<$($parameter),+> {
                fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                    formatter.write_str(concat!(stringify!($stage), "(<pending>)"))
                }
            }
        )+
    };
}

opaque_debug!(
    Map<I, F>,
    Filter<I, P>,
    TakeWhile<I, P>,
    DropWhile<I, P>,
    Reduce<I, F>,
    Fold<I, B, F>,
);

impl<I: Iterator, F> fmt::Debug for Pairwise<I, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Pairwise({:?}, <pending>)", self.order)
    }
}
