//! Lazy transformation pipelines.
//!
//! A [`Stream`] wraps a source producer and chains deferred stages onto it.
//! Each chaining operation wraps the current pipeline in one more
//! pull-based stage (see the types in this module) and returns a new
//! `Stream`; nothing is drawn from the source until the pipeline is pulled,
//! either element by element through [`Iterator::next`] or all at once by a
//! terminal operation such as [`Stream::to_list`].
//!
//! Terminal operations take the stream by value, so a consumed stream
//! cannot be drained a second time.
//!
//! # Examples
//!
//! ```rust
//! use fpbox::stream::Stream;
//! use std::cell::Cell;
//!
//! let drawn = Cell::new(0);
//! let source = (1..).inspect(|_| drawn.set(drawn.get() + 1));
//!
//! let pipeline = Stream::new(source)
//!     .map(|x| x * 10)
//!     .filter(|x| x % 20 == 0)
//!     .take_while(|x| *x < 70);
//! assert_eq!(drawn.get(), 0);
//!
//! assert_eq!(pipeline.to_list(), vec![20, 40, 60]);
//! assert_eq!(drawn.get(), 8);
//! ```

mod stages;

use std::fmt;

pub use stages::{DropWhile, Filter, Fold, Map, PairOrder, Pairwise, Reduce, TakeWhile};

use crate::collect::Arguments;
use crate::sequence::Array;

/// A deferred pipeline over an exclusively owned source producer.
///
/// `I` is the outermost stage of the pipeline; it is an [`Iterator`]
/// whenever the stages and functions chained onto it are.
#[derive(Clone)]
#[must_use = "streams are lazy and do nothing unless consumed"]
pub struct Stream<I> {
    source: I,
}

impl<I: Iterator> Stream<I> {
    /// Wraps `source` without drawing from it.
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            source: source.into_iter(),
        }
    }

    /// Lazily yields `function(x)` for every upstream element `x`.
    ///
    /// `function` runs at most once per element, and only when that element
    /// is drawn.
    pub fn map<B, F>(self, function: F) -> Stream<Map<I, F>>
    where
        F: FnMut(I::Item) -> B,
    {
        Stream {
            source: Map::new(self.source, function),
        }
    }

    /// Lazily yields the elements for which `predicate` holds, in order.
    pub fn filter<P>(self, predicate: P) -> Stream<Filter<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        Stream {
            source: Filter::new(self.source, predicate),
        }
    }

    /// Lazily yields a single value: the left fold of `function` over every
    /// upstream element.
    ///
    /// Drawing the value drains the upstream. An empty upstream yields no
    /// value.
    pub fn reduce<F>(self, function: F) -> Stream<Reduce<I, F>>
    where
        F: FnMut(I::Item, I::Item) -> I::Item,
    {
        Stream {
            source: Reduce::new(self.source, function),
        }
    }

    /// Lazily yields a single value: the left fold of `function` over every
    /// upstream element, starting from `seed`.
    pub fn fold<B, F>(self, seed: B, function: F) -> Stream<Fold<I, B, F>>
    where
        F: FnMut(B, I::Item) -> B,
    {
        Stream {
            source: Fold::new(self.source, seed, function),
        }
    }

    /// Lazily yields elements until the first one for which `predicate`
    /// fails; nothing after that element is ever drawn.
    pub fn take_while<P>(self, predicate: P) -> Stream<TakeWhile<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        Stream {
            source: TakeWhile::new(self.source, predicate),
        }
    }

    /// Lazily skips elements while `predicate` holds, then yields every
    /// remaining element, starting with the first one that failed.
    pub fn drop_while<P>(self, predicate: P) -> Stream<DropWhile<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        Stream {
            source: DropWhile::new(self.source, predicate),
        }
    }

    /// Lazily yields `function(xs[i], xs[i + 1])` for each pair of
    /// neighbouring elements.
    pub fn binmap<B, F>(self, function: F) -> Stream<Pairwise<I, F>>
    where
        I::Item: Clone,
        F: FnMut(I::Item, I::Item) -> B,
    {
        Stream {
            source: Pairwise::new(self.source, function, PairOrder::Forward),
        }
    }

    /// Like [`Stream::binmap`], with the arguments swapped:
    /// `function(xs[i + 1], xs[i])`.
    pub fn flipped_binmap<B, F>(self, function: F) -> Stream<Pairwise<I, F>>
    where
        I::Item: Clone,
        F: FnMut(I::Item, I::Item) -> B,
    {
        Stream {
            source: Pairwise::new(self.source, function, PairOrder::Flipped),
        }
    }

    /// Erases the pipeline's type behind a boxed iterator.
    pub fn boxed<'a>(self) -> Stream<Box<dyn Iterator<Item = I::Item> + 'a>>
    where
        I: 'a,
    {
        Stream {
            source: Box::new(self.source),
        }
    }

    /// Draws every remaining element into a `Vec`.
    #[must_use]
    pub fn to_list(self) -> Vec<I::Item> {
        let items: Vec<I::Item> = self.source.collect();
        tracing::trace!(length = items.len(), "stream materialized");
        items
    }

    /// Draws every remaining element into a fixed-length boxed slice.
    #[must_use]
    pub fn to_tuple(self) -> Box<[I::Item]> {
        self.to_list().into_boxed_slice()
    }

    /// Draws every remaining element into an [`Array`].
    #[must_use]
    pub fn to_array(self) -> Array<I::Item> {
        Array::from(self.to_list())
    }
}

impl<I: Iterator> Iterator for Stream<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        self.source.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<'a, I> From<Stream<I>> for Arguments<'a, I::Item>
where
    I: Iterator + 'a,
{
    fn from(stream: Stream<I>) -> Self {
        Self::Producer(Box::new(stream.source))
    }
}

impl<I: fmt::Debug> fmt::Debug for Stream<I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Stream").field(&self.source).finish()
    }
}
