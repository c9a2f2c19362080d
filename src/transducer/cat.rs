//! Flattening transducers: `cat` and `mapcat`.
//!
//! `cat` runs an inner drive over each iterable input, seeded with the
//! current accumulator. The inner drive and the outer drive share one
//! stepping loop whose return type is [`Step`](crate::Step), so a
//! `Reduced` produced by a downstream stage inside the inner drive comes
//! back as `cat`'s own step result and terminates the outer drive too;
//! the termination marker is preserved across the nesting boundary by
//! construction.

use crate::reducer::Reducer;
use crate::step::Step;
use crate::transduce::reduce_steps;
use crate::transducer::{mapping, Compose, Mapping, Transducer};

/// Transducer that flattens iterable inputs by one level.
#[derive(Clone, Copy, Debug)]
pub struct Cat;

/// Flatten one level: each input must itself be iterable, and its items are
/// fed downstream one at a time.
///
/// # Example
///
/// ```rust
/// use millrace::{append, cat, transduce};
///
/// let out = transduce(cat(), append(), Vec::new(), vec![vec![1, 2], vec![3, 4]]);
/// assert_eq!(out, vec![1, 2, 3, 4]);
/// ```
pub fn cat() -> Cat {
    Cat
}

/// Wrapped reducer for [`Cat`].
#[derive(Clone, Debug)]
pub struct CatReducer<R> {
    down: R,
}

impl<I, R> Reducer<I> for CatReducer<R>
where
    I: IntoIterator,
    R: Reducer<I::Item>,
{
    type Acc = R::Acc;

    fn init(&mut self) -> Option<Self::Acc> {
        self.down.init()
    }

    #[inline]
    fn step(&mut self, acc: Self::Acc, input: I) -> Step<Self::Acc> {
        // The inner drive over one iterable input. A Reduced from downstream
        // is returned as-is, ending the outer drive as well.
        reduce_steps(&mut self.down, acc, input)
    }

    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        self.down.complete(acc)
    }
}

impl<I> Transducer<I> for Cat
where
    I: IntoIterator,
{
    type Output = I::Item;

    type Wrapped<R>
        = CatReducer<R>
    where
        R: Reducer<I::Item>;

    fn apply<R>(&self, down: R) -> Self::Wrapped<R>
    where
        R: Reducer<I::Item>,
    {
        CatReducer { down }
    }
}

/// The composition built by [`mapcat`].
pub type MapCat<H> = Compose<Mapping<H>, Cat>;

/// Map each input to an iterable, then flatten one level:
/// `compose!(mapping(handler), cat())`.
///
/// # Example
///
/// ```rust
/// use millrace::{append, mapcat, transduce};
///
/// let out = transduce(mapcat(|n: i32| 0..n), append(), Vec::new(), vec![1, 2, 3]);
/// assert_eq!(out, vec![0, 0, 1, 0, 1, 2]);
/// ```
pub fn mapcat<H>(handler: H) -> MapCat<H> {
    Compose::new(mapping(handler), Cat)
}
