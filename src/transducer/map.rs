//! Transforming transducers: `mapping`, `keeping`, `keep_indexed`.

use crate::handler::{Handler, IndexedHandler};
use crate::reducer::Reducer;
use crate::step::Step;
use crate::transducer::Transducer;

/// Transducer that forwards `handler.process(input)` for every input.
#[derive(Clone, Copy, Debug)]
pub struct Mapping<H> {
    handler: H,
}

/// Transform every input with a handler.
///
/// # Example
///
/// ```rust
/// use millrace::{append, mapping, transduce};
///
/// let out = transduce(mapping(|n: i32| n + 1), append(), Vec::new(), vec![1, 2, 3]);
/// assert_eq!(out, vec![2, 3, 4]);
/// ```
pub fn mapping<H>(handler: H) -> Mapping<H> {
    Mapping { handler }
}

/// Wrapped reducer for [`Mapping`].
#[derive(Clone, Debug)]
pub struct MapReducer<H, R> {
    handler: H,
    down: R,
}

impl<I, H, R> Reducer<I> for MapReducer<H, R>
where
    H: Handler<I>,
    R: Reducer<H::Output>,
{
    type Acc = R::Acc;

    fn init(&mut self) -> Option<Self::Acc> {
        self.down.init()
    }

    #[inline]
    fn step(&mut self, acc: Self::Acc, input: I) -> Step<Self::Acc> {
        let output = self.handler.process(input);
        self.down.step(acc, output)
    }

    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        self.down.complete(acc)
    }
}

impl<I, H> Transducer<I> for Mapping<H>
where
    H: Handler<I> + Clone,
{
    type Output = H::Output;

    type Wrapped<R>
        = MapReducer<H, R>
    where
        R: Reducer<H::Output>;

    fn apply<R>(&self, down: R) -> Self::Wrapped<R>
    where
        R: Reducer<H::Output>,
    {
        MapReducer {
            handler: self.handler.clone(),
            down,
        }
    }
}

/// Transducer that forwards only the present results of its handler.
#[derive(Clone, Copy, Debug)]
pub struct Keeping<H> {
    handler: H,
}

/// Transform every input, keeping only `Some` results.
///
/// The handler returns `Option`: `None` results are swallowed, `Some(x)`
/// forwards `x`.
///
/// # Example
///
/// ```rust
/// use millrace::{append, keeping, transduce};
///
/// let halves = keeping(|n: i32| if n % 2 == 0 { Some(n / 2) } else { None });
/// let out = transduce(halves, append(), Vec::new(), 1..=6);
/// assert_eq!(out, vec![1, 2, 3]);
/// ```
pub fn keeping<H>(handler: H) -> Keeping<H> {
    Keeping { handler }
}

/// Wrapped reducer for [`Keeping`].
#[derive(Clone, Debug)]
pub struct KeepReducer<H, R> {
    handler: H,
    down: R,
}

impl<I, X, H, R> Reducer<I> for KeepReducer<H, R>
where
    H: Handler<I, Output = Option<X>>,
    R: Reducer<X>,
{
    type Acc = R::Acc;

    fn init(&mut self) -> Option<Self::Acc> {
        self.down.init()
    }

    #[inline]
    fn step(&mut self, acc: Self::Acc, input: I) -> Step<Self::Acc> {
        match self.handler.process(input) {
            Some(output) => self.down.step(acc, output),
            None => Step::Continue(acc),
        }
    }

    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        self.down.complete(acc)
    }
}

impl<I, X, H> Transducer<I> for Keeping<H>
where
    H: Handler<I, Output = Option<X>> + Clone,
{
    type Output = X;

    type Wrapped<R>
        = KeepReducer<H, R>
    where
        R: Reducer<X>;

    fn apply<R>(&self, down: R) -> Self::Wrapped<R>
    where
        R: Reducer<X>,
    {
        KeepReducer {
            handler: self.handler.clone(),
            down,
        }
    }
}

/// Transducer that pairs each input with its position before keeping.
#[derive(Clone, Copy, Debug)]
pub struct KeepIndexed<H> {
    handler: H,
}

/// Transform `(index, input)` pairs, keeping only `Some` results.
///
/// Inputs are numbered from zero in arrival order. The index lives on the
/// wrapped reducer, so the transducer value itself stays reusable.
///
/// # Example
///
/// ```rust
/// use millrace::{append, keep_indexed, transduce};
///
/// // Keep items at even positions.
/// let evens = keep_indexed(|i: usize, c: char| if i % 2 == 0 { Some(c) } else { None });
/// let out = transduce(evens, append(), Vec::new(), "abcde".chars());
/// assert_eq!(out, vec!['a', 'c', 'e']);
/// ```
pub fn keep_indexed<H>(handler: H) -> KeepIndexed<H> {
    KeepIndexed { handler }
}

/// Wrapped reducer for [`KeepIndexed`].
#[derive(Clone, Debug)]
pub struct KeepIndexedReducer<H, R> {
    handler: H,
    index: usize,
    down: R,
}

impl<I, X, H, R> Reducer<I> for KeepIndexedReducer<H, R>
where
    H: IndexedHandler<I, Output = Option<X>>,
    R: Reducer<X>,
{
    type Acc = R::Acc;

    fn init(&mut self) -> Option<Self::Acc> {
        self.down.init()
    }

    #[inline]
    fn step(&mut self, acc: Self::Acc, input: I) -> Step<Self::Acc> {
        let index = self.index;
        self.index += 1;
        match self.handler.process(index, input) {
            Some(output) => self.down.step(acc, output),
            None => Step::Continue(acc),
        }
    }

    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        self.down.complete(acc)
    }
}

impl<I, X, H> Transducer<I> for KeepIndexed<H>
where
    H: IndexedHandler<I, Output = Option<X>> + Clone,
{
    type Output = X;

    type Wrapped<R>
        = KeepIndexedReducer<H, R>
    where
        R: Reducer<X>;

    fn apply<R>(&self, down: R) -> Self::Wrapped<R>
    where
        R: Reducer<X>,
    {
        KeepIndexedReducer {
            handler: self.handler.clone(),
            index: 0,
            down,
        }
    }
}
