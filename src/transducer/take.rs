//! Prefix-limiting transducers: `taking`, `take_while`, `take_nth`.
//!
//! `taking` and `take_while` are the transducers that inject early
//! termination themselves: their `step` returns [`Step::Reduced`] once the
//! prefix is delivered, and the drive stops pulling, even from an unbounded
//! source.

use crate::handler::Predicate;
use crate::reducer::Reducer;
use crate::step::Step;
use crate::transducer::Transducer;

/// Transducer that forwards the first `n` inputs, then terminates the drive.
#[derive(Clone, Copy, Debug)]
pub struct Taking {
    n: usize,
}

/// Forward the first `n` inputs, then end the drive.
///
/// The `n`-th input is forwarded; the `(n + 1)`-th triggers termination
/// without being forwarded, so at most `n + 1` items are ever pulled from
/// the source. `taking(0)` terminates on the very first step and forwards
/// nothing.
///
/// # Example
///
/// ```rust
/// use millrace::{append, taking, transduce};
///
/// // The source is unbounded; the drive still ends.
/// let out = transduce(taking(5), append(), Vec::new(), 1..);
/// assert_eq!(out, vec![1, 2, 3, 4, 5]);
/// ```
pub fn taking(n: usize) -> Taking {
    Taking { n }
}

/// Wrapped reducer for [`Taking`].
#[derive(Clone, Debug)]
pub struct TakeReducer<R> {
    remaining: usize,
    down: R,
}

impl<I, R> Reducer<I> for TakeReducer<R>
where
    R: Reducer<I>,
{
    type Acc = R::Acc;

    fn init(&mut self) -> Option<Self::Acc> {
        self.down.init()
    }

    #[inline]
    fn step(&mut self, acc: Self::Acc, input: I) -> Step<Self::Acc> {
        if self.remaining == 0 {
            return Step::Reduced(acc);
        }
        self.remaining -= 1;
        self.down.step(acc, input)
    }

    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        self.down.complete(acc)
    }
}

impl<I> Transducer<I> for Taking {
    type Output = I;

    type Wrapped<R>
        = TakeReducer<R>
    where
        R: Reducer<I>;

    fn apply<R>(&self, down: R) -> Self::Wrapped<R>
    where
        R: Reducer<I>,
    {
        TakeReducer {
            remaining: self.n,
            down,
        }
    }
}

/// Transducer that forwards inputs while a predicate holds, then terminates.
#[derive(Clone, Copy, Debug)]
pub struct TakeWhile<P> {
    pred: P,
}

/// Forward inputs while the predicate holds; the first failing input ends
/// the drive and is not forwarded.
///
/// # Example
///
/// ```rust
/// use millrace::{append, take_while, transduce};
///
/// let out = transduce(take_while(|n: &i32| *n < 4), append(), Vec::new(), 1..=10);
/// assert_eq!(out, vec![1, 2, 3]);
/// ```
pub fn take_while<P>(pred: P) -> TakeWhile<P> {
    TakeWhile { pred }
}

/// Wrapped reducer for [`TakeWhile`].
#[derive(Clone, Debug)]
pub struct TakeWhileReducer<P, R> {
    pred: P,
    down: R,
}

impl<I, P, R> Reducer<I> for TakeWhileReducer<P, R>
where
    P: Predicate<I>,
    R: Reducer<I>,
{
    type Acc = R::Acc;

    fn init(&mut self) -> Option<Self::Acc> {
        self.down.init()
    }

    #[inline]
    fn step(&mut self, acc: Self::Acc, input: I) -> Step<Self::Acc> {
        if self.pred.process(&input) {
            self.down.step(acc, input)
        } else {
            Step::Reduced(acc)
        }
    }

    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        self.down.complete(acc)
    }
}

impl<I, P> Transducer<I> for TakeWhile<P>
where
    P: Predicate<I> + Clone,
{
    type Output = I;

    type Wrapped<R>
        = TakeWhileReducer<P, R>
    where
        R: Reducer<I>;

    fn apply<R>(&self, down: R) -> Self::Wrapped<R>
    where
        R: Reducer<I>,
    {
        TakeWhileReducer {
            pred: self.pred.clone(),
            down,
        }
    }
}

/// Transducer that forwards every `n`-th input.
#[derive(Clone, Copy, Debug)]
pub struct TakeNth {
    n: usize,
}

/// Forward every `n`-th input, counting positions from one.
///
/// With `n = 1` every input passes; with `n = 2` the inputs at positions
/// 2, 4, 6, … are forwarded.
///
/// # Panics
///
/// Panics if `n` is zero.
///
/// # Example
///
/// ```rust
/// use millrace::{append, take_nth, transduce};
///
/// let out = transduce(take_nth(3), append(), Vec::new(), 1..=10);
/// assert_eq!(out, vec![3, 6, 9]);
/// ```
pub fn take_nth(n: usize) -> TakeNth {
    assert!(n > 0, "take_nth requires a non-zero stride");
    TakeNth { n }
}

/// Wrapped reducer for [`TakeNth`].
#[derive(Clone, Debug)]
pub struct TakeNthReducer<R> {
    n: usize,
    count: usize,
    down: R,
}

impl<I, R> Reducer<I> for TakeNthReducer<R>
where
    R: Reducer<I>,
{
    type Acc = R::Acc;

    fn init(&mut self) -> Option<Self::Acc> {
        self.down.init()
    }

    #[inline]
    fn step(&mut self, acc: Self::Acc, input: I) -> Step<Self::Acc> {
        self.count += 1;
        if self.count % self.n == 0 {
            self.down.step(acc, input)
        } else {
            Step::Continue(acc)
        }
    }

    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        self.down.complete(acc)
    }
}

impl<I> Transducer<I> for TakeNth {
    type Output = I;

    type Wrapped<R>
        = TakeNthReducer<R>
    where
        R: Reducer<I>;

    fn apply<R>(&self, down: R) -> Self::Wrapped<R>
    where
        R: Reducer<I>,
    {
        TakeNthReducer {
            n: self.n,
            count: 0,
            down,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducer::append;
    use crate::testing::CountingSource;
    use crate::transduce::transduce;

    #[test]
    fn test_taking_forwards_exactly_n() {
        let out = transduce(taking(5), append(), Vec::new(), 1..=20);
        assert_eq!(out, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_taking_more_than_available() {
        let out = transduce(taking(10), append(), Vec::new(), 1..=3);
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn test_taking_zero_forwards_nothing() {
        let source = CountingSource::new(1..=20);
        let counter = source.counter();
        let out = transduce(taking(0), append(), Vec::new(), source);
        assert_eq!(out, Vec::<i32>::new());
        assert_eq!(counter.get(), 1);
    }

    #[test]
    fn test_taking_pulls_at_most_n_plus_one() {
        let source = CountingSource::new(1..=20);
        let counter = source.counter();
        let out = transduce(taking(5), append(), Vec::new(), source);
        assert_eq!(out, vec![1, 2, 3, 4, 5]);
        assert_eq!(counter.get(), 6);
    }

    #[test]
    fn test_take_while_stops_without_forwarding_the_failure() {
        let out = transduce(
            take_while(|n: &i32| *n < 4),
            append(),
            Vec::new(),
            vec![1, 2, 3, 9, 1],
        );
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn test_take_while_never_true() {
        let source = CountingSource::new(1..=20);
        let counter = source.counter();
        let out = transduce(take_while(|_: &i32| false), append(), Vec::new(), source);
        assert_eq!(out, Vec::<i32>::new());
        assert_eq!(counter.get(), 1);
    }

    #[test]
    fn test_take_nth_one_passes_everything() {
        let out = transduce(take_nth(1), append(), Vec::new(), 1..=4);
        assert_eq!(out, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_take_nth_two_takes_even_positions() {
        let out = transduce(take_nth(2), append(), Vec::new(), 1..=7);
        assert_eq!(out, vec![2, 4, 6]);
    }

    #[test]
    #[should_panic(expected = "non-zero stride")]
    fn test_take_nth_zero_panics() {
        take_nth(0);
    }
}
