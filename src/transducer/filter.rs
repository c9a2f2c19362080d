//! Selecting transducers: `filtering` and its dual `removing`.

use crate::handler::Predicate;
use crate::reducer::Reducer;
use crate::step::Step;
use crate::transducer::Transducer;

/// Transducer that forwards only inputs satisfying a predicate.
#[derive(Clone, Copy, Debug)]
pub struct Filtering<P> {
    pred: P,
}

/// Forward only inputs for which the predicate holds.
///
/// # Example
///
/// ```rust
/// use millrace::{append, filtering, transduce};
///
/// let out = transduce(filtering(|n: &i32| n % 2 == 0), append(), Vec::new(), 1..=5);
/// assert_eq!(out, vec![2, 4]);
/// ```
pub fn filtering<P>(pred: P) -> Filtering<P> {
    Filtering { pred }
}

/// Wrapped reducer for [`Filtering`].
#[derive(Clone, Debug)]
pub struct FilterReducer<P, R> {
    pred: P,
    down: R,
}

impl<I, P, R> Reducer<I> for FilterReducer<P, R>
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
            Step::Continue(acc)
        }
    }

    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        self.down.complete(acc)
    }
}

impl<I, P> Transducer<I> for Filtering<P>
where
    P: Predicate<I> + Clone,
{
    type Output = I;

    type Wrapped<R>
        = FilterReducer<P, R>
    where
        R: Reducer<I>;

    fn apply<R>(&self, down: R) -> Self::Wrapped<R>
    where
        R: Reducer<I>,
    {
        FilterReducer {
            pred: self.pred.clone(),
            down,
        }
    }
}

/// Transducer that swallows inputs satisfying a predicate.
#[derive(Clone, Copy, Debug)]
pub struct Removing<P> {
    pred: P,
}

/// Forward only inputs for which the predicate does not hold: the dual of
/// [`filtering`].
///
/// # Example
///
/// ```rust
/// use millrace::{append, removing, transduce};
///
/// let out = transduce(removing(|n: &i32| n % 2 == 0), append(), Vec::new(), 1..=5);
/// assert_eq!(out, vec![1, 3, 5]);
/// ```
pub fn removing<P>(pred: P) -> Removing<P> {
    Removing { pred }
}

/// Wrapped reducer for [`Removing`].
#[derive(Clone, Debug)]
pub struct RemoveReducer<P, R> {
    pred: P,
    down: R,
}

impl<I, P, R> Reducer<I> for RemoveReducer<P, R>
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
            Step::Continue(acc)
        } else {
            self.down.step(acc, input)
        }
    }

    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        self.down.complete(acc)
    }
}

impl<I, P> Transducer<I> for Removing<P>
where
    P: Predicate<I> + Clone,
{
    type Output = I;

    type Wrapped<R>
        = RemoveReducer<P, R>
    where
        R: Reducer<I>;

    fn apply<R>(&self, down: R) -> Self::Wrapped<R>
    where
        R: Reducer<I>,
    {
        RemoveReducer {
            pred: self.pred.clone(),
            down,
        }
    }
}
