//! Consecutive-duplicate removal.

use crate::reducer::Reducer;
use crate::step::Step;
use crate::transducer::Transducer;

/// Transducer that swallows consecutive duplicate inputs.
#[derive(Clone, Copy, Debug)]
pub struct Dedupe;

/// Swallow inputs equal to the immediately prior input.
///
/// Comparison is value equality (`PartialEq`); only consecutive runs
/// collapse; an input equal to an earlier, non-adjacent one still passes.
///
/// # Example
///
/// ```rust
/// use millrace::{append, dedupe, transduce};
///
/// let out = transduce(dedupe(), append(), Vec::new(), vec![1, 1, 2, 2, 3, 1]);
/// assert_eq!(out, vec![1, 2, 3, 1]);
/// ```
pub fn dedupe() -> Dedupe {
    Dedupe
}

/// Wrapped reducer for [`Dedupe`].
#[derive(Clone, Debug)]
pub struct DedupeReducer<I, R> {
    prior: Option<I>,
    down: R,
}

impl<I, R> Reducer<I> for DedupeReducer<I, R>
where
    I: Clone + PartialEq,
    R: Reducer<I>,
{
    type Acc = R::Acc;

    fn init(&mut self) -> Option<Self::Acc> {
        self.down.init()
    }

    #[inline]
    fn step(&mut self, acc: Self::Acc, input: I) -> Step<Self::Acc> {
        if self.prior.as_ref() == Some(&input) {
            return Step::Continue(acc);
        }
        self.prior = Some(input.clone());
        self.down.step(acc, input)
    }

    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        self.down.complete(acc)
    }
}

impl<I> Transducer<I> for Dedupe
where
    I: Clone + PartialEq,
{
    type Output = I;

    type Wrapped<R>
        = DedupeReducer<I, R>
    where
        R: Reducer<I>;

    fn apply<R>(&self, down: R) -> Self::Wrapped<R>
    where
        R: Reducer<I>,
    {
        DedupeReducer { prior: None, down }
    }
}
