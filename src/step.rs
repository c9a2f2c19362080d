//! The early-termination marker threaded through every reducing step.
//!
//! A reducing step returns [`Step`]: either `Continue(acc)`, meaning keep
//! folding, or `Reduced(acc)`, meaning the accumulator is final and the
//! drive must stop pulling from the source. Modelling the marker as a sum type (rather than
//! a side-channel flag) is what lets termination compose through arbitrarily
//! nested stages: a `Reduced` produced deep inside a flattening stage is
//! returned, not signalled, so no boundary can lose it.
//!
//! # Examples
//!
//! ```rust
//! use millrace::Step;
//!
//! let going: Step<i32> = Step::Continue(3);
//! let done: Step<i32> = Step::Reduced(3);
//!
//! assert!(!going.is_reduced());
//! assert!(done.is_reduced());
//! assert_eq!(going.into_acc(), done.into_acc());
//! ```
//!
//! User code constructs `Step::Reduced` directly for custom early
//! termination, typically from a [`FoldWhile`](crate::FoldWhile) step:
//!
//! ```rust
//! use millrace::{reduce, FoldWhile, Step};
//!
//! // Sum until the total reaches 10.
//! let capped = FoldWhile::unseeded(|acc: i32, n: i32| {
//!     let acc = acc + n;
//!     if acc >= 10 {
//!         Step::Reduced(acc)
//!     } else {
//!         Step::Continue(acc)
//!     }
//! });
//! assert_eq!(reduce(capped, 0, 1..=100), 10);
//! ```

/// Outcome of one reducing step: fold on, or stop with a final accumulator.
///
/// Once a step returns `Reduced`, the drive unwraps the payload, calls
/// `complete` on it, and never steps again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step<R> {
    /// Keep folding with this accumulator.
    Continue(R),
    /// The accumulator is final; stop pulling from the source.
    Reduced(R),
}

impl<R> Step<R> {
    /// True when this step carries a final accumulator.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millrace::Step;
    ///
    /// assert!(Step::Reduced(1).is_reduced());
    /// assert!(!Step::Continue(1).is_reduced());
    /// ```
    #[inline]
    pub fn is_reduced(&self) -> bool {
        matches!(self, Step::Reduced(_))
    }

    /// Unwrap to the accumulator, whether final or not.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millrace::Step;
    ///
    /// assert_eq!(Step::Continue(5).into_acc(), 5);
    /// assert_eq!(Step::Reduced(5).into_acc(), 5);
    /// ```
    #[inline]
    pub fn into_acc(self) -> R {
        match self {
            Step::Continue(acc) | Step::Reduced(acc) => acc,
        }
    }

    /// Apply a function to the accumulator, preserving the marker.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millrace::Step;
    ///
    /// assert_eq!(Step::Reduced(2).map(|n| n * 10), Step::Reduced(20));
    /// assert_eq!(Step::Continue(2).map(|n| n * 10), Step::Continue(20));
    /// ```
    #[inline]
    pub fn map<S>(self, f: impl FnOnce(R) -> S) -> Step<S> {
        match self {
            Step::Continue(acc) => Step::Continue(f(acc)),
            Step::Reduced(acc) => Step::Reduced(f(acc)),
        }
    }
}
