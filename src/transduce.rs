//! The drive: pull items from a source and feed them through a wrapped
//! reducer.
//!
//! Three entry points:
//!
//! - [`transduce`]: apply a transducer to a reducer, seed the accumulator
//!   with a caller-supplied value, and fold the source. Infallible.
//! - [`transduce_init`]: the same, but the seed comes from the wrapped
//!   chain's `init()`; fails with [`MissingSeed`] when the base reducer has
//!   none.
//! - [`reduce`]: fold the source into a bare reducer, no transducer. For
//!   any reducer `rf`, seed and source, `transduce(compose!(), rf, seed, s)`
//!   equals `reduce(rf, seed, s)`.
//!
//! A source is anything implementing `IntoIterator`. Strings participate as
//! character sequences via `str::chars()`:
//!
//! ```rust
//! use millrace::{mapping, transduce, Fold};
//!
//! let out = transduce(
//!     mapping(|c: char| c.to_ascii_uppercase()),
//!     Fold::unseeded(|mut s: String, c: char| {
//!         s.push(c);
//!         s
//!     }),
//!     String::new(),
//!     "this".chars(),
//! );
//! assert_eq!(out, "THIS");
//! ```
//!
//! The drive honors the [`Step::Reduced`] marker: once any stage marks the
//! accumulator final, no further item is pulled and no further `step` runs.
//! `complete` runs exactly once on the unwrapped final accumulator.

use std::fmt;

use crate::reducer::Reducer;
use crate::step::Step;
use crate::transducer::Transducer;

/// Error returned by [`transduce_init`] when the wrapped chain supplies no
/// seed.
///
/// Raised when the base reducer was built without a seed (for example
/// [`Fold::unseeded`](crate::Fold::unseeded)) and the caller did not provide
/// one either. Use [`transduce`] with an explicit seed, or construct the
/// base reducer with one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MissingSeed;

impl fmt::Display for MissingSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "the reducer supplies no initial accumulator and no seed was given"
        )
    }
}

impl std::error::Error for MissingSeed {}

/// Fold every item of `source` into `rf`, honoring early termination.
///
/// Returns `Continue` with the final accumulator when the source is
/// exhausted, or `Reduced` as soon as a step marks the accumulator final.
/// This is the single stepping loop shared by the outer drive and by
/// [`cat`](crate::cat)'s inner drives; returning the `Step` itself is what
/// preserves a downstream `Reduced` across nesting boundaries.
pub(crate) fn reduce_steps<S, R>(rf: &mut R, mut acc: R::Acc, source: S) -> Step<R::Acc>
where
    S: IntoIterator,
    R: Reducer<S::Item>,
{
    for input in source {
        match rf.step(acc, input) {
            Step::Continue(next) => acc = next,
            reduced @ Step::Reduced(_) => return reduced,
        }
    }
    Step::Continue(acc)
}

/// Fold `source` into a bare reducer with an explicit seed.
///
/// # Example
///
/// ```rust
/// use millrace::{reduce, Fold};
///
/// let total = reduce(Fold::unseeded(|acc: i32, n: i32| acc + n), 0, 1..=4);
/// assert_eq!(total, 10);
/// ```
pub fn reduce<S, R>(mut rf: R, init: R::Acc, source: S) -> R::Acc
where
    S: IntoIterator,
    R: Reducer<S::Item>,
{
    let acc = reduce_steps(&mut rf, init, source).into_acc();
    rf.complete(acc)
}

/// Drive `source` through a transducer into a reducer, seeding the
/// accumulator with `init`.
///
/// The transducer wraps the reducer (`xf.apply(rf)`), the seed is the given
/// `init` (the chain's own `init()` is not consulted), each item is pulled
/// from the source exactly once and fed through the wrapped `step`, and the
/// final accumulator is passed through `complete`.
///
/// # Example
///
/// ```rust
/// use millrace::{append, compose, filtering, mapping, taking, transduce, Fold};
///
/// let total = transduce(
///     compose!(taking(5), mapping(|n: i32| n + 1), filtering(|n: &i32| n % 2 == 0)),
///     Fold::unseeded(|acc: i32, n: i32| acc + n),
///     0,
///     1..=20,
/// );
/// assert_eq!(total, 12);
/// ```
pub fn transduce<S, T, R>(xf: T, rf: R, init: R::Acc, source: S) -> R::Acc
where
    S: IntoIterator,
    T: Transducer<S::Item>,
    R: Reducer<T::Output>,
{
    let mut wrapped = xf.apply(rf);
    let result = reduce_steps(&mut wrapped, init, source);
    #[cfg(feature = "tracing")]
    if result.is_reduced() {
        tracing::trace!("drive terminated early by a reduced accumulator");
    }
    let acc = result.into_acc();
    wrapped.complete(acc)
}

/// Drive `source` through a transducer into a reducer, taking the seed from
/// the wrapped chain's `init()`.
///
/// Wrapping reducers delegate `init` to the reducer they wrap, so the seed
/// comes from the base reducer at the bottom of the chain. Fails with
/// [`MissingSeed`] when there is none.
///
/// # Example
///
/// ```rust
/// use millrace::{append, mapping, transduce_init, Fold, MissingSeed};
///
/// // Append seeds itself with an empty vector.
/// let out = transduce_init(mapping(|n: i32| n + 1), append(), vec![1, 2, 3]);
/// assert_eq!(out.unwrap(), vec![2, 3, 4]);
///
/// // An unseeded fold has nothing to start from.
/// let out = transduce_init(
///     mapping(|n: i32| n + 1),
///     Fold::unseeded(|acc: i32, n: i32| acc + n),
///     vec![1, 2, 3],
/// );
/// assert_eq!(out.unwrap_err(), MissingSeed);
/// ```
pub fn transduce_init<S, T, R>(xf: T, rf: R, source: S) -> Result<R::Acc, MissingSeed>
where
    S: IntoIterator,
    T: Transducer<S::Item>,
    R: Reducer<T::Output>,
{
    let mut wrapped = xf.apply(rf);
    let init = wrapped.init().ok_or(MissingSeed)?;
    let acc = reduce_steps(&mut wrapped, init, source).into_acc();
    Ok(wrapped.complete(acc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose;
    use crate::reducer::{append, Fold, FoldWhile};
    use crate::testing::CountingSource;
    use crate::transducer::{mapping, taking, Identity};

    #[test]
    fn test_reduce_folds_in_order() {
        let out = reduce(
            Fold::unseeded(|mut s: String, c: char| {
                s.push(c);
                s
            }),
            String::new(),
            "abc".chars(),
        );
        assert_eq!(out, "abc");
    }

    #[test]
    fn test_transduce_matches_reduce_under_identity() {
        let a = transduce(Identity, append(), Vec::new(), 1..=5);
        let b = reduce(append(), Vec::new(), 1..=5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_transduce_does_not_consult_init_when_seeded() {
        // The fold carries seed 100; the explicit seed 0 wins.
        let total = transduce(
            Identity,
            Fold::new(100, |acc: i32, n: i32| acc + n),
            0,
            1..=3,
        );
        assert_eq!(total, 6);
    }

    #[test]
    fn test_transduce_init_takes_seed_from_the_base_reducer() {
        let total = transduce_init(
            mapping(|n: i32| n * 2),
            Fold::new(10, |acc: i32, n: i32| acc + n),
            1..=3,
        );
        assert_eq!(total, Ok(22));
    }

    #[test]
    fn test_transduce_init_fails_without_a_seed() {
        let out = transduce_init(
            compose!(),
            Fold::unseeded(|acc: i32, n: i32| acc + n),
            vec![1, 2],
        );
        assert_eq!(out, Err(MissingSeed));
    }

    #[test]
    fn test_missing_seed_display() {
        let message = MissingSeed.to_string();
        assert!(message.contains("no initial accumulator"));
    }

    #[test]
    fn test_drive_stops_pulling_after_reduced() {
        let source = CountingSource::new(1..=100);
        let counter = source.counter();
        let capped = FoldWhile::unseeded(|acc: i32, n: i32| {
            if acc + n > 5 {
                Step::Reduced(acc)
            } else {
                Step::Continue(acc + n)
            }
        });
        let total = reduce(capped, 0, source);
        assert_eq!(total, 3);
        // 1 and 2 accumulate; pulling 3 triggers the Reduced.
        assert_eq!(counter.get(), 3);
    }

    #[test]
    fn test_string_source_yields_characters() {
        let out = transduce(taking(2), append(), Vec::new(), "race".chars());
        assert_eq!(out, vec!['r', 'a']);
    }
}
