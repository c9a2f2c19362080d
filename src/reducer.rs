//! Reducers: the folding sinks a drive accumulates into.
//!
//! A [`Reducer`] folds inputs into an accumulator through three operations:
//! `init` (produce a seed, if the reducer has one), `step` (fold one input),
//! and `complete` (finalize). Reducers are the unit the drive consumes; a
//! transducer wraps one reducer and hands back another.
//!
//! Three base reducers cover the common sinks:
//!
//! - [`Fold`]: a seed plus a binary callable; the general-purpose sink.
//! - [`FoldWhile`]: like `Fold`, but the callable returns [`Step`] and may
//!   end the drive early with [`Step::Reduced`].
//! - [`Append`]: collects inputs into a `Vec`, seeding itself with an empty
//!   vector.
//!
//! # Examples
//!
//! ```rust
//! use millrace::{reduce, append, Fold};
//!
//! // Sum with an explicit seed.
//! let total = reduce(Fold::unseeded(|acc: i32, n: i32| acc + n), 0, 1..=4);
//! assert_eq!(total, 10);
//!
//! // Collect into a vector.
//! let items = reduce(append(), Vec::new(), "abc".chars());
//! assert_eq!(items, vec!['a', 'b', 'c']);
//! ```

use std::marker::PhantomData;

use crate::step::Step;

/// A value that folds inputs into an accumulator.
///
/// `init` produces the seed when the caller supplies none, `step` folds one
/// input into the accumulator, and `complete` finalizes the result. Wrapping
/// reducers built by transducers delegate `init` and `complete` to the
/// reducer they wrap and carry their per-drive state (counters, flags, prior
/// values) on themselves, which is what makes the transducer values
/// reusable.
pub trait Reducer<I> {
    /// The accumulator this reducer folds into.
    type Acc;

    /// Produce the seed accumulator, or `None` when this reducer has none.
    fn init(&mut self) -> Option<Self::Acc>;

    /// Fold one input into the accumulator.
    ///
    /// Returning [`Step::Reduced`] marks the accumulator final; the drive
    /// will not call `step` again.
    fn step(&mut self, acc: Self::Acc, input: I) -> Step<Self::Acc>;

    /// Finalize the accumulator. Called exactly once per successful drive.
    fn complete(&mut self, acc: Self::Acc) -> Self::Acc;
}

/// The general-purpose base reducer: a seed plus a binary callable.
///
/// `complete` is the identity. Construct with [`Fold::new`] to carry a seed,
/// or [`Fold::unseeded`] when the caller will supply one to the drive; an
/// unseeded `Fold` driven through [`transduce_init`](crate::transduce_init)
/// fails with [`MissingSeed`](crate::MissingSeed).
///
/// # Example
///
/// ```rust
/// use millrace::{transduce_init, mapping, Fold};
///
/// let shouted = transduce_init(
///     mapping(|c: char| c.to_ascii_uppercase()),
///     Fold::new(String::new(), |mut s: String, c: char| {
///         s.push(c);
///         s
///     }),
///     "this".chars(),
/// );
/// assert_eq!(shouted.unwrap(), "THIS");
/// ```
#[derive(Clone, Debug)]
pub struct Fold<Acc, F> {
    seed: Option<Acc>,
    f: F,
}

impl<Acc, F> Fold<Acc, F> {
    /// A fold that carries its own seed.
    pub fn new(seed: Acc, f: F) -> Self {
        Fold {
            seed: Some(seed),
            f,
        }
    }

    /// A fold with no seed of its own; the drive must be given one.
    pub fn unseeded(f: F) -> Self {
        Fold { seed: None, f }
    }
}

impl<Acc, F, I> Reducer<I> for Fold<Acc, F>
where
    F: FnMut(Acc, I) -> Acc,
{
    type Acc = Acc;

    fn init(&mut self) -> Option<Acc> {
        self.seed.take()
    }

    #[inline]
    fn step(&mut self, acc: Acc, input: I) -> Step<Acc> {
        Step::Continue((self.f)(acc, input))
    }

    fn complete(&mut self, acc: Acc) -> Acc {
        acc
    }
}

/// A base reducer whose callable may end the drive early.
///
/// The callable returns [`Step`] directly: `Step::Continue` to keep folding,
/// [`Step::Reduced`] to mark the accumulator final. This is the sink-side
/// counterpart of [`taking`](crate::taking)-style early termination.
///
/// # Example
///
/// ```rust
/// use millrace::{reduce, FoldWhile, Step};
///
/// // Stop summing as soon as the total reaches 10.
/// let capped = FoldWhile::unseeded(|acc: i32, n: i32| {
///     let acc = acc + n;
///     if acc >= 10 {
///         Step::Reduced(acc)
///     } else {
///         Step::Continue(acc)
///     }
/// });
/// assert_eq!(reduce(capped, 0, 1..=100), 10);
/// ```
#[derive(Clone, Debug)]
pub struct FoldWhile<Acc, F> {
    seed: Option<Acc>,
    f: F,
}

impl<Acc, F> FoldWhile<Acc, F> {
    /// A terminating fold that carries its own seed.
    pub fn new(seed: Acc, f: F) -> Self {
        FoldWhile {
            seed: Some(seed),
            f,
        }
    }

    /// A terminating fold with no seed of its own.
    pub fn unseeded(f: F) -> Self {
        FoldWhile { seed: None, f }
    }
}

impl<Acc, F, I> Reducer<I> for FoldWhile<Acc, F>
where
    F: FnMut(Acc, I) -> Step<Acc>,
{
    type Acc = Acc;

    fn init(&mut self) -> Option<Acc> {
        self.seed.take()
    }

    #[inline]
    fn step(&mut self, acc: Acc, input: I) -> Step<Acc> {
        (self.f)(acc, input)
    }

    fn complete(&mut self, acc: Acc) -> Acc {
        acc
    }
}

/// A reducer that collects inputs into a `Vec`, in arrival order.
///
/// Seeds itself with an empty vector, so it works with both
/// [`transduce`](crate::transduce) and
/// [`transduce_init`](crate::transduce_init).
#[derive(Clone, Copy, Debug)]
pub struct Append<T> {
    _marker: PhantomData<T>,
}

/// Create an [`Append`] reducer.
///
/// # Example
///
/// ```rust
/// use millrace::{append, taking, transduce};
///
/// let out = transduce(taking(3), append(), Vec::new(), 1..=10);
/// assert_eq!(out, vec![1, 2, 3]);
/// ```
pub fn append<T>() -> Append<T> {
    Append {
        _marker: PhantomData,
    }
}

impl<T> Reducer<T> for Append<T> {
    type Acc = Vec<T>;

    fn init(&mut self) -> Option<Vec<T>> {
        Some(Vec::new())
    }

    #[inline]
    fn step(&mut self, mut acc: Vec<T>, input: T) -> Step<Vec<T>> {
        acc.push(input);
        Step::Continue(acc)
    }

    fn complete(&mut self, acc: Vec<T>) -> Vec<T> {
        acc
    }
}
