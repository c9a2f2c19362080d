//! # Millrace
//!
//! > *"The race carries the stream to the wheel"*
//!
//! A Rust library for composable transducers: algorithmic transformations
//! over sequences, independent of both the source that produces items and
//! the sink that accumulates them.
//!
//! ## Philosophy
//!
//! **Millrace** separates the three concerns of a fold:
//! - **Stream** = the source (anything iterable; strings flow as characters
//!   via `str::chars()`)
//! - **Race** = the transformation pipeline (transducers, composed with no
//!   intermediate collection between stages)
//! - **Wheel** = the reducing sink (a vector, a sum, a string, anything
//!   that folds)
//!
//! A [`Transducer`] wraps a downstream [`Reducer`] and returns a new reducer
//! with extra behavior woven into its `step`. Because transducers compose by
//! plain function composition, a pipeline built once can drive accumulation
//! into any sink, over any source.
//!
//! ## Quick Example
//!
//! ```rust
//! use millrace::{append, compose, filtering, mapping, taking, transduce};
//!
//! // Square the first three even numbers, from an unbounded source.
//! let xf = compose!(
//!     filtering(|n: &i32| n % 2 == 0),
//!     mapping(|n: i32| n * n),
//!     taking(3),
//! );
//! let out = transduce(xf, append(), Vec::new(), 1..);
//! assert_eq!(out, vec![4, 16, 36]);
//! ```
//!
//! ## Early termination
//!
//! [`Step`] threads a one-bit "final" marker through every reducing step.
//! Stateful transducers such as [`taking`] and [`take_while`] mark the
//! accumulator final; the drive stops pulling immediately, even across
//! nested flattening stages like [`cat`]. User reducers opt in through
//! [`FoldWhile`], returning [`Step::Reduced`] from their own step.
//!
//! ## Reuse
//!
//! Transducer values are immutable: `apply` never mutates them, and all
//! per-drive state (counters, flags, prior values) lives on the wrapped
//! reducer each `apply` returns. One composed value can therefore be reused
//! across any number of independent drives.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod handler;
pub mod reducer;
pub mod step;
pub mod testing;
pub mod transduce;
pub mod transducer;

// Re-exports
pub use handler::{Handler, IndexedHandler, Predicate};
pub use reducer::{append, Append, Fold, FoldWhile, Reducer};
pub use step::Step;
pub use transduce::{reduce, transduce, transduce_init, MissingSeed};
pub use transducer::{
    cat, dedupe, drop_while, dropping, filtering, keep_indexed, keeping, mapcat, mapping, removing,
    replace, replace_indexed, take_nth, take_while, taking, Cat, Compose, Dedupe, DropWhile,
    Dropping, Filtering, Identity, KeepIndexed, Keeping, MapCat, Mapping, Removing, Replace,
    TakeNth, TakeWhile, Taking, Transducer, TransducerExt,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::handler::{Handler, IndexedHandler, Predicate};
    pub use crate::reducer::{append, Append, Fold, FoldWhile, Reducer};
    pub use crate::step::Step;
    pub use crate::transduce::{reduce, transduce, transduce_init, MissingSeed};
    pub use crate::transducer::{
        cat, dedupe, drop_while, dropping, filtering, keep_indexed, keeping, mapcat, mapping,
        removing, replace, replace_indexed, take_nth, take_while, taking, Cat, Compose, Dedupe,
        DropWhile, Dropping, Filtering, Identity, KeepIndexed, Keeping, MapCat, Mapping, Removing,
        Replace, TakeNth, TakeWhile, Taking, Transducer, TransducerExt,
    };
    pub use crate::{assert_transduces, compose};
}
