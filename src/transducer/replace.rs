//! Value substitution from a mapping.

use std::collections::HashMap;
use std::hash::Hash;

use crate::reducer::Reducer;
use crate::step::Step;
use crate::transducer::Transducer;

/// Transducer that substitutes inputs found in a mapping.
#[derive(Clone, Debug)]
pub struct Replace<T> {
    map: HashMap<T, T>,
}

/// Forward `map[input]` for inputs present in the mapping, and the input
/// itself otherwise.
///
/// Accepts anything iterable over `(key, replacement)` pairs, such as a
/// `HashMap` or an array of pairs.
///
/// # Example
///
/// ```rust
/// use millrace::{append, replace, transduce};
///
/// let xf = replace([(1, 10), (2, 20)]);
/// let out = transduce(xf, append(), Vec::new(), vec![1, 2, 3]);
/// assert_eq!(out, vec![10, 20, 3]);
/// ```
pub fn replace<T, M>(map: M) -> Replace<T>
where
    M: IntoIterator<Item = (T, T)>,
    T: Eq + Hash,
{
    Replace {
        map: map.into_iter().collect(),
    }
}

/// Forward `values[input]` for inputs that are in-range positions, and the
/// input itself otherwise.
///
/// The position-as-key reading of a plain sequence: element 0 replaces
/// input `0`, element 1 replaces input `1`, and so on. This is only
/// coherent when the inputs are themselves indices, which is why the
/// constructor is monomorphic over `usize`.
///
/// # Example
///
/// ```rust
/// use millrace::{append, replace_indexed, transduce};
///
/// let xf = replace_indexed([10, 20]);
/// let out = transduce(xf, append(), Vec::new(), vec![0usize, 1, 5]);
/// assert_eq!(out, vec![10, 20, 5]);
/// ```
pub fn replace_indexed<M>(values: M) -> Replace<usize>
where
    M: IntoIterator<Item = usize>,
{
    Replace {
        map: values.into_iter().enumerate().collect(),
    }
}

/// Wrapped reducer for [`Replace`].
#[derive(Clone, Debug)]
pub struct ReplaceReducer<T, R> {
    map: HashMap<T, T>,
    down: R,
}

impl<T, R> Reducer<T> for ReplaceReducer<T, R>
where
    T: Eq + Hash + Clone,
    R: Reducer<T>,
{
    type Acc = R::Acc;

    fn init(&mut self) -> Option<Self::Acc> {
        self.down.init()
    }

    #[inline]
    fn step(&mut self, acc: Self::Acc, input: T) -> Step<Self::Acc> {
        match self.map.get(&input) {
            Some(replacement) => self.down.step(acc, replacement.clone()),
            None => self.down.step(acc, input),
        }
    }

    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        self.down.complete(acc)
    }
}

impl<T> Transducer<T> for Replace<T>
where
    T: Eq + Hash + Clone,
{
    type Output = T;

    type Wrapped<R>
        = ReplaceReducer<T, R>
    where
        R: Reducer<T>;

    fn apply<R>(&self, down: R) -> Self::Wrapped<R>
    where
        R: Reducer<T>,
    {
        ReplaceReducer {
            map: self.map.clone(),
            down,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducer::append;
    use crate::transduce::transduce;

    #[test]
    fn test_replace_substitutes_known_inputs() {
        let out = transduce(
            replace([("up", "down"), ("left", "right")]),
            append(),
            Vec::new(),
            vec!["up", "middle", "left"],
        );
        assert_eq!(out, vec!["down", "middle", "right"]);
    }

    #[test]
    fn test_replace_from_a_hashmap() {
        let mut smap = HashMap::new();
        smap.insert(1, -1);
        smap.insert(2, -2);
        let out = transduce(replace(smap), append(), Vec::new(), vec![1, 2, 3]);
        assert_eq!(out, vec![-1, -2, 3]);
    }

    #[test]
    fn test_replace_with_empty_mapping_passes_everything() {
        let out = transduce(
            replace(HashMap::<i32, i32>::new()),
            append(),
            Vec::new(),
            vec![1, 2],
        );
        assert_eq!(out, vec![1, 2]);
    }

    #[test]
    fn test_replace_indexed_keys_by_position() {
        let out = transduce(
            replace_indexed([100, 200, 300]),
            append(),
            Vec::new(),
            vec![2usize, 0, 9],
        );
        assert_eq!(out, vec![300, 100, 9]);
    }
}
