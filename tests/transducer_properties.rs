//! Property-based tests for the transducer laws.

use proptest::prelude::*;

use millrace::testing::CountingSource;
use millrace::{
    append, cat, compose, dedupe, dropping, filtering, mapping, reduce, take_nth, taking,
    transduce, Transducer,
};

fn increment() -> impl Transducer<i32, Output = i32> {
    mapping(|n: i32| n + 1)
}

fn keep_even() -> impl Transducer<i32, Output = i32> {
    filtering(|n: &i32| n % 2 == 0)
}

fn triple() -> impl Transducer<i32, Output = i32> {
    mapping(|n: i32| n.wrapping_mul(3))
}

proptest! {
    // Empty composition drives exactly like a bare reduction.
    #[test]
    fn prop_empty_composition_is_identity(data: Vec<i32>) {
        let via_transduce = transduce(compose!(), append(), Vec::new(), data.clone());
        let via_reduce = reduce(append(), Vec::new(), data);
        prop_assert_eq!(via_transduce, via_reduce);
    }

    // compose(a, compose(b, c)) == compose(compose(a, b), c) == compose(a, b, c)
    #[test]
    fn prop_composition_is_associative(data: Vec<i32>) {
        let right = transduce(
            compose!(increment(), compose!(keep_even(), triple())),
            append(),
            Vec::new(),
            data.clone(),
        );
        let left = transduce(
            compose!(compose!(increment(), keep_even()), triple()),
            append(),
            Vec::new(),
            data.clone(),
        );
        let flat = transduce(
            compose!(increment(), keep_even(), triple()),
            append(),
            Vec::new(),
            data,
        );
        prop_assert_eq!(&right, &left);
        prop_assert_eq!(&right, &flat);
    }

    // compose(mapping(f), mapping(g)) == mapping(g . f)
    #[test]
    fn prop_map_fusion(data: Vec<i32>) {
        let f = |n: i32| n.wrapping_add(3);
        let g = |n: i32| n.wrapping_mul(2);
        let staged = transduce(
            compose!(mapping(f), mapping(g)),
            append(),
            Vec::new(),
            data.clone(),
        );
        let fused = transduce(mapping(move |n: i32| g(f(n))), append(), Vec::new(), data);
        prop_assert_eq!(staged, fused);
    }

    // filtering-then-mapping applies f only to passing items; the reverse
    // order tests f's output instead.
    #[test]
    fn prop_filter_map_ordering(data: Vec<i32>) {
        let filter_first = transduce(
            compose!(filtering(|n: &i32| n % 2 == 0), mapping(|n: i32| n.wrapping_add(10))),
            append(),
            Vec::new(),
            data.clone(),
        );
        let expected: Vec<i32> = data
            .iter()
            .copied()
            .filter(|n| n % 2 == 0)
            .map(|n| n.wrapping_add(10))
            .collect();
        prop_assert_eq!(filter_first, expected);

        let map_first = transduce(
            compose!(mapping(|n: i32| n.wrapping_add(10)), filtering(|n: &i32| n % 2 == 0)),
            append(),
            Vec::new(),
            data.clone(),
        );
        let expected: Vec<i32> = data
            .iter()
            .copied()
            .map(|n| n.wrapping_add(10))
            .filter(|n| n % 2 == 0)
            .collect();
        prop_assert_eq!(map_first, expected);
    }

    // taking(n) yields exactly the first n items, pulling at most n + 1
    // times.
    #[test]
    fn prop_take_terminates_early(n in 0usize..30, len in 0usize..60) {
        let data: Vec<usize> = (0..len).collect();
        let source = CountingSource::new(data.clone());
        let counter = source.counter();
        let out = transduce(taking(n), append(), Vec::new(), source);
        prop_assert_eq!(&out[..], &data[..n.min(len)]);
        prop_assert!(counter.get() <= n + 1);
    }

    // The outputs of taking(n) and dropping(n) concatenate back to the
    // source.
    #[test]
    fn prop_take_drop_complement(data: Vec<i32>, n in 0usize..40) {
        let taken = transduce(taking(n), append(), Vec::new(), data.clone());
        let dropped = transduce(dropping(n), append(), Vec::new(), data.clone());
        prop_assert_eq!([taken, dropped].concat(), data);
    }

    // cat flattens exactly one level.
    #[test]
    fn prop_cat_flattens_one_level(
        nested in prop::collection::vec(prop::collection::vec(any::<i32>(), 0..6), 0..6)
    ) {
        let flat = transduce(cat(), append(), Vec::new(), nested.clone());
        prop_assert_eq!(flat, nested.concat());
    }

    // A downstream taking(k) terminates at the k-th forwarded element, no
    // matter which inner iterable it falls in.
    #[test]
    fn prop_reduced_propagates_through_cat(
        nested in prop::collection::vec(prop::collection::vec(any::<i32>(), 0..6), 0..6),
        k in 0usize..20
    ) {
        let flat = nested.concat();
        let out = transduce(
            compose!(cat(), taking(k)),
            append(),
            Vec::new(),
            nested,
        );
        prop_assert_eq!(&out[..], &flat[..k.min(flat.len())]);
    }

    // dedupe collapses exactly the consecutive runs.
    #[test]
    fn prop_dedupe_matches_vec_dedup(data: Vec<i32>) {
        let out = transduce(dedupe(), append(), Vec::new(), data.clone());
        let mut expected = data;
        expected.dedup();
        prop_assert_eq!(out, expected);
    }

    // take_nth(n) keeps the items at 1-indexed positions divisible by n.
    #[test]
    fn prop_take_nth_strides(data: Vec<i32>, n in 1usize..10) {
        let out = transduce(take_nth(n), append(), Vec::new(), data.clone());
        let expected: Vec<i32> = data
            .iter()
            .enumerate()
            .filter(|(i, _)| (i + 1) % n == 0)
            .map(|(_, v)| *v)
            .collect();
        prop_assert_eq!(out, expected);
    }
}
