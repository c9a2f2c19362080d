//! Pipeline Example
//!
//! Demonstrates building transformation pipelines from composable
//! transducers and driving them into different sinks.
//!
//! Patterns covered:
//! - Mapping and filtering without intermediate collections
//! - Composing with the compose! macro and with then()
//! - One pipeline, many sinks (vector, sum, string)
//! - Flattening nested sources with cat and mapcat
//! - Substitution with replace

use millrace::{
    append, cat, compose, filtering, mapcat, mapping, replace, transduce, Fold, TransducerExt,
};

// ==================== Mapping and Filtering ====================

/// Example 1: A two-stage pipeline
///
/// Items flow through each stage one at a time; no intermediate vector is
/// ever built between the stages.
fn example_map_filter() {
    println!("\n=== Example 1: Mapping and Filtering ===");

    let xf = compose!(
        mapping(|n: i32| n * n),
        filtering(|n: &i32| n % 2 == 0),
    );
    let squares = transduce(xf, append(), Vec::new(), 1..=10);
    println!("Even squares of 1..=10: {:?}", squares);
}

// ==================== One Pipeline, Many Sinks ====================

/// Example 2: Source- and sink-independence
///
/// The same composed value drives a vector, a sum, and a string, by
/// reference; each drive gets its own wrapped reducer chain.
fn example_many_sinks() {
    println!("\n=== Example 2: One Pipeline, Many Sinks ===");

    let xf = filtering(|n: &i32| n % 3 == 0).then(mapping(|n: i32| n / 3));

    let as_vec = transduce(&xf, append(), Vec::new(), 1..=12);
    println!("As vector: {:?}", as_vec);

    let as_sum = transduce(&xf, Fold::unseeded(|acc: i32, n: i32| acc + n), 0, 1..=12);
    println!("As sum: {}", as_sum);

    let as_string = transduce(
        &xf,
        Fold::unseeded(|mut s: String, n: i32| {
            s.push_str(&n.to_string());
            s
        }),
        String::new(),
        1..=12,
    );
    println!("As string: {}", as_string);
}

// ==================== Character Sources ====================

/// Example 3: Strings flow as characters
fn example_string_source() {
    println!("\n=== Example 3: Character Sources ===");

    let vowelless = transduce(
        filtering(|c: &char| !"aeiou".contains(*c)),
        Fold::unseeded(|mut s: String, c: char| {
            s.push(c);
            s
        }),
        String::new(),
        "millrace turns the wheel".chars(),
    );
    println!("Without vowels: {}", vowelless);
}

// ==================== Flattening ====================

/// Example 4: cat and mapcat
fn example_flattening() {
    println!("\n=== Example 4: Flattening ===");

    let flat = transduce(
        cat(),
        append(),
        Vec::new(),
        vec![vec![1, 2], vec![3], vec![4, 5]],
    );
    println!("cat: {:?}", flat);

    let runs = transduce(mapcat(|n: i32| 1..=n), append(), Vec::new(), vec![1, 2, 3]);
    println!("mapcat 1..=n: {:?}", runs);
}

// ==================== Substitution ====================

/// Example 5: replace
fn example_replace() {
    println!("\n=== Example 5: Substitution ===");

    let softened = transduce(
        replace([("hate", "dislike"), ("never", "rarely")]),
        append(),
        Vec::new(),
        vec!["i", "never", "hate", "mondays"],
    );
    println!("Softened: {:?}", softened);
}

fn main() {
    println!("Millrace pipeline patterns");
    example_map_filter();
    example_many_sinks();
    example_string_source();
    example_flattening();
    example_replace();
}
