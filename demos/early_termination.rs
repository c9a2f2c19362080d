//! Early Termination Example
//!
//! Demonstrates the Reduced marker: how taking-style transducers end a
//! drive, how termination crosses flattening boundaries, and how user
//! reducers terminate on their own terms.
//!
//! Patterns covered:
//! - taking and take_while over unbounded sources
//! - Observing how few items a drive pulls with CountingSource
//! - Reduced propagating out of cat's inner drives
//! - FoldWhile for sink-side termination

use millrace::testing::CountingSource;
use millrace::{append, cat, compose, take_while, taking, transduce, FoldWhile, Step};

// ==================== Unbounded Sources ====================

/// Example 1: taking ends an unbounded drive
fn example_unbounded() {
    println!("\n=== Example 1: Unbounded Sources ===");

    let first = transduce(taking(5), append(), Vec::new(), 1..);
    println!("First five naturals: {:?}", first);

    let small = transduce(take_while(|n: &i32| n * n < 50), append(), Vec::new(), 1..);
    println!("While square < 50: {:?}", small);
}

// ==================== Counting Pulls ====================

/// Example 2: the drive pulls no more than it must
fn example_counted_pulls() {
    println!("\n=== Example 2: Counting Pulls ===");

    let source = CountingSource::new(1..=1_000_000);
    let counter = source.counter();
    let out = transduce(taking(3), append(), Vec::new(), source);
    println!(
        "Took {:?} from a million-item source in {} pulls",
        out,
        counter.get()
    );
}

// ==================== Termination Through Flattening ====================

/// Example 3: Reduced crosses cat's inner-drive boundary
fn example_through_cat() {
    println!("\n=== Example 3: Termination Through cat ===");

    let source = CountingSource::new(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
    let counter = source.counter();
    let out = transduce(compose!(cat(), taking(4)), append(), Vec::new(), source);
    println!(
        "First four of the flattening: {:?} ({} outer pulls)",
        out,
        counter.get()
    );
}

// ==================== Sink-Side Termination ====================

/// Example 4: a reducer that stops the drive itself
fn example_fold_while() {
    println!("\n=== Example 4: Sink-Side Termination ===");

    let until_hundred = FoldWhile::unseeded(|acc: i64, n: i64| {
        let acc = acc + n;
        if acc >= 100 {
            Step::Reduced(acc)
        } else {
            Step::Continue(acc)
        }
    });
    let total = transduce(compose!(), until_hundred, 0, 1..);
    println!("Summed naturals until reaching 100: {}", total);
}

fn main() {
    println!("Millrace early-termination patterns");
    example_unbounded();
    example_counted_pulls();
    example_through_cat();
    example_fold_while();
}
