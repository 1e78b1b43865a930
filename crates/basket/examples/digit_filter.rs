//! Example: Digit-Run Divisibility Filtering
//!
//! This example demonstrates how to:
//! 1. Extract the maximal digit runs from a mixed string
//! 2. Enumerate every contiguous combination of a run
//! 3. Filter the combinations by divisibility

use basket::digits::{divisible, enumerate_combinations, extract_digit_runs};

fn main() {
    println!("=== Digit-Run Divisibility Filtering ===\n");

    let input = "hello4567hi123";
    println!("Input: {input:?}");
    println!("Digit runs: {:?}\n", extract_digit_runs(input));

    let run = "456";
    let combos: Vec<&str> = enumerate_combinations(run).collect();
    println!("Contiguous combinations of {run:?}: {combos:?}\n");

    for (s, x) in [("hello4567hi123", 2), ("248", 2), ("9", 9), ("abc", 5), ("100", 0)] {
        println!("divisible({s:?}, {x}) -> {:?}", divisible(s, x));
    }
}
