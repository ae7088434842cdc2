//! Greeting and basic numeric helpers.
//!
//! Leaf module with no dependencies on the rest of the crate; every
//! function is pure and total over its input domain.

use std::ops::{Add, Mul};

/// Format a greeting for the given name.
pub fn greet(name: &str) -> String {
    format!("Hello, {}!", name)
}

/// Sum of two numbers.
pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

/// Product of two numbers.
pub fn multiply<T: Mul<Output = T>>(a: T, b: T) -> T {
    a * b
}
