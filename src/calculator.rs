//! Arithmetic operations for the command line surface.
//!
//! `divide` is the only fallible operation in the crate: a zero divisor
//! is rejected with [`AppError::InvalidArgument`].

use crate::error::{AppError, AppResult};
use std::ops::{Add, Sub};

/// Sum of two numbers.
pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

/// First number minus the second.
pub fn subtract<T: Sub<Output = T>>(a: T, b: T) -> T {
    a - b
}

/// Divide `a` by `b` as a floating-point value.
pub fn divide(a: f64, b: f64) -> AppResult<f64> {
    if b == 0.0 {
        return Err(AppError::InvalidArgument(
            "division by zero".to_string(),
        ));
    }
    Ok(a / b)
}
