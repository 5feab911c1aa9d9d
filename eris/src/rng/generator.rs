//! The generator capability
//!
//! A `RandomGenerator` hands out successive values at four widths. Only one
//! primitive has to be written by an implementer; the others are derived:
//!
//! - `next_bool` ← lowest bit of `next_i32`
//! - `next_i32`  ← upper 32 bits of `next_i64`
//! - `next_i64`  ← two `next_i32` calls, high word first
//! - `next_f64`  ← `|next_i64| / i64::MAX`
//!
//! # Implementing
//!
//! Every implementation MUST override at least one of `next_i32` or
//! `next_i64`. The two defaults are defined in terms of each other, so a type
//! that overrides neither recurses until the stack overflows. The compiler
//! cannot check this.
//!
//! No guarantee is made about thread safety, performance or quality of the
//! values; see the documentation of each implementation.

/// A source of successive pseudo-random values.
///
/// # Example
/// ```
/// use eris::{LinearCongruentialGenerator, RandomGenerator};
///
/// let mut rng = LinearCongruentialGenerator::new(12345);
/// let coin = rng.next_bool();
/// let word = rng.next_i32();
/// let fraction = rng.next_f64();
/// assert!(fraction >= 0.0 && fraction <= 1.0);
/// # let _ = (coin, word);
/// ```
pub trait RandomGenerator {
    /// Next boolean; `true` and `false` should be (roughly) equally likely.
    ///
    /// Default: the lowest-order bit of `next_i32()`.
    fn next_bool(&mut self) -> bool {
        (self.next_i32() & 0x1) == 0x1
    }

    /// Next 32-bit value; every `i32` should occur with equal probability
    /// over the generator's period.
    ///
    /// Default: the high-order 32 bits of `next_i64()`.
    fn next_i32(&mut self) -> i32 {
        ((self.next_i64() as u64) >> 32) as i32
    }

    /// Next 64-bit value; every `i64` should occur with equal probability
    /// over the generator's period.
    ///
    /// Default: two calls to `next_i32()`, the first supplying the high word
    /// and the second the low word.
    fn next_i64(&mut self) -> i64 {
        let high = self.next_i32() as i64;
        // Zero-extend: a sign-extended low word would smear ones over `high`
        let low = self.next_i32() as u32 as i64;
        (high << 32) | low
    }

    /// Next floating point value in `[0.0, 1.0]`.
    ///
    /// Default: `|next_i64()| / i64::MAX`. The result is never negative, but
    /// it is exactly `1.0` when `next_i64()` yields `i64::MIN`, or any value
    /// whose magnitude rounds to 2^63 as an `f64`.
    fn next_f64(&mut self) -> f64 {
        self.next_i64().unsigned_abs() as f64 / i64::MAX as f64
    }
}

impl<R: RandomGenerator + ?Sized> RandomGenerator for &mut R {
    fn next_bool(&mut self) -> bool {
        (**self).next_bool()
    }

    fn next_i32(&mut self) -> i32 {
        (**self).next_i32()
    }

    fn next_i64(&mut self) -> i64 {
        (**self).next_i64()
    }

    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

impl<R: RandomGenerator + ?Sized> RandomGenerator for Box<R> {
    fn next_bool(&mut self) -> bool {
        (**self).next_bool()
    }

    fn next_i32(&mut self) -> i32 {
        (**self).next_i32()
    }

    fn next_i64(&mut self) -> i64 {
        (**self).next_i64()
    }

    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}
