//! Eris - Pseudo-random number generators
//!
//! A small PRNG library: one trait describing a stream of numbers at several
//! widths, and a linear congruential generator implementing it.
//!
//! # Architecture
//!
//! - **rng::generator**: The `RandomGenerator` trait and its default derivations
//! - **rng::lcg**: Linear congruential generator and its parameter errors
//!
//! # Critical Invariants
//!
//! 1. Same parameters and seed → same sequence, bit for bit
//! 2. Generation never fails and never panics (all arithmetic wraps)
//! 3. Nothing here is cryptographically secure

// Module declarations
pub mod rng;

// Re-exports for convenience
pub use rng::{
    LinearCongruentialGenerator, ParameterError, RandomGenerator, DEFAULT_INCREMENT,
    DEFAULT_MODULUS, DEFAULT_MULTIPLIER,
};
