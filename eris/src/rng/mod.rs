//! Deterministic random number generation
//!
//! `RandomGenerator` is the capability every generator offers; the linear
//! congruential generator is the one algorithm shipped.
//! NOT suitable for cryptography.

mod generator;
mod lcg;

pub use generator::RandomGenerator;
pub use lcg::{
    LinearCongruentialGenerator, ParameterError, DEFAULT_INCREMENT, DEFAULT_MODULUS,
    DEFAULT_MULTIPLIER,
};
