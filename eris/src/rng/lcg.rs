//! Linear congruential generator
//!
//! Produces the sequence defined by the recurrence
//!
//! X(n+1) = (a * X(n) + c) mod m
//!
//! with modulus `m` (0 < m), multiplier `a` (0 < a < m) and increment
//! `c` (0 <= c < m). An increment of zero gives the multiplicative
//! congruential special case.
//!
//! # Algorithm
//!
//! One multiply, one add and one remainder per value, with 64 bits of state.
//! The multiply and add wrap at 2^64 before the remainder is taken, so the
//! full-width default parameters never overflow or trap.
//!
//! # Quality
//!
//! The internal state is trivially recovered from the output, so this
//! generator is NOT cryptographically secure. The modulus bounds the usable
//! output bits: with `m = 2^32` the upper 32 bits of every value are zero,
//! which makes the derived `next_i32` constant.
//!
//! The period is at most `m`. It equals `m` exactly when `c` and `m` are
//! coprime, `a - 1` is divisible by every prime factor of `m`, and `a - 1` is
//! divisible by 4 whenever `m` is. None of this is checked here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::generator::RandomGenerator;

/// Default modulus: the all-ones 64-bit pattern
pub const DEFAULT_MODULUS: u64 = 0xFFFF_FFFF_FFFF_FFFF;

/// Default multiplier (Knuth, MMIX)
pub const DEFAULT_MULTIPLIER: u64 = 6364136223846793005;

/// Default increment (Knuth, MMIX)
pub const DEFAULT_INCREMENT: u64 = 1442695040888963407;

/// Errors reported by the validating constructor
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParameterError {
    #[error("Invalid {parameter} {value}: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        value: u64,
        reason: &'static str,
    },
}

/// Linear congruential generator
///
/// Implements the `next_i64` primitive of [`RandomGenerator`]; every other
/// operation uses the trait's default derivation.
///
/// # Example
/// ```
/// use eris::{LinearCongruentialGenerator, RandomGenerator};
///
/// let mut rng = LinearCongruentialGenerator::with_parameters(9, 4, 1, 0);
/// let values: Vec<i64> = (0..5).map(|_| rng.next_i64()).collect();
/// assert_eq!(values, vec![0, 1, 5, 3, 4]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearCongruentialGenerator {
    /// Modulus (m); zero means 2^64
    modulus: u64,

    /// Multiplier (a)
    multiplier: u64,

    /// Increment (c)
    increment: u64,

    /// Next value to be returned; the entire internal state
    state: u64,
}

impl LinearCongruentialGenerator {
    /// Create a generator with the default (MMIX) parameters
    ///
    /// The defaults may change in a later release, so the sequence produced
    /// for a given seed is only stable within one version.
    ///
    /// # Arguments
    /// * `seed` - Start value, which is also the first value returned
    ///
    /// # Example
    /// ```
    /// use eris::{LinearCongruentialGenerator, RandomGenerator};
    ///
    /// let mut rng = LinearCongruentialGenerator::new(12345);
    /// assert_eq!(rng.next_i64(), 12345);
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            modulus: DEFAULT_MODULUS,
            multiplier: DEFAULT_MULTIPLIER,
            increment: DEFAULT_INCREMENT,
            state: seed,
        }
    }

    /// Create a generator with explicit parameters, without validation
    ///
    /// Parameters that break the invariants yield a degenerate sequence
    /// rather than an error; a warning is logged. A `modulus` of zero is
    /// taken as 2^64, i.e. plain wrapping arithmetic.
    ///
    /// # Arguments
    /// * `modulus` - m, larger than both `multiplier` and `increment`
    /// * `multiplier` - a, non-zero and less than `modulus`
    /// * `increment` - c, less than `modulus`
    /// * `seed` - Start value, which is also the first value returned
    pub fn with_parameters(modulus: u64, multiplier: u64, increment: u64, seed: u64) -> Self {
        if let Err(err) = validate(modulus, multiplier, increment) {
            log::warn!("linear congruential generator built with bad parameters: {}", err);
        }

        Self {
            modulus,
            multiplier,
            increment,
            state: seed,
        }
    }

    /// Create a generator with explicit parameters, checking the invariants
    ///
    /// # Errors
    /// `ParameterError::InvalidParameter` if `modulus` is zero, `multiplier`
    /// is zero or not less than `modulus`, or `increment` is not less than
    /// `modulus`.
    ///
    /// # Example
    /// ```
    /// use eris::{LinearCongruentialGenerator, ParameterError};
    ///
    /// assert!(LinearCongruentialGenerator::try_with_parameters(9, 4, 1, 0).is_ok());
    /// assert!(matches!(
    ///     LinearCongruentialGenerator::try_with_parameters(9, 9, 1, 0),
    ///     Err(ParameterError::InvalidParameter { parameter: "multiplier", .. })
    /// ));
    /// ```
    pub fn try_with_parameters(
        modulus: u64,
        multiplier: u64,
        increment: u64,
        seed: u64,
    ) -> Result<Self, ParameterError> {
        validate(modulus, multiplier, increment)?;

        Ok(Self {
            modulus,
            multiplier,
            increment,
            state: seed,
        })
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    pub fn multiplier(&self) -> u64 {
        self.multiplier
    }

    pub fn increment(&self) -> u64 {
        self.increment
    }

    /// Get current state, the next value `next_i64` will return
    ///
    /// Together with the parameters this is everything needed to resume the
    /// sequence.
    pub fn get_state(&self) -> u64 {
        self.state
    }

    /// Whether the parameters satisfy 0 < a < m and c < m
    pub fn is_valid(&self) -> bool {
        validate(self.modulus, self.multiplier, self.increment).is_ok()
    }
}

impl RandomGenerator for LinearCongruentialGenerator {
    /// Returns the current state and advances it by one step of the recurrence
    fn next_i64(&mut self) -> i64 {
        let result = self.state;
        let raw = self
            .multiplier
            .wrapping_mul(self.state)
            .wrapping_add(self.increment);
        self.state = raw.checked_rem(self.modulus).unwrap_or(raw);
        result as i64
    }
}

fn validate(modulus: u64, multiplier: u64, increment: u64) -> Result<(), ParameterError> {
    if modulus == 0 {
        return Err(ParameterError::InvalidParameter {
            parameter: "modulus",
            value: modulus,
            reason: "must be positive",
        });
    }
    if multiplier == 0 {
        return Err(ParameterError::InvalidParameter {
            parameter: "multiplier",
            value: multiplier,
            reason: "must be positive",
        });
    }
    if multiplier >= modulus {
        return Err(ParameterError::InvalidParameter {
            parameter: "multiplier",
            value: multiplier,
            reason: "must be less than the modulus",
        });
    }
    if increment >= modulus {
        return Err(ParameterError::InvalidParameter {
            parameter: "increment",
            value: increment,
            reason: "must be less than the modulus",
        });
    }
    Ok(())
}
