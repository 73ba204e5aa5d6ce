//! The [`BasedReal`] value type and its core invariants.

#[cfg(not(feature = "std"))]
use alloc::{sync::Arc, vec, vec::Vec};
#[cfg(feature = "std")]
use std::sync::Arc;

use basedreal_base::{Error, RadixBase, Result};
use dashu_base::Sign;

/// An immutable arbitrary-precision real number positioned in a mixed-radix
/// system: a sign, most-significant-first integer digits, nearest-point-first
/// fractional digits, a bounded truncation remainder, and the [`RadixBase`]
/// the digits are valid against.
#[derive(Clone, Debug)]
pub struct BasedReal {
    pub(crate) base: Arc<RadixBase>,
    pub(crate) sign: Sign,
    pub(crate) integer_digits: Vec<u32>,
    pub(crate) fractional_digits: Vec<u32>,
    pub(crate) remainder: f64,
}

impl BasedReal {
    /// Builds a value from already-validated parts, trimming leading integer
    /// zeros (but always keeping at least one integer digit) and normalising
    /// a zero magnitude to `sign = Positive`, per the value invariants.
    pub(crate) fn from_parts(
        base: Arc<RadixBase>,
        sign: Sign,
        mut integer_digits: Vec<u32>,
        fractional_digits: Vec<u32>,
        remainder: f64,
    ) -> Self {
        while integer_digits.len() > 1 && integer_digits[0] == 0 {
            integer_digits.remove(0);
        }
        if integer_digits.is_empty() {
            integer_digits.push(0);
        }
        let is_zero = integer_digits.iter().all(|&d| d == 0)
            && fractional_digits.iter().all(|&d| d == 0)
            && remainder == 0.0;
        let sign = if is_zero { Sign::Positive } else { sign };
        BasedReal {
            base,
            sign,
            integer_digits,
            fractional_digits,
            remainder,
        }
    }

    /// Validates that every digit fits its position's radix, failing with
    /// [`Error::InvalidRadix`] on the first violation (the same error the
    /// registry uses for an out-of-range digit, per the spec's taxonomy).
    pub(crate) fn validate_digits(
        base: &RadixBase,
        integer_digits: &[u32],
        fractional_digits: &[u32],
    ) -> Result<()> {
        let len = integer_digits.len() as isize;
        for (i, &d) in integer_digits.iter().enumerate() {
            let pos = i as isize - (len - 1);
            if d >= base.radix_at(pos) {
                return Err(Error::InvalidRadix);
            }
        }
        for (j, &d) in fractional_digits.iter().enumerate() {
            let pos = j as isize + 1;
            if d >= base.radix_at(pos) {
                return Err(Error::InvalidRadix);
            }
        }
        Ok(())
    }

    pub fn base(&self) -> &Arc<RadixBase> {
        &self.base
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn integer_digits(&self) -> &[u32] {
        &self.integer_digits
    }

    pub fn fractional_digits(&self) -> &[u32] {
        &self.fractional_digits
    }

    pub fn remainder(&self) -> f64 {
        self.remainder
    }

    /// Number of materialised fractional positions.
    pub fn significant(&self) -> usize {
        self.fractional_digits.len()
    }

    /// Full digit sequence, integer part followed by fractional part, both
    /// most-significant first -- the concatenation `§4.4.4` indexes into.
    pub(crate) fn all_digits(&self) -> Vec<u32> {
        let mut v = Vec::with_capacity(self.integer_digits.len() + self.fractional_digits.len());
        v.extend_from_slice(&self.integer_digits);
        v.extend_from_slice(&self.fractional_digits);
        v
    }

    /// The real-valued projection of this value, signed.
    pub fn float(&self) -> f64 {
        let mut mag = 0.0;
        let len = self.integer_digits.len() as isize;
        for (i, &d) in self.integer_digits.iter().enumerate() {
            let pos = i as isize - (len - 1);
            mag += d as f64 * self.base.position_weight(pos);
        }
        for (j, &d) in self.fractional_digits.iter().enumerate() {
            let pos = j as isize + 1;
            mag += d as f64 * self.base.position_weight(pos);
        }
        let r = self.fractional_digits.len() as isize;
        mag += self.remainder * self.base.position_weight(r);
        match self.sign {
            Sign::Positive => mag,
            Sign::Negative => -mag,
        }
    }

    /// `0` at the given significance, for the given base.
    pub fn zero(base: Arc<RadixBase>, significant: usize) -> Self {
        BasedReal::from_parts(base, Sign::Positive, vec![0], vec![0; significant], 0.0)
    }

    /// `1` at the given significance, for the given base.
    pub fn one(base: Arc<RadixBase>, significant: usize) -> Self {
        let mut v = BasedReal::from_parts(base, Sign::Positive, vec![1], vec![0; significant], 0.0);
        v.integer_digits = vec![1];
        v
    }

    pub fn is_zero(&self) -> bool {
        self.integer_digits.iter().all(|&d| d == 0)
            && self.fractional_digits.iter().all(|&d| d == 0)
            && self.remainder == 0.0
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        let mut v = self.clone();
        v.sign = Sign::Positive;
        v
    }

    /// Same magnitude, opposite sign (zero is unaffected, `sign` stays `Positive`).
    pub fn negate(&self) -> Self {
        let mut v = self.clone();
        if !v.is_zero() {
            v.sign = -v.sign;
        }
        v
    }
}

impl core::ops::Neg for BasedReal {
    type Output = BasedReal;
    fn neg(self) -> BasedReal {
        self.negate()
    }
}

impl core::ops::Neg for &BasedReal {
    type Output = BasedReal;
    fn neg(self) -> BasedReal {
        self.negate()
    }
}
