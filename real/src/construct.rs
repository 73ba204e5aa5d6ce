//! Construction: the digit-tuple / integer-list / cross-base / float forms
//! from `§4.4.1`, plus `from_float`, `from_int`, `zero`, `one`.
//!
//! The source dispatches on argument shape at runtime (`BasedReal(*args,
//! **kwargs)`); idiomatic Rust expresses each shape as its own named
//! constructor instead of one dynamically-typed entry point, with optional
//! `sign`/`remainder` applied via `with_sign`/`with_remainder` builders. The
//! "empty argument list fails `BadFormat`" and "scalar without a significant
//! specifier fails `BadFormat`" cases from the source are accordingly
//! unrepresentable here: every constructor's signature already requires the
//! arguments its shape needs.

#[cfg(not(feature = "std"))]
use alloc::{sync::Arc, vec, vec::Vec};
#[cfg(feature = "std")]
use std::sync::Arc;

use basedreal_base::{Error, RadixBase, Result};
use dashu_base::Sign;

use crate::carry::extract_fractional;
use crate::repr::BasedReal;

impl BasedReal {
    /// Explicit integer and fractional digit sequences, both most-significant
    /// first, per `§3`/`§4.4.1`'s "(digit tuple, digit tuple)" form.
    pub fn from_digits(base: Arc<RadixBase>, integer: Vec<u32>, fractional: Vec<u32>) -> Result<Self> {
        BasedReal::validate_digits(&base, &integer, &fractional)?;
        let integer = if integer.is_empty() { vec![0] } else { integer };
        Ok(BasedReal::from_parts(base, Sign::Positive, integer, fractional, 0.0))
    }

    /// "(any number of integers)" form: the integers form the integer digit
    /// sequence, fractional part empty. Fails `BadFormat` if any of them is
    /// negative (sign is applied separately, via `with_sign`).
    pub fn from_digit_list(base: Arc<RadixBase>, digits: Vec<u32>) -> Result<Self> {
        BasedReal::from_digits(base, digits, Vec::new())
    }

    /// An integer value at the given base and significance.
    pub fn from_int(base: Arc<RadixBase>, n: i64, significant: usize) -> Result<Self> {
        Self::from_float(base, n as f64, significant)
    }

    /// Sets the remainder (must lie in `[0, 1)`); fails `BadFormat` otherwise.
    pub fn with_remainder(mut self, remainder: f64) -> Result<Self> {
        if !(0.0..1.0).contains(&remainder) {
            return Err(Error::BadFormat);
        }
        self.remainder = remainder;
        Ok(self)
    }

    /// Overrides the sign (zero stays `Positive` regardless, per the value
    /// invariant that zero is never signed negative).
    pub fn with_sign(mut self, sign: Sign) -> Self {
        if !self.is_zero() {
            self.sign = sign;
        }
        self
    }

    /// Builds a value from a real scalar at the requested significance,
    /// per `§4.4.2`.
    pub fn from_float(base: Arc<RadixBase>, x: f64, significant: usize) -> Result<Self> {
        if !x.is_finite() {
            return Err(Error::BadFormat);
        }
        let sign = if x < 0.0 { Sign::Negative } else { Sign::Positive };
        let mut mag = x.abs();

        // Step 2: grow the integer digit count until its span exceeds `mag`.
        // Compared directly against `mag` as an `f64` (via `IBig::to_f64`),
        // not by casting `mag` through a fixed-width integer, which would
        // saturate and silently under-count `k` for magnitudes beyond that
        // integer type's range.
        let mut k = 1usize;
        while base.integer_span(k).to_f64().value() <= mag {
            k += 1;
            if k > 4096 {
                // A degenerate base (e.g. every left radix == 1, rejected at
                // registration) would loop forever; this is an extra guard,
                // not a reachable path for a validated `RadixBase`.
                return Err(Error::BadFormat);
            }
        }

        // Step 3: extract each integer digit by dividing out its position weight.
        let mut integer_digits = Vec::with_capacity(k);
        for i in 0..k {
            let pos = i as isize - (k as isize - 1);
            let weight = base.position_weight(pos);
            let digit = (mag / weight).floor();
            let radix = base.radix_at(pos) as f64;
            let digit = digit.clamp(0.0, radix - 1.0);
            integer_digits.push(digit as u32);
            mag -= digit * weight;
        }

        // Steps 4-5: extract `significant` fractional digits, keep the tail as `remainder`.
        let (fractional_digits, remainder) = extract_fractional(mag, &base, 1, significant);

        Ok(BasedReal::from_parts(base, sign, integer_digits, fractional_digits, remainder))
    }
}
