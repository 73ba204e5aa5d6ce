//! Multiplication, `§4.4.8`. Both the raw digit product and the eventual
//! division algorithm (`div.rs`) reduce to the same trick: Horner-encode a
//! digit sequence into one exact big integer (`magnitude_int`), do ordinary
//! big-integer arithmetic, then decode back (`digits_from_magnitude`).

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use basedreal_base::{Error, Result};
use dashu_base::Sign;

use crate::magnitude::{digits_from_magnitude, magnitude_int};
use crate::repr::BasedReal;

impl BasedReal {
    /// Multiplies two values bound to the same base.
    ///
    /// Both operands are first resized to `R = max(significant_a,
    /// significant_b)`; their digit sequences (ignoring sign and the radix
    /// point) are Horner-encoded, multiplied as exact big integers, and
    /// decoded back -- exactly the "Cauchy product of the digit strings,
    /// carrying through mixed radices" the source describes, since encoding
    /// and decoding already apply `radix_at` at every position. The point is
    /// then restored with `shift(2R)`, and the cross-remainder correction
    /// term folds in the contribution of each operand's truncated tail.
    pub fn checked_mul(&self, other: &Self) -> Result<Self> {
        if self.base.name() != other.base.name() {
            return Err(Error::TypeMismatch);
        }
        let r = self.significant().max(other.significant());
        let a = self.resize(r);
        let b = other.resize(r);

        let ma = magnitude_int(&self.base, &a.all_digits(), 0);
        let mb = magnitude_int(&self.base, &b.all_digits(), 0);
        let product = ma * mb;
        let combined_digits = digits_from_magnitude(&self.base, product);

        let intermediate =
            BasedReal::from_parts(self.base.clone(), Sign::Positive, combined_digits, Vec::new(), 0.0);
        let mut result = intermediate.shift(2 * r as isize)?;

        let weight_r = self.base.position_weight(r as isize);
        let rem_weighted_a = weight_r * a.remainder;
        let rem_weighted_b = weight_r * b.remainder;
        let correction =
            a.abs().float() * rem_weighted_b + b.abs().float() * rem_weighted_a + rem_weighted_a * rem_weighted_b;

        let weight_2r = self.base.position_weight(2 * r as isize);
        let mut new_remainder = if weight_2r > 0.0 { correction / weight_2r } else { 0.0 };
        if new_remainder >= 1.0 {
            let bump_units = new_remainder.floor();
            let bump = BasedReal::from_int(self.base.clone(), bump_units as i64, 0)?.shift(2 * r as isize)?;
            result = result.checked_add(&bump)?;
            new_remainder -= bump_units;
        }
        result.remainder = new_remainder;

        let final_sign = self.sign * other.sign;
        Ok(result.with_sign(final_sign))
    }

    /// Multiplies by a plain integer scalar at the same significance.
    pub fn checked_mul_int(&self, n: i64) -> Result<Self> {
        let scalar = BasedReal::from_int(self.base.clone(), n, self.significant())?;
        self.checked_mul(&scalar)
    }
}

impl core::ops::Mul for &BasedReal {
    type Output = BasedReal;
    fn mul(self, other: &BasedReal) -> BasedReal {
        self.checked_mul(other).expect("operands must share a base")
    }
}

impl core::ops::Mul<i64> for &BasedReal {
    type Output = BasedReal;
    fn mul(self, n: i64) -> BasedReal {
        self.checked_mul_int(n).expect("scalar multiplication cannot fail for a valid base")
    }
}

impl core::ops::Mul<&BasedReal> for i64 {
    type Output = BasedReal;
    fn mul(self, other: &BasedReal) -> BasedReal {
        other * self
    }
}
