//! Division, `§4.4.9`. See `magnitude.rs` for why encoding both operands'
//! digits (resized to a shared fractional length) as exact big integers
//! turns positional division into ordinary big-integer long division.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use basedreal_base::{Error, Result};
use dashu_base::DivRemEuclid;
use dashu_int::IBig;

use crate::magnitude::{digits_from_magnitude, magnitude_int};
use crate::repr::BasedReal;

impl BasedReal {
    /// Divides `self` by `other`, producing `significant` fractional digits
    /// of the quotient.
    ///
    /// Both operands are resized to a shared `R`, so their `magnitude_int`
    /// encodings share the same `weight(R)` factor and divide out exactly:
    /// `ma / mb` is the quotient's integer part (decoded the same way
    /// `digits_from_magnitude` decodes any other magnitude), and the
    /// standard digit-by-digit long-division bring-down loop on the
    /// remainder produces the fractional digits.
    pub fn checked_div(&self, other: &Self, significant: usize) -> Result<Self> {
        if self.base.name() != other.base.name() {
            return Err(Error::TypeMismatch);
        }
        if other.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let r = self.significant().max(other.significant());
        let a = self.resize(r);
        let b = other.resize(r);

        let ma = magnitude_int(&self.base, &a.all_digits(), r);
        let mb = magnitude_int(&self.base, &b.all_digits(), r);

        let (quotient, mut remainder_big) = ma.div_rem_euclid(mb.clone());
        let integer_digits = digits_from_magnitude(&self.base, quotient);

        let mut fractional_digits = Vec::with_capacity(significant);
        for k in 1..=significant {
            let radix = IBig::from(self.base.radix_at(k as isize));
            remainder_big *= radix;
            let (digit, rem) = remainder_big.div_rem_euclid(mb.clone());
            let d: u32 = (&digit).try_into().expect("digit is bounded by its own radix, fits u32");
            fractional_digits.push(d);
            remainder_big = rem;
        }

        let remainder = remainder_big.to_f64().value() / mb.to_f64().value();
        let final_sign = self.sign * other.sign;

        Ok(BasedReal::from_parts(self.base.clone(), final_sign, integer_digits, fractional_digits, remainder))
    }

    /// Divides by a plain integer scalar, at the requested significance.
    pub fn checked_div_int(&self, n: i64, significant: usize) -> Result<Self> {
        let scalar = BasedReal::from_int(self.base.clone(), n, 0)?;
        self.checked_div(&scalar, significant)
    }

    /// Euclidean division: `(quotient, remainder)` such that
    /// `self == &quotient * other + remainder` and `0 <= remainder < |other|`,
    /// per the supplemental `checked_div_euclid` operation. Built from
    /// `checked_div`'s truncating quotient (rounded down towards the
    /// dividend's floor, via `floor`) rather than a separate algorithm.
    pub fn checked_div_euclid(&self, other: &Self, significant: usize) -> Result<(Self, Self)> {
        let raw = self.checked_div(other, significant)?;
        let q = raw.floor();
        let product = q.checked_mul(other)?;
        let rem = self.checked_sub(&product)?;
        Ok((q, rem))
    }

    /// `self mod other`, the remainder half of `checked_div_euclid`.
    pub fn checked_rem_euclid(&self, other: &Self, significant: usize) -> Result<Self> {
        Ok(self.checked_div_euclid(other, significant)?.1)
    }
}

impl core::ops::Div<&BasedReal> for &BasedReal {
    type Output = BasedReal;
    /// Divides at the dividend's own significance, matching the source's
    /// `__truediv__` default.
    fn div(self, other: &BasedReal) -> BasedReal {
        self.checked_div(other, self.significant()).expect("operands must share a base and a nonzero divisor")
    }
}
