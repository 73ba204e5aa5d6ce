//! Addition and subtraction, `§4.4.7`.

#[cfg(not(feature = "std"))]
use alloc::vec;

use basedreal_base::{Error, Result};
use dashu_base::Sign;

use crate::carry::{from_lsb_buffer, normalize, to_lsb_buffer};
use crate::repr::BasedReal;

impl BasedReal {
    /// Adds two values bound to the same base, tracking the combined
    /// remainder and propagating carries/borrows through the (possibly
    /// mixed) radices at every position, per `§4.4.7`.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        if self.base.name() != other.base.name() {
            return Err(Error::TypeMismatch);
        }
        let r = self.significant().max(other.significant());
        let a = self.resize(r);
        let b = other.resize(r);

        let l = a.integer_digits.len().max(b.integer_digits.len());

        // Working buffer, least-significant first: `r` fractional slots, an
        // integer carry slot for the folded remainder, then `l` integer slots.
        let mut buf = vec![0i64; r + l + 1];

        add_signed(&mut buf, &to_lsb_buffer(&a.fractional_digits), &to_lsb_buffer(&a.integer_digits), a.sign);
        add_signed(&mut buf, &to_lsb_buffer(&b.fractional_digits), &to_lsb_buffer(&b.integer_digits), b.sign);

        let combined_rem = a.remainder * sign_mult(a.sign) + b.remainder * sign_mult(b.sign);
        let rem_floor = combined_rem.floor();
        buf[0] += rem_floor as i64;
        let mut rem = combined_rem - rem_floor;
        if rem < 0.0 {
            rem += 1.0;
            buf[0] -= 1;
        }

        normalize(&mut buf, r as isize, &self.base);

        // The buffer is signed-aggregate, not guaranteed non-negative: if the
        // result is negative overall, negate every slot and renormalize.
        let is_negative = buf.iter().rev().find(|&&d| d != 0).map(|&d| d < 0).unwrap_or(false);
        if is_negative {
            for d in buf.iter_mut() {
                *d = -*d;
            }
            normalize(&mut buf, r as isize, &self.base);
        }

        let (integer_digits, fractional_digits) = from_lsb_buffer(&buf, r);
        let sign = if is_negative { Sign::Negative } else { Sign::Positive };
        Ok(BasedReal::from_parts(self.base.clone(), sign, integer_digits, fractional_digits, rem))
    }

    /// `self - other`, implemented as `self + (-other)`.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.checked_add(&other.negate())
    }
}

fn sign_mult(sign: Sign) -> f64 {
    match sign {
        Sign::Positive => 1.0,
        Sign::Negative => -1.0,
    }
}

/// Adds a signed digit sequence (fractional part then integer part, both
/// least-significant first) into `buf`, scaled by `sign`.
fn add_signed(buf: &mut [i64], frac_lsb: &[i64], int_lsb: &[i64], sign: Sign) {
    let s = match sign {
        Sign::Positive => 1,
        Sign::Negative => -1,
    };
    for (k, &d) in frac_lsb.iter().enumerate() {
        buf[k] += s * d;
    }
    let offset = frac_lsb.len();
    for (k, &d) in int_lsb.iter().enumerate() {
        buf[offset + k] += s * d;
    }
}

impl core::ops::Add for &BasedReal {
    type Output = BasedReal;
    fn add(self, other: &BasedReal) -> BasedReal {
        self.checked_add(other).expect("operands must share a base")
    }
}

impl core::ops::Sub for &BasedReal {
    type Output = BasedReal;
    fn sub(self, other: &BasedReal) -> BasedReal {
        self.checked_sub(other).expect("operands must share a base")
    }
}
