//! Integer exponentiation, `§4.4.10`. Non-integer exponents are out of
//! scope (per spec's Non-goals) and fail `NotSupported`.

use basedreal_base::{Error, Result};

use crate::repr::BasedReal;

impl BasedReal {
    /// `self ^ n` for an integer exponent: `n == 0` gives `1` at zero
    /// significance regardless of `self` (including `self == 0`, matching
    /// the conventional `0^0 == 1`); `n > 0` is repeated multiplication;
    /// `n < 0` is repeated division of `1` by `self`, failing
    /// `DivisionByZero` if `self` is zero.
    pub fn checked_pow(&self, n: i64) -> Result<Self> {
        if n == 0 {
            return Ok(BasedReal::one(self.base.clone(), 0));
        }
        if n > 0 {
            let mut acc = self.clone();
            for _ in 1..n {
                acc = acc.checked_mul(self)?;
            }
            Ok(acc)
        } else {
            if self.is_zero() {
                return Err(Error::DivisionByZero);
            }
            let one = BasedReal::one(self.base.clone(), self.significant());
            let mut acc = one.checked_div(self, self.significant())?;
            for _ in 1..(-n) {
                acc = acc.checked_div(self, self.significant())?;
            }
            Ok(acc)
        }
    }
}
