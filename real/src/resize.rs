//! `resize`, `truncate`, `shift` and `round`.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use basedreal_base::Result;

use crate::carry::extract_fractional;
use crate::repr::BasedReal;

impl BasedReal {
    /// Changes the fractional length to exactly `significant`, per `§4.4.5`.
    /// Growing converts the current remainder into new trailing fractional
    /// digits; shrinking folds the dropped tail back into the remainder, in
    /// units of one unit at the last remaining fractional position.
    ///
    /// `significant` is a `usize`, so the "negative significant fails
    /// `BadFormat`" case from the source is unrepresentable by construction
    /// rather than checked at runtime.
    pub fn resize(&self, significant: usize) -> Self {
        let cur = self.significant();
        if significant == cur {
            return self.clone();
        }
        if significant > cur {
            let (new_digits, new_rem) =
                extract_fractional(self.remainder, &self.base, cur as isize + 1, significant - cur);
            let mut frac = self.fractional_digits.clone();
            frac.extend(new_digits);
            BasedReal::from_parts(
                self.base.clone(),
                self.sign,
                self.integer_digits.clone(),
                frac,
                new_rem,
            )
        } else {
            let mut acc = self.remainder;
            for j in (significant..cur).rev() {
                let radix = self.base.radix_at(j as isize + 1) as f64;
                acc = (self.fractional_digits[j] as f64 + acc) / radix;
            }
            let frac = self.fractional_digits[..significant].to_vec();
            BasedReal::from_parts(self.base.clone(), self.sign, self.integer_digits.clone(), frac, acc)
        }
    }

    /// Keeps the first `n` fractional digits and discards the rest along
    /// with the remainder (unlike `resize`, the dropped tail's value is not
    /// folded back in).
    pub fn truncate(&self, n: usize) -> Self {
        let n = n.min(self.fractional_digits.len());
        let frac = self.fractional_digits[..n].to_vec();
        BasedReal::from_parts(self.base.clone(), self.sign, self.integer_digits.clone(), frac, 0.0)
    }

    /// Moves the radix point by `i` positions by padding the full digit
    /// sequence with zeros and re-splitting it `i` positions over, exactly
    /// as the source's `shift` does: shifting right (`i > 0`) walks `i`
    /// least-significant integer digits into the fractional part (padding
    /// the integer part on the left with zeros), shifting left (`i < 0`)
    /// walks `|i|` most-significant fractional digits into the integer part
    /// (padding the fractional part on the right with zeros).
    ///
    /// Can fail `InvalidRadix` in a genuinely mixed-radix base: a digit
    /// valid at its old position is not guaranteed to fit the radix of the
    /// position it is shifted into.
    pub fn shift(&self, i: isize) -> Result<Self> {
        if i == 0 {
            return Ok(self.clone());
        }
        let mut all: Vec<u32> = Vec::new();
        if i > 0 {
            all.extend(core::iter::repeat(0).take(i as usize));
        }
        all.extend(self.all_digits());
        if i < 0 {
            all.extend(core::iter::repeat(0).take((-i) as usize));
        }
        let offset = if i > 0 {
            self.integer_digits.len()
        } else {
            self.integer_digits.len() + (-i) as usize
        };
        let offset = offset.min(all.len());
        let (left_part, right_part) = all.split_at(offset);

        BasedReal::validate_digits(&self.base, left_part, right_part)?;
        Ok(BasedReal::from_parts(
            self.base.clone(),
            self.sign,
            left_part.to_vec(),
            right_part.to_vec(),
            self.remainder,
        ))
    }

    /// Rounds to `significant` fractional positions (defaulting to the
    /// current significance), carrying a unit into position `significant`
    /// when the remainder is `>= 0.5` (round-half-up, away from zero) before
    /// truncating.
    pub fn round(&self, significant: Option<usize>) -> Self {
        let significant = significant.unwrap_or_else(|| self.significant());
        let resized = self.resize(significant);
        if resized.remainder >= 0.5 {
            let one_at_n = BasedReal::one(self.base.clone(), 0)
                .shift(significant as isize)
                .expect("shifting a freshly constructed one can't produce an invalid digit");
            let bumped = if self.sign == dashu_base::Sign::Negative {
                resized.checked_sub(&one_at_n).expect("same base by construction")
            } else {
                resized.checked_add(&one_at_n).expect("same base by construction")
            };
            bumped.truncate(significant)
        } else {
            resized.truncate(significant)
        }
    }
}
