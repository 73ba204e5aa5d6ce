//! Digit-position indexing and slicing, `§4.4.4`.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use basedreal_base::{Error, Result};

use crate::repr::BasedReal;

impl BasedReal {
    /// The digit at position `p` (`p == 0` is the rightmost integer digit,
    /// negative goes left/more-significant, positive goes right/fractional),
    /// translating to the underlying `all_digits()` array via
    /// `offset = p + len(integer_digits) - 1`.
    pub fn digit_at(&self, p: isize) -> Result<u32> {
        let len = self.integer_digits.len() as isize;
        let offset = p + len - 1;
        let all = self.all_digits();
        if offset < 0 || offset as usize >= all.len() {
            return Err(Error::IndexOutOfRange);
        }
        Ok(all[offset as usize])
    }

    /// The digits from position `start` (most significant) through `end`
    /// (least significant), inclusive (`start <= end`), in the same
    /// most-significant-first order as `all_digits()`.
    pub fn digit_range(&self, start: isize, end: isize) -> Result<Vec<u32>> {
        if start > end {
            return Err(Error::IndexOutOfRange);
        }
        let mut out = Vec::with_capacity((end - start + 1) as usize);
        for p in start..=end {
            out.push(self.digit_at(p)?);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::sexagesimal_base;
    use crate::BasedReal;

    #[test]
    fn indexes_integer_and_fractional_positions() {
        let base = sexagesimal_base();
        let v = BasedReal::from_string(&base, "01, 12; 04, 17").unwrap();
        assert_eq!(v.digit_at(0).unwrap(), 12);
        assert_eq!(v.digit_at(-1).unwrap(), 1);
        assert_eq!(v.digit_at(1).unwrap(), 4);
        assert_eq!(v.digit_at(2).unwrap(), 17);
    }

    #[test]
    fn out_of_range_position_fails() {
        let base = sexagesimal_base();
        let v = BasedReal::from_string(&base, "01, 12; 04, 17").unwrap();
        assert_eq!(v.digit_at(-5).unwrap_err(), basedreal_base::Error::IndexOutOfRange);
        assert_eq!(v.digit_at(5).unwrap_err(), basedreal_base::Error::IndexOutOfRange);
    }

    #[test]
    fn digit_range_returns_most_significant_first() {
        let base = sexagesimal_base();
        let v = BasedReal::from_string(&base, "01, 12; 04, 17").unwrap();
        assert_eq!(v.digit_range(-1, 1).unwrap(), vec![1, 12, 4]);
    }
}
