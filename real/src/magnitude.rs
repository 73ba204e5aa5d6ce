//! Big-integer Horner encoding of a digit sequence, shared by multiplication
//! and division. `magnitude_int` folds a full (integer ++ fractional) digit
//! sequence into one exact integer by walking most-significant first and
//! multiplying the running total by each digit's own radix before adding it
//! -- i.e. `magnitude_int(v) == float(|v|) / weight(R)` where `R` is the
//! fractional length the digits were resized to. Two values resized to the
//! same `R` share that `weight(R)` factor, so `magnitude_int(a) /
//! magnitude_int(b) == float(|a|) / float(|b|)` exactly: this is what makes
//! big-integer division an exact stand-in for the positional one.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use basedreal_base::RadixBase;
use dashu_int::IBig;

pub(crate) fn magnitude_int(base: &RadixBase, all_digits: &[u32], r: usize) -> IBig {
    let total_len = all_digits.len();
    let integer_len = total_len - r;
    let mut acc = IBig::from(0);
    for (idx, &d) in all_digits.iter().enumerate() {
        let pos = if idx < integer_len {
            idx as isize - (integer_len as isize - 1)
        } else {
            (idx - integer_len) as isize + 1
        };
        let radix = base.radix_at(pos);
        acc = acc * IBig::from(radix) + IBig::from(d);
    }
    acc
}

/// Inverse of the integer half of `magnitude_int`: decomposes a non-negative
/// big integer into most-significant-first digits by repeatedly reducing
/// modulo `radix_at(position)`, walking outward from position 0.
pub(crate) fn digits_from_magnitude(base: &RadixBase, mut n: IBig) -> Vec<u32> {
    use dashu_base::DivRemEuclid;

    if n == IBig::from(0) {
        return vec![0];
    }
    let mut lsb_first = Vec::new();
    let mut pos: isize = 0;
    while n != IBig::from(0) {
        let radix = IBig::from(base.radix_at(pos));
        let (q, r) = n.div_rem_euclid(radix);
        let d: u32 = (&r).try_into().expect("remainder is bounded by its radix, fits u32");
        lsb_first.push(d);
        n = q;
        pos -= 1;
    }
    lsb_first.reverse();
    lsb_first
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::decimal_base;

    #[test]
    fn magnitude_matches_float_over_weight() {
        let base = decimal_base();
        // digits for 1.50 (R=2): [1, 5, 0]
        let m = magnitude_int(&base, &[1, 5, 0], 2);
        assert_eq!(m, IBig::from(150));
    }

    #[test]
    fn digits_from_magnitude_roundtrips() {
        let base = decimal_base();
        let digits = digits_from_magnitude(&base, IBig::from(1234));
        assert_eq!(digits, vec![1, 2, 3, 4]);
    }

    #[test]
    fn zero_magnitude_is_single_zero_digit() {
        let base = decimal_base();
        assert_eq!(digits_from_magnitude(&base, IBig::from(0)), vec![0]);
    }
}
