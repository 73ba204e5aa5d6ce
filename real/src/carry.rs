//! The single shared carry/borrow normalisation primitive used by resize,
//! rounding, addition and multiplication. Isolated here per the spec's
//! design note that every normalisation step must consult the radix at its
//! own position rather than a fixed base.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use basedreal_base::RadixBase;

/// Converts a most-significant-first digit sequence into a least-significant
/// -first signed buffer, so index `k` always corresponds to position `r - k`
/// regardless of how the integer/fractional split falls inside it.
pub(crate) fn to_lsb_buffer(digits: &[u32]) -> Vec<i64> {
    digits.iter().rev().map(|&d| d as i64).collect()
}

/// Normalises `buf` (least-significant-first, `buf[k]` at position `r - k`)
/// so every entry satisfies `0 <= buf[k] < radix_at(r - k)`, propagating
/// carries (or borrows, for negative entries) into the next more
/// significant position. Growing the buffer as needed for a final carry.
pub(crate) fn normalize(buf: &mut Vec<i64>, r: isize, base: &RadixBase) {
    let mut k = 0usize;
    while k < buf.len() {
        let pos = r - k as isize;
        let radix = base.radix_at(pos) as i64;
        let carry = buf[k].div_euclid(radix);
        buf[k] = buf[k].rem_euclid(radix);
        if carry != 0 {
            if k + 1 == buf.len() {
                buf.push(0);
            }
            buf[k + 1] += carry;
        }
        k += 1;
    }
}

/// Splits a normalised, non-negative, least-significant-first buffer back
/// into most-significant-first `(integer_digits, fractional_digits)`, given
/// that the buffer's least significant end sits at position `r`.
pub(crate) fn from_lsb_buffer(buf: &[i64], r: usize) -> (Vec<u32>, Vec<u32>) {
    let msb_first: Vec<u32> = buf.iter().rev().map(|&d| d as u32).collect();
    let split = msb_first.len().saturating_sub(r);
    let (int_part, frac_part) = msb_first.split_at(split);
    (int_part.to_vec(), frac_part.to_vec())
}

/// Extracts `count` fractional digits starting at position `start_pos` out
/// of `x`, a fraction of one unit at position `start_pos - 1` (so `x` is in
/// `[0, 1)`), the way [`crate::construct::from_float`] and
/// [`crate::resize::resize`] both grow digits: multiply by the position's
/// radix, take the floor as the digit, keep the fractional remainder for the
/// next position. Returns the digits and the final leftover, itself a
/// fraction of one unit at position `start_pos + count - 1`.
pub(crate) fn extract_fractional(
    mut x: f64,
    base: &RadixBase,
    start_pos: isize,
    count: usize,
) -> (Vec<u32>, f64) {
    let mut digits = Vec::with_capacity(count);
    for k in 0..count {
        let pos = start_pos + k as isize;
        let radix = base.radix_at(pos) as f64;
        x *= radix;
        let d = x.floor().clamp(0.0, radix - 1.0);
        x -= d;
        digits.push(d as u32);
    }
    (digits, x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use basedreal_base::RadixBase;

    #[test]
    fn carries_propagate_through_mixed_radix() {
        let base = RadixBase::new(vec![10, 12, 30], vec![60], "t-carry", None).unwrap();
        // position 0 has radix 30 (the innermost `left` entry), should carry into position -1.
        let mut buf = vec![35i64, 0];
        normalize(&mut buf, 0, &base);
        assert_eq!(buf, vec![5, 1]);
    }

    #[test]
    fn negative_entries_borrow() {
        let base = RadixBase::new(vec![10, 12, 30], vec![60], "t-borrow", None).unwrap();
        let mut buf = vec![-3i64, 2];
        normalize(&mut buf, 0, &base);
        assert_eq!(buf, vec![27, 1]);
    }

    #[test]
    fn roundtrip_through_buffers() {
        let base = RadixBase::new(vec![60], vec![60], "t-roundtrip", None).unwrap();
        let digits = vec![1u32, 2, 3];
        let buf = to_lsb_buffer(&digits);
        let (int_part, frac_part) = from_lsb_buffer(&buf, 1);
        assert_eq!(int_part, vec![1, 2]);
        assert_eq!(frac_part, vec![3]);
        let _ = &base;
    }
}
