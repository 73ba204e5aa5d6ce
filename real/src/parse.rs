//! `from_string` (`§4.4.3`) and the canonical string rendering (`§4.4.13`).

#[cfg(not(feature = "std"))]
use alloc::{format, string::String, string::ToString, sync::Arc, vec::Vec};
#[cfg(feature = "std")]
use std::sync::Arc;

use core::fmt;

use basedreal_base::{digit_width, Error, RadixBase, Result};
use dashu_base::Sign;

use crate::repr::BasedReal;

impl BasedReal {
    /// Parses a value out of its canonical textual form (`§6`'s grammar),
    /// per `§4.4.3`.
    pub fn from_string(base: &Arc<RadixBase>, s: &str) -> Result<Self> {
        if base.name() == "decimal" {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Err(Error::EmptyString);
            }
            let x: f64 = trimmed.parse().map_err(|_| Error::BadFormat)?;
            let significant = match trimmed.split_once('.') {
                Some((_, frac)) => frac.chars().filter(|c| c.is_ascii_digit()).count(),
                None => 0,
            };
            return BasedReal::from_float(base.clone(), x, significant);
        }

        let s = s.trim().to_lowercase();
        if s.is_empty() {
            return Err(Error::EmptyString);
        }
        let (sign, rest) = match s.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest),
            None => (Sign::Positive, s.as_str()),
        };

        let mut parts = rest.splitn(3, ';');
        let left = parts.next().unwrap_or("").trim();
        let right = parts.next().unwrap_or("").trim();
        if parts.next().is_some() {
            return Err(Error::TooManySeparators);
        }

        let fractional_digits = if right.is_empty() {
            Vec::new()
        } else {
            right
                .split(',')
                .map(|d| d.trim().parse::<u32>().map_err(|_| Error::BadFormat))
                .collect::<Result<Vec<u32>>>()?
        };

        let mut integer_digits = parse_integer_part(base, left)?;
        if integer_digits.is_empty() {
            integer_digits.push(0);
        }

        BasedReal::validate_digits(base, &integer_digits, &fractional_digits)?;
        Ok(BasedReal::from_parts(base.clone(), sign, integer_digits, fractional_digits, 0.0))
    }
}

/// Right-to-left integer part parsing, per `§4.4.3` step 4: positions are
/// consumed from the rightmost (least significant) end using that
/// position's separator, one character at a time when the separator is
/// empty (the decimal-like case).
fn parse_integer_part(base: &RadixBase, left: &str) -> Result<Vec<u32>> {
    let mut numbers: Vec<u32> = Vec::new();
    if left.is_empty() {
        return Ok(numbers);
    }
    let reversed: String = left.chars().rev().collect();
    let mut rleft = reversed;
    let total_len = left.chars().count();
    let mut i = 0usize;

    while i < total_len {
        let separator = base.integer_separators().get(-(i as isize) - 1).trim().to_lowercase();
        if !separator.is_empty() {
            match rleft.find(&separator) {
                Some(idx) => {
                    let value = &rleft[..idx];
                    let rem = &rleft[idx + separator.len()..];
                    let digit_str: String = value.chars().rev().collect();
                    let digit: u32 = digit_str.trim().parse().map_err(|_| Error::BadFormat)?;
                    numbers.insert(0, digit);
                    rleft = rem.trim().to_string();
                }
                None => break,
            }
        } else {
            let mut chars = rleft.chars();
            let value = chars.next().ok_or(Error::BadFormat)?;
            let digit = value.to_digit(10).ok_or(Error::BadFormat)?;
            numbers.insert(0, digit);
            rleft = chars.as_str().to_string();
        }
        if rleft.chars().count() <= 1 {
            break;
        }
        i += 1;
    }

    if !rleft.is_empty() {
        let digit_str: String = rleft.chars().rev().collect();
        let digit: u32 = digit_str.trim().parse().map_err(|_| Error::BadFormat)?;
        numbers.insert(0, digit);
    }

    Ok(numbers)
}

impl fmt::Display for BasedReal {
    /// Renders the canonical form: decimal bases use plain `int.frac`
    /// notation, other bases use the base's integer separators with each
    /// position zero-padded to `digit_width(radix_at(position))`, then
    /// ` ; `, then comma-joined fractional digits. Always rounds first
    /// (`§4.4.6`), matching the source's "`__repr__` rounds, not truncates".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.round(None);

        if rounded.base.name() == "decimal" {
            let int_str: String = rounded.integer_digits.iter().map(|d| d.to_string()).collect();
            let frac_str: String = rounded.fractional_digits.iter().map(|d| d.to_string()).collect();
            return write!(f, "{int_str}.{frac_str}");
        }

        let mut out = String::new();
        if rounded.sign == Sign::Negative {
            out.push('-');
        }

        let len = rounded.integer_digits.len() as isize;
        for (i, &d) in rounded.integer_digits.iter().enumerate() {
            if i > 0 {
                out.push_str(rounded.base.integer_separators().get(i as isize));
            }
            let pos = i as isize - (len - 1);
            let width = digit_width(rounded.base.radix_at(pos));
            out.push_str(&format!("{:0>width$}", d, width = width));
        }

        out.push_str(" ; ");

        let n = rounded.fractional_digits.len();
        for (j, &d) in rounded.fractional_digits.iter().enumerate() {
            let width = digit_width(rounded.base.radix_at(j as isize + 1));
            out.push_str(&format!("{:0>width$}", d, width = width));
            if j + 1 < n {
                out.push(',');
            }
        }

        write!(f, "{out}")
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{decimal_base, historical_base, sexagesimal_base};
    use crate::BasedReal;

    #[test]
    fn parses_plain_sexagesimal() {
        let base = sexagesimal_base();
        let v = BasedReal::from_string(&base, "1, 12; 4, 25").unwrap();
        assert_eq!(v.integer_digits(), &[1, 12]);
        assert_eq!(v.fractional_digits(), &[4, 25]);
    }

    #[test]
    fn parses_historical_worked_example() {
        let base = historical_base();
        let v = BasedReal::from_string(&base, "2r 7s 29; 45").unwrap();
        assert!((v.float() - 339.75).abs() < 1e-9);
    }

    #[test]
    fn empty_string_fails() {
        let base = sexagesimal_base();
        assert_eq!(BasedReal::from_string(&base, "").unwrap_err(), basedreal_base::Error::EmptyString);
    }

    #[test]
    fn too_many_separators_fails() {
        let base = sexagesimal_base();
        assert_eq!(
            BasedReal::from_string(&base, "1;2;3").unwrap_err(),
            basedreal_base::Error::TooManySeparators
        );
    }

    #[test]
    fn decimal_significance_excludes_sign_and_point() {
        let base = decimal_base();
        let v = BasedReal::from_string(&base, "-12.345").unwrap();
        assert_eq!(v.significant(), 3);
    }

    #[test]
    fn display_roundtrips_sexagesimal() {
        let base = sexagesimal_base();
        let v = BasedReal::from_string(&base, "01, 12; 04, 17").unwrap();
        assert_eq!(v.to_string(), "01,12 ; 04,17");
    }
}
