//! Named mixed-radix systems and the position math built on top of them.

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

#[cfg(feature = "std")]
use std::sync::Mutex;

use dashu_int::{IBig, UBig};

use crate::looping::LoopingList;
use crate::{Error, Result};

/// `digit_width(radix) = ceil(log10(radix))`, the number of base-10 characters
/// needed to render one position of the given radix.
pub fn digit_width(radix: u32) -> usize {
    debug_assert!(radix >= 2);
    let mut n = radix - 1;
    let mut width = 1;
    while n >= 10 {
        n /= 10;
        width += 1;
    }
    width
}

/// A named mixed-radix positional system: the radices of its integer and
/// fractional positions, and the separators used to render the integer part.
///
/// `left[k]` is the radix of the integer position `k` away from the radix
/// point (`k = 0` is the position immediately left of the point); `right[k]`
/// is the radix of the fractional position `k` positions to the right of the
/// point. Both sequences are [`LoopingList`]s, so a short pattern implies an
/// infinite repeating tail of positions.
#[derive(Debug)]
pub struct RadixBase {
    left: LoopingList<u32>,
    right: LoopingList<u32>,
    name: String,
    integer_separators: LoopingList<String>,
    #[cfg(feature = "std")]
    weight_cache: Mutex<alloc_compat::HashMap<isize, f64>>,
}

#[cfg(feature = "std")]
mod alloc_compat {
    pub use std::collections::HashMap;
}

impl RadixBase {
    /// Builds a new base. Fails with [`Error::InvalidRadix`] if any radix in
    /// `left` or `right` is less than 2, per the registry's validation rule.
    pub fn new(
        left: Vec<u32>,
        right: Vec<u32>,
        name: impl Into<String>,
        separators: Option<Vec<String>>,
    ) -> Result<Self> {
        if left.iter().any(|&r| r < 2) || right.iter().any(|&r| r < 2) {
            return Err(Error::InvalidRadix);
        }
        let separators = match separators {
            Some(seps) => seps,
            None => left
                .iter()
                .map(|&r| if r == 10 { String::new() } else { String::from(",") })
                .collect(),
        };
        Ok(RadixBase {
            left: LoopingList::new(left),
            right: LoopingList::new(right),
            name: name.into(),
            integer_separators: LoopingList::new(separators),
            #[cfg(feature = "std")]
            weight_cache: Mutex::new(alloc_compat::HashMap::new()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn left(&self) -> &LoopingList<u32> {
        &self.left
    }

    pub fn right(&self) -> &LoopingList<u32> {
        &self.right
    }

    pub fn integer_separators(&self) -> &LoopingList<String> {
        &self.integer_separators
    }

    /// Radix governing the digit at position `p` (see the position-index
    /// convention: `p == 0` is the rightmost integer digit, negative `p`
    /// goes left/more-significant, positive `p` goes right/fractional).
    ///
    /// For `p <= 0` this is `left.get(p - 1)`, *not* `left.get(-p)`: with a
    /// registered pattern of length `n`, `left[0]` is the outermost
    /// (most-significant) integer position and `left[n-1]` sits immediately
    /// left of the radix point, so position `0` wraps to `left[n-1]` via the
    /// looping index `-1`, position `-1` to `left[n-2]`, and so on. This
    /// mirrors how the registered pattern is actually consumed (confirmed by
    /// the worked `historical` example: digits `[10, 12, 30]` assign radix
    /// `30` to position `0`, matching `"2r 7s 29; 45" == 339.75`).
    pub fn radix_at(&self, p: isize) -> u32 {
        if p > 0 {
            *self.right.get(p - 1)
        } else {
            *self.left.get(p - 1)
        }
    }

    /// Real-valued weight of one unit at position `p`, relative to position 0.
    ///
    /// `p == 0` weighs `1`; `p > 0` weighs `prod_{k=1..=p} 1/right[k-1]`;
    /// `p < 0` weighs `prod_{k=0..|p|-1} left[k]`. Memoized behind a mutex
    /// when `std` is available, since the set of positions ever queried in a
    /// running process is unbounded but typically small and reused often.
    pub fn position_weight(&self, p: isize) -> f64 {
        #[cfg(feature = "std")]
        {
            if let Some(w) = self.weight_cache.lock().unwrap().get(&p) {
                return *w;
            }
            let w = self.compute_position_weight(p);
            self.weight_cache.lock().unwrap().insert(p, w);
            w
        }
        #[cfg(not(feature = "std"))]
        {
            self.compute_position_weight(p)
        }
    }

    fn compute_position_weight(&self, p: isize) -> f64 {
        if p == 0 {
            1.0
        } else if p > 0 {
            let mut w = 1.0;
            for k in 1..=p {
                w /= *self.right.get(k - 1) as f64;
            }
            w
        } else {
            let mut w = 1.0;
            for k in 0..(-p) {
                w *= *self.left.get(k) as f64;
            }
            w
        }
    }

    /// Exact rational `N / (D_i * D_j)` used to align fractional digit
    /// positions `i` and `j` during multiplication, where
    /// `N = prod_{k=1..=i+j} right[k-1]`, `D_i = prod_{k=1..=i} right[k-1]`,
    /// `D_j = prod_{k=1..=j} right[k-1]`. Returned as an exact `(numerator,
    /// denominator)` pair of `UBig`s rather than a floating approximation,
    /// since callers use it to align big-integer digit buffers.
    pub fn cross_factor(&self, i: usize, j: usize) -> (UBig, UBig) {
        let mut n = UBig::ONE;
        for k in 1..=(i + j) {
            n *= *self.right.get(k as isize - 1);
        }
        let mut d_i = UBig::ONE;
        for k in 1..=i {
            d_i *= *self.right.get(k as isize - 1);
        }
        let mut d_j = UBig::ONE;
        for k in 1..=j {
            d_j *= *self.right.get(k as isize - 1);
        }
        let denom = d_i * d_j;
        let g = dashu_base::Gcd::gcd(n.clone(), denom.clone());
        (n / &g, denom / &g)
    }

    /// Product of `left[0..n)`, as an exact integer: the number of distinct
    /// integer values representable in `n` integer positions.
    pub fn integer_span(&self, n: usize) -> IBig {
        let mut span = IBig::ONE;
        for k in 0..n {
            span *= *self.left.get(k as isize);
        }
        span
    }
}
