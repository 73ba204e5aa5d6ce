mod common;

use basedreal_real::BasedReal;
use common::sexagesimal_base;

#[test]
fn multiplication_matches_scenario() {
    let base = sexagesimal_base();
    let a = BasedReal::from_string(&base, "01, 12; 04, 17").unwrap();
    let b = BasedReal::from_string(&base, "7; 45, 55").unwrap();
    let product = a.checked_mul(&b).unwrap();
    assert_eq!(product.to_string(), "09,19 ; 39,15,40,35");
}

#[test]
fn multiplying_by_one_is_identity() {
    let base = sexagesimal_base();
    let a = BasedReal::from_string(&base, "01, 12; 04, 17").unwrap();
    let one = BasedReal::one(base, 0);
    let product = a.checked_mul(&one).unwrap();
    assert!((product.float() - a.float()).abs() < 1e-6);
}

#[test]
fn multiplying_by_zero_is_zero() {
    let base = sexagesimal_base();
    let a = BasedReal::from_string(&base, "01, 12; 04, 17").unwrap();
    let zero = BasedReal::zero(base, 0);
    let product = a.checked_mul(&zero).unwrap();
    assert!(product.is_zero());
}

#[test]
fn scalar_multiplication_commutes() {
    let base = sexagesimal_base();
    let a = BasedReal::from_string(&base, "1; 30").unwrap();
    let left = &a * 3i64;
    let right = 3i64 * &a;
    assert!((left.float() - right.float()).abs() < 1e-9);
}
