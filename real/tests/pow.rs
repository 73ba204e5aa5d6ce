mod common;

use basedreal_real::BasedReal;
use common::sexagesimal_base;

#[test]
fn zeroth_power_is_one() {
    let base = sexagesimal_base();
    let v = BasedReal::from_string(&base, "3; 30").unwrap();
    assert_eq!(v.checked_pow(0).unwrap().float(), 1.0);
}

#[test]
fn positive_power_is_repeated_multiplication() {
    let base = sexagesimal_base();
    let v = BasedReal::from_int(base, 3, 0).unwrap();
    let cubed = v.checked_pow(3).unwrap();
    assert!((cubed.float() - 27.0).abs() < 1e-6);
}

#[test]
fn negative_power_is_reciprocal() {
    let base = sexagesimal_base();
    let v = BasedReal::from_int(base, 2, 4).unwrap();
    let inv_square = v.checked_pow(-2).unwrap();
    assert!((inv_square.float() - 0.25).abs() < 1e-4);
}

#[test]
fn zero_to_negative_power_fails() {
    let base = sexagesimal_base();
    let zero = BasedReal::zero(base, 0);
    assert_eq!(zero.checked_pow(-1).unwrap_err(), basedreal_base::Error::DivisionByZero);
}
