mod common;

use basedreal_real::BasedReal;
use common::{decimal_base, sexagesimal_base};
use dashu_int::IBig;

#[test]
fn floor_and_ceil_bracket_a_fractional_value() {
    let base = sexagesimal_base();
    let v = BasedReal::from_string(&base, "1; 30").unwrap();
    assert_eq!(v.floor().float(), 1.0);
    assert_eq!(v.ceil().float(), 2.0);
}

#[test]
fn floor_and_ceil_are_identity_on_integers() {
    let base = sexagesimal_base();
    let v = BasedReal::from_int(base, 5, 0).unwrap();
    assert_eq!(v.floor().float(), 5.0);
    assert_eq!(v.ceil().float(), 5.0);
}

#[test]
fn negative_floor_rounds_towards_negative_infinity() {
    let base = sexagesimal_base();
    let v = BasedReal::from_float(base, -1.5, 1).unwrap();
    assert_eq!(v.floor().float(), -2.0);
    assert_eq!(v.ceil().float(), -1.0);
}

#[test]
fn to_fraction_reduces_decimal_value() {
    let base = decimal_base();
    let v = BasedReal::from_string(&base, "1.5").unwrap();
    let (num, den) = v.to_fraction();
    assert_eq!(num, IBig::from(3));
    assert_eq!(den, IBig::from(2));
}

#[test]
fn to_base_round_trips_through_decimal() {
    let sexagesimal = sexagesimal_base();
    let decimal = decimal_base();
    let v = BasedReal::from_string(&sexagesimal, "1; 30").unwrap();
    let converted = v.to_base(decimal, 4).unwrap();
    assert!((converted.float() - 1.5).abs() < 1e-6);
}

#[test]
fn to_base_preserves_remainder_from_division() {
    let sexagesimal = sexagesimal_base();
    let decimal = decimal_base();
    let a = BasedReal::from_string(&sexagesimal, "7; 30").unwrap();
    let b = BasedReal::from_string(&sexagesimal, "3; 0").unwrap();
    let quotient = a.checked_div(&b, 2).unwrap();
    let converted = quotient.to_base(decimal, 8).unwrap();
    assert!((converted.float() - quotient.float()).abs() < 1e-6);
}
