mod common;

use basedreal_real::BasedReal;
use common::{decimal_base, sexagesimal_base};

#[test]
fn equal_structurally_within_the_same_base() {
    let base = sexagesimal_base();
    let a = BasedReal::from_string(&base, "1; 30").unwrap();
    let b = BasedReal::from_string(&base, "1; 30").unwrap();
    assert_eq!(a, b);
}

#[test]
fn equal_across_bases_via_float_fallback() {
    let sexagesimal = sexagesimal_base();
    let decimal = decimal_base();
    let a = BasedReal::from_string(&sexagesimal, "1; 30").unwrap();
    let b = BasedReal::from_string(&decimal, "1.5").unwrap();
    assert_eq!(a, b);
}

#[test]
fn orders_by_value() {
    let base = sexagesimal_base();
    let a = BasedReal::from_string(&base, "1; 30").unwrap();
    let b = BasedReal::from_string(&base, "2; 0").unwrap();
    assert!(a < b);
    assert!(b > a);
}

#[test]
fn negative_values_order_below_positive() {
    let base = sexagesimal_base();
    let a = BasedReal::from_float(base.clone(), -1.0, 0).unwrap();
    let b = BasedReal::from_float(base, 1.0, 0).unwrap();
    assert!(a < b);
}
