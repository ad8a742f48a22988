use crate::mach::Val;

#[test]
fn test_plain_numbers() {
    assert_eq!(Val::number_to_string(0.0), "0");
    assert_eq!(Val::number_to_string(15.0), "15");
    assert_eq!(Val::number_to_string(-2.5), "-2.5");
    assert_eq!(Val::number_to_string(3.14), "3.14");
}

#[test]
fn test_six_significant_digits() {
    assert_eq!(Val::number_to_string(2.0 / 3.0), "0.666667");
    assert_eq!(Val::number_to_string(123456.7), "123457");
}

#[test]
fn test_scientific_notation() {
    assert_eq!(Val::number_to_string(1e6), "1e+06");
    assert_eq!(Val::number_to_string(1e20), "1e+20");
    assert_eq!(Val::number_to_string(0.0001), "0.0001");
    assert_eq!(Val::number_to_string(0.00001), "1e-05");
    assert_eq!(Val::number_to_string(-2.5e-7), "-2.5e-07");
}

#[test]
fn test_rounding_carries_into_a_new_decade() {
    assert_eq!(Val::number_to_string(999999.5), "1e+06");
    assert_eq!(Val::number_to_string(999999.4), "999999");
    assert_eq!(Val::number_to_string(0.99999995), "1");
    assert_eq!(Val::number_to_string(0.000099999999), "0.0001");
}

#[test]
fn test_display() {
    assert_eq!(Val::Number(42.0).to_string(), "42");
    assert_eq!(Val::Text("HI".to_string()).to_string(), "HI");
}

#[test]
fn test_as_number() {
    assert_eq!(Val::Number(1.5).as_number().unwrap(), 1.5);
    assert!(Val::Text("X".to_string()).as_number().is_err());
}
