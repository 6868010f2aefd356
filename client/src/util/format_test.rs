use super::*;

#[test]
fn group_thousands_inserts_commas() {
    assert_eq!(group_thousands("0"), "0");
    assert_eq!(group_thousands("999"), "999");
    assert_eq!(group_thousands("1000"), "1,000");
    assert_eq!(group_thousands("1234567"), "1,234,567");
}

#[test]
fn format_number_rounds_to_cents() {
    assert_eq!(format_number(1250.0), "1,250.00");
    assert_eq!(format_number(0.005), "0.01");
    assert_eq!(format_number(-42.5), "-42.50");
}

#[test]
fn format_number_never_prints_negative_zero() {
    assert_eq!(format_number(-0.001), "0.00");
}

#[test]
fn format_number_handles_non_finite() {
    assert_eq!(format_number(f64::NAN), "—");
}

#[test]
fn known_currencies_use_symbols() {
    assert_eq!(format_amount(1250.0, "USD"), "$1,250.00");
    assert_eq!(format_amount(-3.1, "eur"), "-€3.10");
}

#[test]
fn other_currencies_are_suffixed() {
    assert_eq!(format_amount(1250.0, "usdt"), "1,250.00 USDT");
}
