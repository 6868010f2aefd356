//! Money formatting for cards and tables.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Symbol for well-known fiat codes; `None` means "suffix the code".
pub fn currency_symbol(code: &str) -> Option<&'static str> {
    match code.to_ascii_uppercase().as_str() {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        _ => None,
    }
}

/// Group the integer part with commas: `1234567` -> `"1,234,567"`.
pub fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format an amount with two decimals and thousands separators, without a
/// currency marker.
pub fn format_number(amount: f64) -> String {
    if !amount.is_finite() {
        return "—".to_owned();
    }
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{}.{frac_part}", group_thousands(int_part))
}

/// `$1,250.00`, `-€3.10`, `1,250.00 USDT`.
pub fn format_amount(amount: f64, currency: &str) -> String {
    let number = format_number(amount);
    match currency_symbol(currency) {
        Some(symbol) => match number.strip_prefix('-') {
            Some(unsigned) => format!("-{symbol}{unsigned}"),
            None => format!("{symbol}{number}"),
        },
        None => format!("{number} {}", currency.to_ascii_uppercase()),
    }
}
