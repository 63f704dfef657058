use iso_currency::Currency;
use num_format::Locale;

/// Standard number decimal places for the given currency
/// (ex. JPY = 0, USD = 2).
fn decimal_places(currency: Currency) -> u32 {
    currency.exponent().unwrap_or(0) as u32
}

/// Format cash amount with leading currency symbol, correct number of decimal
/// places, and thousands separators (ex. $1,234.50, ¥1,235).
///
/// For consistency, uses en locale ('.' as decimal mark, i.e. 1,000.00)
/// regardless of user's locale or currency.
pub(crate) fn format_amount(amount: f64, currency: Currency) -> String {
    let fixed = format!("{:.*}", decimal_places(currency) as usize, amount.abs());
    let (integer_digits, fraction) = match fixed.split_once('.') {
        Some((integer_digits, fraction)) => (integer_digits, Some(fraction)),
        None => (fixed.as_str(), None),
    };
    // Amounts that round to zero print without a sign.
    let negative = amount < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));
    let sign = if negative { "-" } else { "" };
    let integer_part = group_thousands(integer_digits, Locale::en.separator());
    match fraction {
        Some(fraction) => format!("{}{}{}.{}", sign, currency.symbol(), integer_part, fraction),
        None => format!("{}{}{}", sign, currency.symbol(), integer_part),
    }
}

/// Inserts `separator` between groups of three digits, counted from the
/// right. Works on the decimal string so that amounts beyond the range of
/// any integer type keep every digit.
fn group_thousands(digits: &str, separator: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(c);
    }
    grouped
}

/// First `max` characters of `s`.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
