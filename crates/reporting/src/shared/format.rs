use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Format a currency amount with dot thousands separators and a comma
/// decimal point, always two decimals: `1234567.5` → `"1.234.567,50"`.
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let raw = format!("{:.2}", rounded);
    let (int_part, frac_part) = raw.split_once('.').unwrap_or((raw.as_str(), "00"));
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();

    format!("{}{},{}", sign, grouped, frac_part)
}

/// Format a date as DD.MM.YYYY for period labels.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}
