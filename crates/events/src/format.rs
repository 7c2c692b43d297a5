// In crates/events/src/format.rs

use rust_decimal::Decimal;

/// "1,234.50 USDT". Two decimals, comma-grouped thousands.
pub fn format_amount(amount: Decimal, currency: &str) -> String {
    let rounded = amount.round_dp(2);
    let negative = rounded < Decimal::ZERO;
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part} {currency}")
}

/// "2.00%"
pub fn format_percent(pct: Decimal) -> String {
    format!("{:.2}%", pct.round_dp(2))
}

/// Converts a [0, 1] fraction to a percentage and formats it, e.g. "66.7%".
pub fn format_ratio(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn amounts_are_grouped_and_rounded() {
        assert_eq!(format_amount(dec!(1234.5), "USDT"), "1,234.50 USDT");
        assert_eq!(format_amount(dec!(-1234567.891), "USD"), "-1,234,567.89 USD");
        assert_eq!(format_amount(dec!(0), "USDT"), "0.00 USDT");
        assert_eq!(format_amount(dec!(999.999), "USDT"), "1,000.00 USDT");
        assert_eq!(format_amount(dec!(-0.001), "USDT"), "0.00 USDT");
    }

    #[test]
    fn percentages() {
        assert_eq!(format_percent(dec!(2)), "2.00%");
        assert_eq!(format_percent(dec!(-1.234)), "-1.23%");
        assert_eq!(format_ratio(0.5), "50.0%");
        assert_eq!(format_ratio(2.0 / 3.0), "66.7%");
    }
}
