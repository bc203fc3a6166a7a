use rust_decimal::{Decimal, RoundingStrategy};

/// Formats a price as Brazilian Real, e.g. `R$ 1.234,56`.
pub fn format_price(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let text = format!("{:.2}", rounded.abs());
    let (units, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    format!("{}R$ {},{}", sign, group_thousands(units), cents)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_with_comma_decimal_separator() {
        assert_eq!(format_price(Decimal::new(17990, 2)), "R$ 179,90");
    }

    #[test]
    fn should_group_thousands_with_dots() {
        assert_eq!(format_price(Decimal::new(123456789, 2)), "R$ 1.234.567,89");
        assert_eq!(format_price(Decimal::new(100000, 2)), "R$ 1.000,00");
    }

    #[test]
    fn should_pad_and_round_cents() {
        assert_eq!(format_price(Decimal::new(5, 0)), "R$ 5,00");
        assert_eq!(format_price(Decimal::new(12345, 3)), "R$ 12,35");
        assert_eq!(format_price(Decimal::ZERO), "R$ 0,00");
    }

    #[test]
    fn should_prefix_negative_values() {
        assert_eq!(format_price(Decimal::new(-1050, 2)), "-R$ 10,50");
    }
}
