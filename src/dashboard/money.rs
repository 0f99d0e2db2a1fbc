use rust_decimal::Decimal;

/// Formats an amount as USD with thousands separators and two decimals,
/// e.g. `$3,780.00` or `-$1,234.56`.
pub fn usd(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().to_string();

    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, format!("{:0<2}", frac_part)),
        None => (digits.as_str(), "00".to_string()),
    };

    let sign = if negative { "-" } else { "" };
    format!("{}${}.{}", sign, group_thousands(int_part), frac_part)
}

/// Signed delta form: `+$120.50` / `-$85.00`.
pub fn usd_delta(amount: Decimal) -> String {
    let formatted = usd(amount);
    if formatted.starts_with('-') {
        formatted
    } else {
        format!("+{}", formatted)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
