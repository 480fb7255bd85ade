/// Format an amount rounded to the unit with French thousands grouping.
///
/// `70000.4` becomes `"70 000"`, `-1234.6` becomes `"-1 235"`.
pub fn format_amount(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(70000.0), "70 000");
        assert_eq!(format_amount(1_234_567.0), "1 234 567");
        assert_eq!(format_amount(999.0), "999");
        assert_eq!(format_amount(0.0), "0");
    }

    #[test]
    fn test_format_amount_rounds_and_keeps_sign() {
        assert_eq!(format_amount(-1234.6), "-1 235");
        assert_eq!(format_amount(264_956.7), "264 957");
        assert_eq!(format_amount(-0.2), "0");
    }
}
