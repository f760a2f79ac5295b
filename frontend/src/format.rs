const CURRENCY_SYMBOL: &str = "Rp";
const THOUSANDS_SEPARATOR: char = '.';

fn format_with_separators(value: u64) -> String {
    let digits = value.to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(THOUSANDS_SEPARATOR);
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

/// Whole-rupiah display, e.g. `Rp 3.800.000` or `-Rp 250.000`.
pub fn format_rupiah(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let sign = if rounded < 0 { "-" } else { "" };
    format!(
        "{}{} {}",
        sign,
        CURRENCY_SYMBOL,
        format_with_separators(rounded.unsigned_abs())
    )
}

pub fn format_percent(value: f64) -> String {
    format!("{}%", value.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(format_with_separators(0), "0");
        assert_eq!(format_with_separators(999), "999");
        assert_eq!(format_with_separators(1000), "1.000");
        assert_eq!(format_with_separators(5_000_000), "5.000.000");
        assert_eq!(format_with_separators(1_234_567), "1.234.567");
    }

    #[test]
    fn rupiah_rounds_and_signs() {
        assert_eq!(format_rupiah(3_800_000.0), "Rp 3.800.000");
        assert_eq!(format_rupiah(-250_000.0), "-Rp 250.000");
        assert_eq!(format_rupiah(1499.5), "Rp 1.500");
        assert_eq!(format_rupiah(0.0), "Rp 0");
        assert_eq!(format_rupiah(-0.2), "Rp 0");
        assert_eq!(format_rupiah(-1_234_567.0), "-Rp 1.234.567");
    }

    #[test]
    fn percent_is_rounded() {
        assert_eq!(format_percent(76.0), "76%");
        assert_eq!(format_percent(33.5), "34%");
        assert_eq!(format_percent(0.0), "0%");
    }
}
