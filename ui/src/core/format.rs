//! Formatting helpers for presenting currency figures.

/// Format a rupiah amount the way the site displays money: rounded to whole
/// rupiah, dot-grouped thousands, "Rp " prefix (e.g. `Rp 76.200.000`).
pub fn format_rupiah(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut reversed = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            reversed.push('.');
        }
        reversed.push(ch);
    }
    let grouped: String = reversed.chars().rev().collect();

    if rounded < 0 {
        format!("Rp -{grouped}")
    } else {
        format!("Rp {grouped}")
    }
}

/// Format the ROI multiplier ("61x"). The model already rounds the value.
pub fn format_multiplier(value: f64) -> String {
    format!("{value:.0}x")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(format_rupiah(76_200_000.0), "Rp 76.200.000");
        assert_eq!(format_rupiah(1_250_000.0), "Rp 1.250.000");
        assert_eq!(format_rupiah(914_400_000.0), "Rp 914.400.000");
    }

    #[test]
    fn small_amounts_have_no_separator() {
        assert_eq!(format_rupiah(0.0), "Rp 0");
        assert_eq!(format_rupiah(950.0), "Rp 950");
    }

    #[test]
    fn rounds_to_whole_rupiah() {
        assert_eq!(format_rupiah(1_000.4), "Rp 1.000");
        assert_eq!(format_rupiah(999.6), "Rp 1.000");
    }

    #[test]
    fn negative_amounts_keep_the_sign() {
        assert_eq!(format_rupiah(-36_000_000.0), "Rp -36.000.000");
    }

    #[test]
    fn multiplier_renders_without_decimals() {
        assert_eq!(format_multiplier(61.0), "61x");
        assert_eq!(format_multiplier(0.0), "0x");
    }
}
