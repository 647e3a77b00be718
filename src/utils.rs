/// Tolerance for whole-day rounding. `budget / daily` for a budget of
/// exactly `n * daily` can land one ulp under `n`.
const WHOLE_DAY_EPSILON: f64 = 1e-9;

/// Whole days covered by a fractional day count.
///
/// Non-finite input passes through (`Infinity` stays `Infinity`).
pub fn whole_days(days: f64) -> f64 {
    if days.is_finite() {
        (days + WHOLE_DAY_EPSILON).floor()
    } else {
        days
    }
}

/// Share of `amount` for one of `users` people.
pub fn per_person(amount: f64, users: f64) -> f64 {
    amount / users
}

pub fn format_inr(amount: f64) -> String {
    format!("₹{:.2}", amount)
}

pub fn format_usd(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Format a count that is usually integral ("9", but "2.5" when fractional).
pub fn format_count(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_days() {
        assert_eq!(whole_days(12.7157), 12.0);
        assert_eq!(whole_days(0.0), 0.0);
        assert_eq!(whole_days(9.9999999999999), 10.0);
        assert_eq!(whole_days(-0.5), -1.0);
    }

    #[test]
    fn test_whole_days_non_finite() {
        assert!(whole_days(f64::INFINITY).is_infinite());
        assert!(whole_days(f64::NAN).is_nan());
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_inr(2358.72), "₹2358.72");
        assert_eq!(format_usd(2.808), "$2.81");
        assert_eq!(format_inr(0.0), "₹0.00");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(9.0), "9");
        assert_eq!(format_count(2.5), "2.5");
        assert_eq!(format_count(f64::INFINITY), "inf");
    }

    #[test]
    fn test_per_person() {
        assert_eq!(per_person(300.0, 3.0), 100.0);
        assert!(per_person(300.0, 0.0).is_infinite());
    }
}
