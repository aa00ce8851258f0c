//! Formatting helpers for table cells.

use chrono::{DateTime, Utc};

/// Format an amount with a thousands separator and two decimals.
///
/// # Examples
///
/// ```
/// let formatted = frontend::shared::format::format_amount(1234567.89);
/// assert_eq!(formatted, "1,234,567.89");
/// ```
pub fn format_amount(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (integer_part, decimal_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    // Insert a separator every 3 digits, walking from the right.
    let mut grouped = String::new();
    let digits: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            grouped.push(',');
        }
        grouped.push(*c);
    }
    let integer_grouped: String = grouped.chars().rev().collect();

    format!("{}.{}", integer_grouped, decimal_part)
}

/// "KES 1,234.50" for money columns.
pub fn format_kes(value: f64) -> String {
    format!("KES {}", format_amount(value))
}

/// "15 Mar 2024 14:02" for timestamp columns; "-" when the API omitted it.
pub fn format_datetime(value: Option<DateTime<Utc>>) -> String {
    match value {
        Some(dt) => dt.format("%d %b %Y %H:%M").to_string(),
        None => "-".to_string(),
    }
}

/// "15 Mar 2024" for date-only columns.
pub fn format_date(value: Option<DateTime<Utc>>) -> String {
    match value {
        Some(dt) => dt.format("%d %b %Y").to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1234.56), "1,234.56");
        assert_eq!(format_amount(1234567.89), "1,234,567.89");
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(-1234.56), "-1,234.56");
        assert_eq!(format_amount(999.999), "1,000.00");
    }

    #[test]
    fn test_format_kes() {
        assert_eq!(format_kes(2500.0), "KES 2,500.00");
    }

    #[test]
    fn test_format_datetime() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_datetime(Some(dt)), "15 Mar 2024 14:02");
        assert_eq!(format_datetime(None), "-");
    }

    #[test]
    fn test_format_date() {
        let dt = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(format_date(Some(dt)), "31 Dec 2024");
        assert_eq!(format_date(None), "-");
    }
}
