//! Shared formatting helpers for terminal output

use chrono::NaiveDate;

use crate::models::Money;

/// Brazilian currency format, e.g. `R$ 1.234,56` or `-R$ 0,50`
pub fn format_currency(amount: Money) -> String {
    amount.to_string()
}

/// `DD/MM/YYYY`, or `-` when there is no date
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => "-".to_string(),
    }
}

/// Reformat an ISO `YYYY-MM-DD` string as `DD/MM/YYYY`
///
/// Empty input gives `-`; anything that is not an ISO date is returned as is.
pub fn format_date_str(iso: &str) -> String {
    let iso = iso.trim();
    if iso.is_empty() {
        return "-".to_string();
    }
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => format_date(Some(date)),
        Err(_) => iso.to_string(),
    }
}

/// Truncate to `max_len` characters, marking the cut with an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(Money::from_cents(123_456)), "R$ 1.234,56");
        assert_eq!(format_currency(Money::from_cents(-50)), "-R$ 0,50");
        assert_eq!(format_currency(Money::zero()), "R$ 0,00");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2023, 10, 15).unwrap();
        assert_eq!(format_date(Some(date)), "15/10/2023");
        assert_eq!(format_date(None), "-");
    }

    #[test]
    fn test_format_date_str() {
        assert_eq!(format_date_str("2023-10-15"), "15/10/2023");
        assert_eq!(format_date_str(""), "-");
        assert_eq!(format_date_str("amanhã"), "amanhã");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Padaria do João", 10), "Padaria...");
        assert_eq!(truncate("João", 10), "João");
        assert_eq!(truncate("Tech", 2), "..");
    }
}
