use chrono::NaiveDate;

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Normalize a calendar date to its canonical `YYYY-MM-DD` form.
pub fn normalize_date(s: &str) -> Option<String> {
    parse_date(s).map(|d| d.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_dates_only() {
        assert_eq!(normalize_date("2025-12-15").as_deref(), Some("2025-12-15"));
        assert_eq!(normalize_date(" 2025-1-5 ").as_deref(), Some("2025-01-05"));
        assert!(normalize_date("15/12/2025").is_none());
        assert!(normalize_date("2025-02-30").is_none());
    }
}
