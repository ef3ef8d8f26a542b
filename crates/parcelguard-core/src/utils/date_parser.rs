use chrono::NaiveDate;

/// Formats accepted as a calendar date, tried in order.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];

pub fn parse_date(str_date: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(str_date.trim(), fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        assert!(parse_date("2024-01-15").is_some());
    }

    #[test]
    fn test_parse_us_date() {
        assert!(parse_date("01/15/2024").is_some());
    }

    #[test]
    fn test_parse_invalid_calendar_date() {
        // month 13, day 40 do not exist
        assert!(parse_date("2024-13-40").is_none());
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_date("not a date").is_none());
    }
}
