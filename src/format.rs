//! Display Formatting

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Format a server timestamp as a short date (`M/D/YYYY`).
///
/// Missing values read `Unknown`, unparseable ones `Invalid Date`.
/// Timestamps carrying an offset are shown as the viewer's local date;
/// naive ones keep their own date.
pub fn format_date(value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return "Unknown".to_string();
    };
    match parse_date(raw) {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => "Invalid Date".to_string(),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).date_naive());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// `Created: ... [| Updated: ...]` line shown under each item
pub fn timestamp_line(created_at: Option<&str>, updated_at: Option<&str>) -> String {
    let mut line = format!("Created: {}", format_date(created_at));
    if let Some(updated) = updated_at.filter(|u| !u.trim().is_empty()) {
        line.push_str(&format!(" | Updated: {}", format_date(Some(updated))));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_variants() {
        assert_eq!(format_date(Some("2024-03-05T10:20:30.123456")), "3/5/2024");
        assert_eq!(format_date(Some("2024-12-31T23:59:59")), "12/31/2024");
        assert_eq!(format_date(Some("2024-07-04 12:00:00")), "7/4/2024");
        assert_eq!(format_date(Some("2024-07-04")), "7/4/2024");
    }

    #[test]
    fn test_format_date_offset_uses_local_date() {
        for raw in ["2024-01-09T23:30:00-05:00", "2024-01-09T08:00:00+00:00"] {
            let expected = DateTime::parse_from_rfc3339(raw)
                .unwrap()
                .with_timezone(&Local)
                .format("%-m/%-d/%Y")
                .to_string();
            assert_eq!(format_date(Some(raw)), expected);
        }
    }

    #[test]
    fn test_format_date_missing_and_invalid() {
        assert_eq!(format_date(None), "Unknown");
        assert_eq!(format_date(Some("")), "Unknown");
        assert_eq!(format_date(Some("yesterday")), "Invalid Date");
    }

    #[test]
    fn test_timestamp_line() {
        assert_eq!(timestamp_line(Some("2024-03-05T10:00:00"), None), "Created: 3/5/2024");
        assert_eq!(
            timestamp_line(Some("2024-03-05T10:00:00"), Some("2024-03-06T10:00:00")),
            "Created: 3/5/2024 | Updated: 3/6/2024"
        );
        assert_eq!(timestamp_line(None, Some("")), "Created: Unknown");
    }
}
