//! Shared formatting utilities for the UI layer.

use chrono::{Datelike, NaiveDate};
use nyaya_types::{CaseStatus, SortDirection};
use nyaya_ui::{BadgeVariant, SortIndicator};

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Badge colour for a status. Person types, event types and search kinds
/// all map onto the same four tones.
pub fn status_badge_variant(status: CaseStatus) -> BadgeVariant {
    match status {
        CaseStatus::Pending => BadgeVariant::Warning,
        CaseStatus::Investigation => BadgeVariant::Info,
        CaseStatus::Resolved => BadgeVariant::Success,
        CaseStatus::Action => BadgeVariant::Destructive,
    }
}

/// Header arrow for a sortable column.
pub fn sort_indicator(direction: Option<SortDirection>) -> SortIndicator {
    match direction {
        None => SortIndicator::Unsorted,
        Some(SortDirection::Asc) => SortIndicator::Ascending,
        Some(SortDirection::Desc) => SortIndicator::Descending,
    }
}

fn month_name(date: NaiveDate) -> &'static str {
    MONTH_NAMES[date.month0() as usize]
}

/// "Apr 22, 2025".
pub fn format_date_human(date: NaiveDate) -> String {
    format!("{} {}, {}", &month_name(date)[..3], date.day(), date.year())
}

/// "April 22, 2025".
pub fn format_date_full(date: NaiveDate) -> String {
    format!("{} {}, {}", month_name(date), date.day(), date.year())
}

/// "Tuesday, April 22, 2025", used as the day view heading.
pub fn format_date_long(date: NaiveDate) -> String {
    format!(
        "{}, {} {}, {}",
        date.format("%A"),
        month_name(date),
        date.day(),
        date.year()
    )
}

/// "April 2025", used as the month grid caption.
pub fn format_month_title(date: NaiveDate) -> String {
    format!("{} {}", month_name(date), date.year())
}

/// Value for an `<input type="date">`.
pub fn format_date_input(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse an `<input type="date">` value; blank or malformed input is `None`.
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn status_variants_are_distinct() {
        assert_eq!(status_badge_variant(CaseStatus::Pending), BadgeVariant::Warning);
        assert_eq!(status_badge_variant(CaseStatus::Investigation), BadgeVariant::Info);
        assert_eq!(status_badge_variant(CaseStatus::Resolved), BadgeVariant::Success);
        assert_eq!(status_badge_variant(CaseStatus::Action), BadgeVariant::Destructive);
    }

    #[test]
    fn sort_indicator_follows_direction() {
        assert_eq!(sort_indicator(None), SortIndicator::Unsorted);
        assert_eq!(sort_indicator(Some(SortDirection::Asc)), SortIndicator::Ascending);
        assert_eq!(sort_indicator(Some(SortDirection::Desc)), SortIndicator::Descending);
    }

    #[test]
    fn human_dates() {
        assert_eq!(format_date_human(date(2025, 4, 22)), "Apr 22, 2025");
        assert_eq!(format_date_long(date(2025, 4, 22)), "Tuesday, April 22, 2025");
        assert_eq!(format_date_full(date(2025, 4, 2)), "April 2, 2025");
        assert_eq!(format_month_title(date(2025, 12, 1)), "December 2025");
    }

    #[test]
    fn date_input_roundtrip() {
        let d = date(2025, 1, 5);
        assert_eq!(format_date_input(d), "2025-01-05");
        assert_eq!(parse_date_input("2025-01-05"), Some(d));
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("05/01/2025"), None);
    }
}
