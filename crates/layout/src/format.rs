//! Date formatting for the document. One locale convention only: `Jan 2020`.

use chrono::NaiveDate;

pub fn month_year(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// Formats a start/end pair as `Jan 2020 – Mar 2022`.
///
/// An ongoing entry, or one without an end date, ends in `Present`. Returns
/// `None` when there is nothing to show.
pub fn date_range(start: Option<NaiveDate>, end: Option<NaiveDate>, ongoing: bool) -> Option<String> {
    let end_text = match (ongoing, end) {
        (true, _) | (false, None) => "Present".to_string(),
        (false, Some(end)) => month_year(end),
    };
    match start {
        Some(start) => Some(format!("{} – {}", month_year(start), end_text)),
        None if ongoing => Some("Present".to_string()),
        None => end.map(month_year),
    }
}
