//! Formatting helpers for API date strings.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Short English name for a 1-based month number.
pub fn month_name(month: usize) -> Option<&'static str> {
    month.checked_sub(1).and_then(|i| MONTHS.get(i)).copied()
}

/// Render an ISO `YYYY-MM-DD` date (a trailing time component is ignored) as
/// e.g. `Mar 5, 2024`. Falls back to the raw input when it does not parse.
pub fn human_date(raw: &str) -> String {
    let date = raw.split('T').next().unwrap_or(raw);
    let mut parts = date.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return raw.to_owned();
    };
    let (Ok(month), Ok(day)) = (month.parse::<usize>(), day.parse::<u32>()) else {
        return raw.to_owned();
    };
    match month_name(month) {
        Some(name) => format!("{name} {day}, {year}"),
        None => raw.to_owned(),
    }
}
