//! Display and parsing helpers shared by the views.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

fn format_with_commas(value: u64) -> String {
    let digits = value.to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

/// `CHF 1,234.50`; negative amounts get a leading minus. Amounts beyond
/// `u64` cents are clamped.
pub fn format_currency(amount: f64, code: &str) -> String {
    let cents = if amount.is_finite() {
        (amount * 100.0).round()
    } else {
        0.0
    };
    let sign = if cents < 0.0 { "-" } else { "" };
    // float-to-int casts saturate
    let cents = cents.abs() as u64;
    format!(
        "{}{} {}.{:02}",
        sign,
        code,
        format_with_commas(cents / 100),
        cents % 100
    )
}

/// Lenient amount parsing: the longest numeric prefix wins, anything
/// unreadable is zero.
pub fn parse_amount(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let mut ends: Vec<usize> = trimmed.char_indices().map(|(i, _)| i).skip(1).collect();
    ends.push(trimmed.len());
    ends.into_iter()
        .rev()
        .filter_map(|end| trimmed[..end].parse::<f64>().ok())
        .find(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Strict amount parsing for the manual form.
pub fn parse_strict_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Reads `YYYY-MM-DD`, `YYYY-MM` (first of the month) or an RFC 3339
/// timestamp.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).date_naive())
}

/// The instant an expense date refers to. Date-only values are midnight UTC.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw.trim()) {
        return Some(dt.with_timezone(&Utc));
    }
    parse_calendar_date(raw).map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

/// `May 3, 2024`. Unparseable input is shown as-is.
pub fn format_date(raw: &str) -> String {
    match parse_calendar_date(raw) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// ISO `YYYY-MM-DD`, the form and API date format.
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
