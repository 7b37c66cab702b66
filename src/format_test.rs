use super::*;

// =============================================================
// format_currency
// =============================================================

#[test]
fn currency_has_two_decimals() {
    assert_eq!(format_currency(12.5, "CHF"), "CHF 12.50");
    assert_eq!(format_currency(0.0, "CHF"), "CHF 0.00");
}

#[test]
fn currency_groups_thousands() {
    assert_eq!(format_currency(1234567.891, "CHF"), "CHF 1,234,567.89");
}

#[test]
fn currency_negative_sign_leads() {
    assert_eq!(format_currency(-42.1, "CHF"), "-CHF 42.10");
}

#[test]
fn currency_non_finite_is_zero() {
    assert_eq!(format_currency(f64::NAN, "CHF"), "CHF 0.00");
}

#[test]
fn currency_handles_huge_form_amounts() {
    let amount = parse_strict_amount("-1e17").unwrap();
    assert_eq!(
        format_currency(amount, "CHF"),
        "-CHF 100,000,000,000,000,000.00"
    );
    assert!(format_currency(-1e300, "CHF").starts_with("-CHF "));
    assert!(format_currency(1e300, "CHF").starts_with("CHF "));
}

#[test]
fn currency_tiny_negative_rounds_to_plain_zero() {
    assert_eq!(format_currency(-0.001, "CHF"), "CHF 0.00");
}

// =============================================================
// parse_amount / parse_strict_amount
// =============================================================

#[test]
fn parse_amount_reads_numeric_prefix() {
    assert_eq!(parse_amount("12.75"), 12.75);
    assert_eq!(parse_amount("  8 CHF"), 8.0);
    assert_eq!(parse_amount("3.5abc"), 3.5);
}

#[test]
fn parse_amount_garbage_is_zero() {
    assert_eq!(parse_amount(""), 0.0);
    assert_eq!(parse_amount("abc"), 0.0);
    assert_eq!(parse_amount("NaN"), 0.0);
    assert_eq!(parse_amount("inf"), 0.0);
}

#[test]
fn strict_amount_rejects_trailing_text() {
    assert_eq!(parse_strict_amount(" 19.90 "), Some(19.9));
    assert_eq!(parse_strict_amount("19.90 CHF"), None);
    assert_eq!(parse_strict_amount(""), None);
}

// =============================================================
// Dates
// =============================================================

#[test]
fn calendar_date_accepts_day_month_and_timestamp() {
    let may_3 = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap();
    assert_eq!(parse_calendar_date("2024-05-03"), Some(may_3));
    assert_eq!(
        parse_calendar_date("2024-05"),
        NaiveDate::from_ymd_opt(2024, 5, 1)
    );
    assert_eq!(parse_calendar_date("2024-05-03T22:15:00Z"), Some(may_3));
}

#[test]
fn calendar_date_rejects_nonsense() {
    assert_eq!(parse_calendar_date(""), None);
    assert_eq!(parse_calendar_date("yesterday"), None);
    assert_eq!(parse_calendar_date("2024-02-30"), None);
}

#[test]
fn instant_of_date_is_utc_midnight() {
    let instant = parse_instant("2024-05-03").unwrap();
    assert_eq!(instant.to_rfc3339(), "2024-05-03T00:00:00+00:00");
}

#[test]
fn instant_keeps_timestamp_offset() {
    let instant = parse_instant("2024-05-03T10:00:00+02:00").unwrap();
    assert_eq!(instant.to_rfc3339(), "2024-05-03T08:00:00+00:00");
}

#[test]
fn format_date_is_short_us_style() {
    assert_eq!(format_date("2024-05-03"), "May 3, 2024");
    assert_eq!(format_date("2023-12-25"), "Dec 25, 2023");
}

#[test]
fn format_date_passes_through_unknown_text() {
    assert_eq!(format_date("someday"), "someday");
}

#[test]
fn iso_date_pads_fields() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();
    assert_eq!(iso_date(date), "2024-01-09");
}
