use super::*;
use chrono::TimeZone;

fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

fn record_on(date: &str) -> ExpenseRecord {
    ExpenseRecord {
        id: Some(1),
        name: "Coffee".to_string(),
        amount: 4.5,
        date: date.to_string(),
        ..Default::default()
    }
}

// =============================================================
// Deserialisation
// =============================================================

#[test]
fn record_parses_full_row() {
    let raw = r#"{"id": 7, "name": "Rent", "amount": 1500.0, "date": "2024-05-01",
                  "description": "May", "category": "Rent"}"#;
    let record: ExpenseRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(record.id, Some(7));
    assert_eq!(record.name, "Rent");
    assert_eq!(record.amount, 1500.0);
    assert_eq!(record.category, "Rent");
}

#[test]
fn record_accepts_string_amount_and_id() {
    let raw = r#"{"id": "42", "name": "Bus", "amount": "3.20", "date": "2024-05-02"}"#;
    let record: ExpenseRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(record.id, Some(42));
    assert_eq!(record.amount, 3.2);
}

#[test]
fn record_tolerates_nulls_and_missing_fields() {
    let raw = r#"{"amount": null, "description": null, "date": "2024-05-02"}"#;
    let record: ExpenseRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(record.id, None);
    assert_eq!(record.amount, 0.0);
    assert_eq!(record.name, "");
    assert_eq!(record.description, "");
}

#[test]
fn record_without_id_serialises_without_id_key() {
    let json = serde_json::to_value(record_on("2024-05-02")).unwrap();
    assert_eq!(json["id"], 1);

    let mut record = record_on("2024-05-02");
    record.id = None;
    let json = serde_json::to_value(record).unwrap();
    assert!(json.get("id").is_none());
}

// =============================================================
// TimeRange
// =============================================================

#[test]
fn default_range_is_seven_days() {
    assert_eq!(TimeRange::default(), TimeRange::Last7Days);
}

#[test]
fn range_endpoints_match_api_paths() {
    assert_eq!(TimeRange::Last24Hours.endpoint(), "/api/expense/last24hours");
    assert_eq!(TimeRange::Last7Days.endpoint(), "/api/expense/last7days");
    assert_eq!(TimeRange::Last30Days.endpoint(), "/api/expense/last30days");
}

#[test]
fn range_labels_round_trip() {
    for range in TimeRange::ALL {
        assert_eq!(TimeRange::from_label(range.label()), Some(range));
    }
    assert_eq!(TimeRange::from_label("1 Year"), None);
}

#[test]
fn range_bounds_are_inclusive() {
    let now = at(2024, 5, 10, 12);
    let range = TimeRange::Last24Hours;
    assert!(range.contains(at(2024, 5, 9, 12), now));
    assert!(range.contains(now, now));
    assert!(!range.contains(at(2024, 5, 9, 11), now));
}

#[test]
fn future_dates_fall_outside_every_range() {
    let now = at(2024, 5, 10, 12);
    for range in TimeRange::ALL {
        assert!(!range.contains(at(2024, 5, 11, 0), now));
    }
}

#[test]
fn record_in_window_depends_on_range() {
    let now = at(2024, 5, 10, 12);
    let record = record_on("2024-05-01");
    assert!(!record.falls_within(TimeRange::Last7Days, now));
    assert!(record.falls_within(TimeRange::Last30Days, now));
}

#[test]
fn record_with_bad_date_is_never_in_window() {
    let now = at(2024, 5, 10, 12);
    assert!(!record_on("not a date").falls_within(TimeRange::Last30Days, now));
}

// =============================================================
// Category
// =============================================================

#[test]
fn categories_parse_case_insensitively() {
    assert_eq!("groceries".parse::<Category>(), Ok(Category::Groceries));
    assert_eq!(" Rent ".parse::<Category>(), Ok(Category::Rent));
    assert!("Travel".parse::<Category>().is_err());
}

#[test]
fn category_list_is_fixed() {
    let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
    assert_eq!(
        names,
        ["Utility", "Rent", "Groceries", "Entertainment", "Other"]
    );
}
