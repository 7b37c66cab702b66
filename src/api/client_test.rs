use super::*;

fn client(base: &str, token: Option<&str>) -> ApiClient {
    let settings = AppSettings {
        api_base_url: base.to_string(),
        ..AppSettings::default()
    };
    let session = UserSession {
        uid: "u-1".into(),
        access_token: token.map(str::to_string),
        ..UserSession::default()
    };
    ApiClient::new(&settings, &session)
}

// =============================================================
// URLs
// =============================================================

#[test]
fn same_origin_urls_are_relative() {
    let api = client("", None);
    assert_eq!(
        api.url(MONTHLY_SAVINGS_PATH),
        "/api/monthly-savings-last6months"
    );
    assert_eq!(api.url(UPLOAD_PATH), "/api/upload");
}

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let api = client("https://money.example.com/", None);
    assert_eq!(
        api.url(TimeRange::Last24Hours.endpoint()),
        "https://money.example.com/api/expense/last24hours"
    );
}

#[test]
fn client_carries_session() {
    let api = client("", Some("abc"));
    assert_eq!(api.user_id, "u-1");
    assert_eq!(api.token.as_deref(), Some("abc"));
}

// =============================================================
// Response bodies
// =============================================================

#[test]
fn expense_list_parses_rows() {
    let raw = r#"{"expenses": [
        {"id": 1, "name": "Tram", "amount": 2.8, "date": "2024-05-09", "category": "Other"},
        {"name": "Milk", "amount": "1.95", "date": "2024-05-10"}
    ]}"#;
    let list: ExpenseList = serde_json::from_str(raw).unwrap();
    assert_eq!(list.expenses.len(), 2);
    assert_eq!(list.expenses[1].amount, 1.95);
    assert_eq!(list.expenses[1].id, None);
}

#[test]
fn expense_list_without_key_is_empty() {
    let list: ExpenseList = serde_json::from_str("{}").unwrap();
    assert!(list.expenses.is_empty());
}
