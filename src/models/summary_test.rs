use super::*;

fn months(entries: &[(&str, f64, f64)]) -> BTreeMap<String, MonthlySummary> {
    entries
        .iter()
        .map(|(month, income, expenses)| {
            (
                month.to_string(),
                MonthlySummary {
                    income: *income,
                    expenses: *expenses,
                },
            )
        })
        .collect()
}

// =============================================================
// MonthlyOverview
// =============================================================

#[test]
fn overview_uses_latest_month() {
    let data = months(&[
        ("2024-03", 5000.0, 3200.0),
        ("2024-05", 5100.0, 2900.0),
        ("2024-04", 4900.0, 3100.0),
    ]);
    let totals = FinancialSummary {
        total_income: 30000.0,
        total_expenses: 21000.0,
    };

    let overview = MonthlyOverview::build(&data, &totals);

    assert_eq!(overview.latest_month.as_deref(), Some("2024-05"));
    assert_eq!(overview.monthly_expense, 2900.0);
    assert_eq!(overview.monthly_savings, 2200.0);
    assert_eq!(overview.total_savings, 9000.0);
}

#[test]
fn overview_without_months_keeps_totals() {
    let totals = FinancialSummary {
        total_income: 100.0,
        total_expenses: 140.0,
    };

    let overview = MonthlyOverview::build(&BTreeMap::new(), &totals);

    assert!(overview.latest_month.is_none());
    assert_eq!(overview.monthly_expense, 0.0);
    assert_eq!(overview.monthly_savings, 0.0);
    assert_eq!(overview.total_savings, -40.0);
}

// =============================================================
// Wire format
// =============================================================

#[test]
fn six_month_report_parses_into_sorted_map() {
    let raw = r#"{
        "2024-02": {"income": 4000, "expenses": 2500.5},
        "2024-01": {"income": 3800}
    }"#;
    let parsed: BTreeMap<String, MonthlySummary> = serde_json::from_str(raw).unwrap();

    let keys: Vec<&String> = parsed.keys().collect();
    assert_eq!(keys, ["2024-01", "2024-02"]);
    assert_eq!(parsed["2024-01"].expenses, 0.0);
    assert_eq!(parsed["2024-02"].savings(), 1499.5);
}

#[test]
fn financial_summary_defaults_missing_fields() {
    let parsed: FinancialSummary = serde_json::from_str(r#"{"total_income": 12}"#).unwrap();
    assert_eq!(parsed.total_expenses, 0.0);
    assert_eq!(parsed.savings(), 12.0);
}
