use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

/// One month of the six-month savings report, keyed by `YYYY-MM`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    #[serde(default)]
    pub income: f64,
    #[serde(default)]
    pub expenses: f64,
}

impl MonthlySummary {
    pub fn savings(&self) -> f64 {
        self.income - self.expenses
    }
}

/// All-time totals for the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    #[serde(default)]
    pub total_income: f64,
    #[serde(default)]
    pub total_expenses: f64,
}

impl FinancialSummary {
    pub fn savings(&self) -> f64 {
        self.total_income - self.total_expenses
    }
}

/// Figures behind the summary cards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MonthlyOverview {
    /// Key of the month the monthly figures come from
    pub latest_month: Option<String>,
    pub monthly_expense: f64,
    pub monthly_savings: f64,
    pub total_savings: f64,
}

impl MonthlyOverview {
    /// The latest month is the greatest `YYYY-MM` key. With no months the
    /// monthly figures stay at zero.
    pub fn build(months: &BTreeMap<String, MonthlySummary>, totals: &FinancialSummary) -> Self {
        let latest = months.iter().next_back();
        Self {
            latest_month: latest.map(|(month, _)| month.clone()),
            monthly_expense: latest.map_or(0.0, |(_, m)| m.expenses),
            monthly_savings: latest.map_or(0.0, |(_, m)| m.savings()),
            total_savings: totals.savings(),
        }
    }
}
