use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::format::{parse_amount, parse_instant};

#[cfg(test)]
#[path = "expense_test.rs"]
mod expense_test;

/// A single logged expense.
///
/// Rows from the API are not guaranteed to carry every field, so
/// deserialisation fills gaps instead of failing the whole list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    #[serde(default, deserialize_with = "lenient_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "string_or_null")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: f64,
    #[serde(default, deserialize_with = "string_or_null")]
    pub date: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub description: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub category: String,
}

impl ExpenseRecord {
    /// The instant the record's date refers to, if it is a real date.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        parse_instant(&self.date)
    }

    pub fn falls_within(&self, range: TimeRange, now: DateTime<Utc>) -> bool {
        self.instant()
            .map_or(false, |instant| range.contains(instant, now))
    }
}

fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => parse_amount(&s),
        _ => 0.0,
    })
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Categories offered by the manual form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Utility,
    Rent,
    Groceries,
    Entertainment,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Utility,
        Category::Rent,
        Category::Groceries,
        Category::Entertainment,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Utility => "Utility",
            Category::Rent => "Rent",
            Category::Groceries => "Groceries",
            Category::Entertainment => "Entertainment",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown category: {}", s))
    }
}

/// Window of recent expenses shown in the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TimeRange {
    Last24Hours,
    #[default]
    Last7Days,
    Last30Days,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [
        TimeRange::Last24Hours,
        TimeRange::Last7Days,
        TimeRange::Last30Days,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Last24Hours => "24 Hours",
            TimeRange::Last7Days => "7 Days",
            TimeRange::Last30Days => "30 Days",
        }
    }

    /// Path of the API endpoint that serves this range.
    pub fn endpoint(&self) -> &'static str {
        match self {
            TimeRange::Last24Hours => "/api/expense/last24hours",
            TimeRange::Last7Days => "/api/expense/last7days",
            TimeRange::Last30Days => "/api/expense/last30days",
        }
    }

    pub fn window(&self) -> Duration {
        match self {
            TimeRange::Last24Hours => Duration::hours(24),
            TimeRange::Last7Days => Duration::days(7),
            TimeRange::Last30Days => Duration::days(30),
        }
    }

    /// Inclusive on both ends: `now - window <= instant <= now`.
    pub fn contains(&self, instant: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        let cutoff = now - self.window();
        instant >= cutoff && instant <= now
    }

    pub fn from_label(label: &str) -> Option<TimeRange> {
        TimeRange::ALL.into_iter().find(|r| r.label() == label)
    }
}
