//! Turning the upload endpoint's extracted fields into an expense.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::format::{iso_date, parse_amount, parse_calendar_date};
use crate::models::ExpenseRecord;

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

pub const UNNAMED_EXPENSE: &str = "Unnamed Expense";
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Fields extracted from a receipt image. Any of them may be missing.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub amount: Option<serde_json::Value>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// What an upload reply amounts to. A server `error` wins over the status;
/// otherwise any non-2xx status is a failure even when the body decoded.
pub fn settle_upload(
    endpoint: &str,
    status: u16,
    body: Result<UploadResponse, String>,
) -> AppResult<UploadResponse> {
    let ok = (200..300).contains(&status);
    let status_error = || AppError::Status {
        endpoint: endpoint.to_string(),
        status,
    };
    match body {
        Ok(response) => {
            let response = response.into_result()?;
            if ok {
                Ok(response)
            } else {
                Err(status_error())
            }
        }
        Err(_) if !ok => Err(status_error()),
        Err(message) => Err(AppError::Decode {
            endpoint: endpoint.to_string(),
            message,
        }),
    }
}

impl UploadResponse {
    pub fn into_result(self) -> AppResult<UploadResponse> {
        match non_empty(self.error.clone()) {
            Some(message) => Err(AppError::Rejected(message)),
            None => Ok(self),
        }
    }

    /// Builds a record with fallbacks for everything the extractor missed.
    /// The id is left for the collection to assign.
    pub fn into_expense(self, today: NaiveDate) -> ExpenseRecord {
        let amount = match self.amount {
            Some(serde_json::Value::Number(n)) => n.as_f64().unwrap_or(0.0),
            Some(serde_json::Value::String(s)) => parse_amount(&s),
            _ => 0.0,
        };

        let date = match self.date.as_deref().and_then(parse_calendar_date) {
            Some(date) => date,
            None => {
                log::warn!(
                    "invalid receipt date {:?}, using today's date",
                    self.date.as_deref().unwrap_or_default()
                );
                today
            }
        };

        ExpenseRecord {
            id: None,
            name: non_empty(self.name).unwrap_or_else(|| UNNAMED_EXPENSE.to_string()),
            amount,
            date: iso_date(date),
            description: non_empty(self.description).unwrap_or_default(),
            category: non_empty(self.category).unwrap_or_else(|| UNCATEGORIZED.to_string()),
        }
    }
}
