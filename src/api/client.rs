use std::collections::BTreeMap;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use web_sys::{Blob, FormData, RequestCredentials};

use super::upload::{settle_upload, UploadResponse};
use crate::config::AppSettings;
use crate::error::{js_message, AppError, AppResult};
use crate::models::{ExpenseRecord, FinancialSummary, MonthlyOverview, MonthlySummary, TimeRange};
use crate::session::UserSession;

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

pub const MONTHLY_SAVINGS_PATH: &str = "/api/monthly-savings-last6months";
pub const FINANCIAL_SUMMARY_PATH: &str = "/api/financial_summary";
pub const UPLOAD_PATH: &str = "/api/upload";

#[derive(Debug, Default, Deserialize)]
struct ExpenseList {
    #[serde(default)]
    expenses: Vec<ExpenseRecord>,
}

/// Thin client over the expense API for one user.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
    user_id: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(settings: &AppSettings, session: &UserSession) -> Self {
        Self {
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            user_id: session.uid.clone(),
            token: session.access_token.clone(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, mut builder: RequestBuilder) -> RequestBuilder {
        builder = builder.credentials(RequestCredentials::Include);
        if let Some(token) = &self.token {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }
        builder
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let request = self
            .authorize(Request::get(&self.url(path)))
            .query([("userid", self.user_id.as_str())]);
        let response = request.send().await?;
        read_json(path, response).await
    }

    /// Six months of income/expense totals keyed by `YYYY-MM`.
    pub async fn monthly_savings(&self) -> AppResult<BTreeMap<String, MonthlySummary>> {
        self.get_json(MONTHLY_SAVINGS_PATH).await
    }

    pub async fn financial_summary(&self) -> AppResult<FinancialSummary> {
        self.get_json(FINANCIAL_SUMMARY_PATH).await
    }

    pub async fn overview(&self) -> AppResult<MonthlyOverview> {
        let months = self.monthly_savings().await?;
        log::debug!("monthly savings for {} month(s)", months.len());
        let totals = self.financial_summary().await?;
        let overview = MonthlyOverview::build(&months, &totals);
        if overview.latest_month.is_none() {
            log::warn!("no monthly savings data for user {}", self.user_id);
        }
        Ok(overview)
    }

    pub async fn expenses(&self, range: TimeRange) -> AppResult<Vec<ExpenseRecord>> {
        let list: ExpenseList = self.get_json(range.endpoint()).await?;
        log::info!(
            "fetched {} expense(s) for the last {}",
            list.expenses.len(),
            range.label()
        );
        Ok(list.expenses)
    }

    /// Posts an image for field extraction. The server may answer with an
    /// `error` field instead of fields; that surfaces as `Rejected`.
    pub async fn upload_receipt(&self, image: &Blob, file_name: &str) -> AppResult<UploadResponse> {
        let form = FormData::new().map_err(|e| AppError::Browser(js_message(&e)))?;
        form.append_with_blob_and_filename("file", image, file_name)
            .map_err(|e| AppError::Browser(js_message(&e)))?;

        let request = self.authorize(Request::post(&self.url(UPLOAD_PATH))).body(form)?;
        let response = request.send().await?;
        let status = response.status();
        let body = response
            .json::<UploadResponse>()
            .await
            .map_err(|err| err.to_string());
        settle_upload(UPLOAD_PATH, status, body)
    }
}

async fn read_json<T: DeserializeOwned>(endpoint: &str, response: Response) -> AppResult<T> {
    if !response.ok() {
        return Err(AppError::Status {
            endpoint: endpoint.to_string(),
            status: response.status(),
        });
    }
    response.json::<T>().await.map_err(|err| AppError::Decode {
        endpoint: endpoint.to_string(),
        message: err.to_string(),
    })
}
