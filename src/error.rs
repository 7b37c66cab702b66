//! Error types for the expense tracker frontend.
//!
//! Every failure the page can hit ends up as a plain message under the
//! form or the table, so the variants carry display-ready text.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("{endpoint} responded with status {status}")]
    Status { endpoint: String, status: u16 },

    /// The body could not be read as the expected JSON
    #[error("Could not read response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },

    /// The server processed the request and reported an error of its own
    #[error("{0}")]
    Rejected(String),

    #[error("Error accessing the camera: {0}")]
    Camera(String),

    /// A browser API we rely on is missing or threw
    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<gloo_net::Error> for AppError {
    fn from(err: gloo_net::Error) -> Self {
        AppError::Network(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for AppError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        AppError::Export(err.to_string())
    }
}

/// Best-effort text for a thrown JS value.
pub fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| "unknown JavaScript error".to_string())
}

/// Reasons the manual expense form refuses to submit.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Expense name is required.")]
    MissingName,

    #[error("Amount is required.")]
    MissingAmount,

    #[error("Amount must be a number.")]
    InvalidAmount,

    #[error("Date is required.")]
    MissingDate,

    #[error("Date must be a valid calendar date.")]
    InvalidDate,
}
