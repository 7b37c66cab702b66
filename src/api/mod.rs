//! HTTP access to the expense API via `gloo-net`.
//!
//! Requests carry browser credentials and, when the session has one, a
//! bearer token. Failures come back as `AppError` for the page to display.

pub mod client;
pub mod upload;

pub use client::ApiClient;
pub use upload::UploadResponse;
