//! Expenses page of the personal finance frontend.
//!
//! Expenses are added by hand, from an uploaded receipt picture or from a
//! camera snapshot, listed by time range and exported to a spreadsheet.

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod media;
pub mod models;
pub mod pages;
pub mod session;
pub mod state;

pub use app::App;
