//! Domain types shared by the API client, page state and views.

pub mod expense;
pub mod summary;

pub use expense::{Category, ExpenseRecord, TimeRange};
pub use summary::{FinancialSummary, MonthlyOverview, MonthlySummary};
