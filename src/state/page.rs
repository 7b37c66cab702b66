//! Reducer behind the Expenses page.
//!
//! Every interaction of the page is one `ExpensesAction`. Browser handles
//! (selected file, camera stream) stay in component state; the reducer only
//! sees plain data so it can be exercised without a DOM.

use std::rc::Rc;

use chrono::NaiveDate;
use yew::Reducible;

use super::book::ExpenseBook;
use super::form::{ExpenseForm, FormAction};
use crate::models::{ExpenseRecord, MonthlyOverview, TimeRange};

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

pub const UPLOAD_SUCCESS: &str = "Expense added successfully!";

/// The ways of adding an expense offered above the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddOption {
    Wallet,
    Camera,
    Picture,
    Manual,
}

impl AddOption {
    pub const ALL: [AddOption; 4] = [
        AddOption::Wallet,
        AddOption::Camera,
        AddOption::Picture,
        AddOption::Manual,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AddOption::Wallet => "Add through Google Wallet",
            AddOption::Camera => "Add through Camera",
            AddOption::Picture => "Add through Picture",
            AddOption::Manual => "Add Manually",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExpensesAction {
    ChooseAddOption(AddOption),
    ClosePanel { today: NaiveDate },
    Form(FormAction),
    Submit { today: NaiveDate, now_ms: i64 },
    Edit(ExpenseRecord),
    Remove(i64),
    SetTimeRange(TimeRange),
    FetchStarted,
    /// A fetched list; dropped unless `range` is still the selected range
    ExpensesLoaded {
        range: TimeRange,
        records: Vec<ExpenseRecord>,
    },
    /// Dropped like `ExpensesLoaded` when `range` is no longer selected
    FetchFailed { range: TimeRange, message: String },
    OverviewLoaded(MonthlyOverview),
    FileSelected(Option<String>),
    UploadStarted,
    UploadSucceeded { record: ExpenseRecord, now_ms: i64 },
    UploadFailed(String),
    /// Camera or export failures
    Failed(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExpensesState {
    pub book: ExpenseBook,
    pub form: ExpenseForm,
    pub add_option: Option<AddOption>,
    pub time_range: TimeRange,
    pub overview: MonthlyOverview,
    pub file_name: Option<String>,
    pub is_fetching: bool,
    pub is_uploading: bool,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
}

impl ExpensesState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            book: ExpenseBook::default(),
            form: ExpenseForm::new(today),
            add_option: None,
            time_range: TimeRange::default(),
            overview: MonthlyOverview::default(),
            file_name: None,
            is_fetching: false,
            is_uploading: false,
            error_message: None,
            success_message: None,
        }
    }

    pub fn apply(&mut self, action: ExpensesAction) {
        match action {
            ExpensesAction::ChooseAddOption(option) => {
                self.add_option = Some(option);
            }
            ExpensesAction::ClosePanel { today } => {
                self.form.apply(FormAction::Reset(today));
                self.add_option = None;
            }
            ExpensesAction::Form(form_action) => self.form.apply(form_action),
            ExpensesAction::Submit { today, now_ms } => self.submit(today, now_ms),
            ExpensesAction::Edit(record) => {
                self.form.apply(FormAction::Edit(record));
                self.add_option = Some(AddOption::Manual);
            }
            ExpensesAction::Remove(id) => {
                if self.book.remove(id).is_some() {
                    log::info!("removed expense {}", id);
                }
            }
            ExpensesAction::SetTimeRange(range) => {
                self.time_range = range;
            }
            ExpensesAction::FetchStarted => {
                self.is_fetching = true;
                self.error_message = None;
            }
            ExpensesAction::ExpensesLoaded { range, records } => {
                if range != self.time_range {
                    log::debug!("dropping stale list for the last {}", range.label());
                    return;
                }
                self.book = ExpenseBook::from_records(records);
                self.is_fetching = false;
            }
            ExpensesAction::FetchFailed { range, message } => {
                if range != self.time_range {
                    log::debug!("dropping stale failure for the last {}", range.label());
                    return;
                }
                self.error_message = Some(message);
                self.is_fetching = false;
            }
            ExpensesAction::OverviewLoaded(overview) => {
                self.overview = overview;
            }
            ExpensesAction::FileSelected(name) => {
                self.file_name = name;
            }
            ExpensesAction::UploadStarted => {
                self.is_uploading = true;
                self.error_message = None;
                self.success_message = None;
            }
            ExpensesAction::UploadSucceeded { mut record, now_ms } => {
                if record.id.is_none() {
                    record.id = Some(self.book.next_id(now_ms));
                }
                self.book.prepend(record);
                self.is_uploading = false;
                self.file_name = None;
                self.success_message = Some(UPLOAD_SUCCESS.to_string());
            }
            ExpensesAction::UploadFailed(message) => {
                self.is_uploading = false;
                self.error_message = Some(message);
            }
            ExpensesAction::Failed(message) => {
                self.error_message = Some(message);
            }
        }
    }

    /// Adds the form's record, or replaces the one being edited. The
    /// monthly card moves by the change in amount.
    fn submit(&mut self, today: NaiveDate, now_ms: i64) {
        let mut record = match self.form.validate() {
            Ok(record) => record,
            Err(err) => {
                self.form.error = Some(err);
                return;
            }
        };

        let previous = match (&self.form.editing, record.id) {
            (Some(_), Some(id)) => self.book.replace(id, record.clone()),
            _ => None,
        };
        let delta = match previous {
            Some(old) => record.amount - old.amount,
            None => {
                record.id = Some(self.book.next_id(now_ms));
                let amount = record.amount;
                self.book.push(record);
                amount
            }
        };
        self.overview.monthly_expense += delta;

        self.form.apply(FormAction::Reset(today));
        self.add_option = None;
    }
}

impl Reducible for ExpensesState {
    type Action = ExpensesAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}
