//! Page-session state of the Expenses view.
//!
//! `book` holds the records, `form` the manual add/edit form and `page`
//! the reducer that ties them to the rest of the page.

pub mod book;
pub mod form;
pub mod page;

pub use book::ExpenseBook;
pub use form::{DateOption, ExpenseForm, FormAction, FormField};
pub use page::{AddOption, ExpensesAction, ExpensesState};
