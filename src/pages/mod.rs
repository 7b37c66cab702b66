pub mod expenses;

pub use expenses::ExpensesPage;
