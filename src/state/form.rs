//! Manual add/edit form.

use chrono::{Duration, NaiveDate};

use crate::error::ValidationError;
use crate::format::{iso_date, parse_calendar_date, parse_strict_amount};
use crate::models::{Category, ExpenseRecord};

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// How the form's date is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DateOption {
    #[default]
    Today,
    Yesterday,
    Custom,
}

impl DateOption {
    pub const ALL: [DateOption; 3] = [DateOption::Today, DateOption::Yesterday, DateOption::Custom];

    pub fn label(&self) -> &'static str {
        match self {
            DateOption::Today => "Today",
            DateOption::Yesterday => "Yesterday",
            DateOption::Custom => "Custom",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Amount,
    Date,
    Description,
    Category,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormAction {
    Set(FormField, String),
    ChooseDate(DateOption, NaiveDate),
    /// Load an existing record for editing
    Edit(ExpenseRecord),
    Reset(NaiveDate),
}

/// Raw input of the form. Values stay strings until submit so the inputs
/// echo exactly what was typed.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseForm {
    pub name: String,
    pub amount: String,
    pub date: String,
    pub description: String,
    /// Empty when no category was picked
    pub category: String,
    pub date_option: DateOption,
    /// Record being edited, as it was before editing started
    pub editing: Option<ExpenseRecord>,
    pub error: Option<ValidationError>,
}

impl ExpenseForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            amount: String::new(),
            date: iso_date(today),
            description: String::new(),
            category: String::new(),
            date_option: DateOption::Today,
            editing: None,
            error: None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::Set(field, value) => {
                match field {
                    FormField::Name => self.name = value,
                    FormField::Amount => self.amount = value,
                    FormField::Date => self.date = value,
                    FormField::Description => self.description = value,
                    FormField::Category => self.category = value,
                }
                self.error = None;
            }
            FormAction::ChooseDate(option, today) => {
                self.date_option = option;
                self.date = match option {
                    DateOption::Today => iso_date(today),
                    DateOption::Yesterday => iso_date(today - Duration::days(1)),
                    DateOption::Custom => String::new(),
                };
                self.error = None;
            }
            FormAction::Edit(record) => {
                self.name = record.name.clone();
                self.amount = record.amount.to_string();
                self.date = parse_calendar_date(&record.date)
                    .map(iso_date)
                    .unwrap_or_else(|| record.date.clone());
                self.description = record.description.clone();
                // Match the select's spelling when the API used another case.
                self.category = record
                    .category
                    .parse::<Category>()
                    .map(|c| c.to_string())
                    .unwrap_or_else(|_| record.category.clone());
                self.date_option = DateOption::Custom;
                self.editing = Some(record);
                self.error = None;
            }
            FormAction::Reset(today) => *self = ExpenseForm::new(today),
        }
    }

    /// Builds the record the form describes. The id is carried over when
    /// editing and left empty otherwise.
    pub fn validate(&self) -> Result<ExpenseRecord, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.amount.trim().is_empty() {
            return Err(ValidationError::MissingAmount);
        }
        let amount = parse_strict_amount(&self.amount).ok_or(ValidationError::InvalidAmount)?;
        if self.date.trim().is_empty() {
            return Err(ValidationError::MissingDate);
        }
        let date = parse_calendar_date(&self.date).ok_or(ValidationError::InvalidDate)?;

        Ok(ExpenseRecord {
            id: self.editing.as_ref().and_then(|r| r.id),
            name: name.to_string(),
            amount,
            date: iso_date(date),
            description: self.description.trim().to_string(),
            category: self.category.clone(),
        })
    }
}
