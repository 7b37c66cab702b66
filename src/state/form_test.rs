use super::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

fn filled() -> ExpenseForm {
    let mut form = ExpenseForm::new(today());
    form.apply(FormAction::Set(FormField::Name, "Groceries run".into()));
    form.apply(FormAction::Set(FormField::Amount, "54.30".into()));
    form
}

// =============================================================
// Date options
// =============================================================

#[test]
fn new_form_defaults_to_today() {
    let form = ExpenseForm::new(today());
    assert_eq!(form.date_option, DateOption::Today);
    assert_eq!(form.date, "2024-03-01");
    assert!(!form.is_editing());
}

#[test]
fn yesterday_crosses_month_boundary() {
    let mut form = ExpenseForm::new(today());
    form.apply(FormAction::ChooseDate(DateOption::Yesterday, today()));
    assert_eq!(form.date_option, DateOption::Yesterday);
    assert_eq!(form.date, "2024-02-29");
}

#[test]
fn custom_clears_date_for_input() {
    let mut form = ExpenseForm::new(today());
    form.apply(FormAction::ChooseDate(DateOption::Custom, today()));
    assert_eq!(form.date, "");
    form.apply(FormAction::Set(FormField::Date, "2024-01-15".into()));
    assert_eq!(form.date, "2024-01-15");
}

// =============================================================
// Validation
// =============================================================

#[test]
fn empty_name_is_rejected() {
    let mut form = filled();
    form.apply(FormAction::Set(FormField::Name, "   ".into()));
    assert_eq!(form.validate(), Err(ValidationError::MissingName));
}

#[test]
fn missing_and_bad_amounts_are_rejected() {
    let mut form = filled();
    form.apply(FormAction::Set(FormField::Amount, "".into()));
    assert_eq!(form.validate(), Err(ValidationError::MissingAmount));

    form.apply(FormAction::Set(FormField::Amount, "twelve".into()));
    assert_eq!(form.validate(), Err(ValidationError::InvalidAmount));
}

#[test]
fn missing_and_bad_dates_are_rejected() {
    let mut form = filled();
    form.apply(FormAction::ChooseDate(DateOption::Custom, today()));
    assert_eq!(form.validate(), Err(ValidationError::MissingDate));

    form.apply(FormAction::Set(FormField::Date, "2024-13-01".into()));
    assert_eq!(form.validate(), Err(ValidationError::InvalidDate));
}

#[test]
fn category_is_optional() {
    let record = filled().validate().unwrap();
    assert_eq!(record.name, "Groceries run");
    assert_eq!(record.amount, 54.3);
    assert_eq!(record.date, "2024-03-01");
    assert_eq!(record.category, "");
    assert_eq!(record.id, None);
}

#[test]
fn typing_clears_previous_error() {
    let mut form = filled();
    form.error = Some(ValidationError::MissingName);
    form.apply(FormAction::Set(FormField::Description, "weekly".into()));
    assert!(form.error.is_none());
}

// =============================================================
// Editing
// =============================================================

#[test]
fn edit_loads_record_and_keeps_id() {
    let existing = ExpenseRecord {
        id: Some(99),
        name: "Power bill".into(),
        amount: 80.0,
        date: "2024-02-10".into(),
        description: "February".into(),
        category: "Utility".into(),
    };

    let mut form = ExpenseForm::new(today());
    form.apply(FormAction::Edit(existing.clone()));

    assert!(form.is_editing());
    assert_eq!(form.date_option, DateOption::Custom);
    assert_eq!(form.amount, "80");
    assert_eq!(form.category, "Utility");

    form.apply(FormAction::Set(FormField::Amount, "85.5".into()));
    let updated = form.validate().unwrap();
    assert_eq!(updated.id, Some(99));
    assert_eq!(updated.amount, 85.5);
    assert_eq!(updated.description, "February");
}

#[test]
fn edit_normalizes_known_categories() {
    let mut form = ExpenseForm::new(today());
    form.apply(FormAction::Edit(ExpenseRecord {
        id: Some(5),
        category: "groceries".into(),
        ..Default::default()
    }));
    assert_eq!(form.category, "Groceries");

    form.apply(FormAction::Edit(ExpenseRecord {
        id: Some(6),
        category: "Travel".into(),
        ..Default::default()
    }));
    assert_eq!(form.category, "Travel");
}

#[test]
fn edit_reduces_dates_to_the_date_input_format() {
    let mut form = ExpenseForm::new(today());
    form.apply(FormAction::Edit(ExpenseRecord {
        id: Some(7),
        date: "2024-02-10T18:30:00Z".into(),
        ..Default::default()
    }));
    assert_eq!(form.date, "2024-02-10");

    form.apply(FormAction::Edit(ExpenseRecord {
        id: Some(8),
        date: "2024-02".into(),
        ..Default::default()
    }));
    assert_eq!(form.date, "2024-02-01");

    form.apply(FormAction::Edit(ExpenseRecord {
        id: Some(9),
        date: "someday".into(),
        ..Default::default()
    }));
    assert_eq!(form.date, "someday");
}

#[test]
fn reset_leaves_edit_mode() {
    let mut form = filled();
    form.apply(FormAction::Edit(ExpenseRecord {
        id: Some(1),
        ..Default::default()
    }));
    form.apply(FormAction::Reset(today()));
    assert_eq!(form, ExpenseForm::new(today()));
}
