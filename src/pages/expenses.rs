use chrono::{NaiveDate, Utc};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Blob, File};
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::{
    AddOptions, CameraPanel, CardIcon, ExpenseFormView, ExpenseTable, InfoCard, UploadPanel,
};
use crate::config::AppSettings;
use crate::error::AppError;
use crate::export::export_expenses;
use crate::models::{ExpenseRecord, TimeRange};
use crate::session::UserSession;
use crate::state::{AddOption, ExpensesAction, ExpensesState, FormAction};

const REMOVE_PROMPT: &str = "Are you sure you want to remove this expense?";
const NO_FILE: &str = "Please select a file before submitting.";
const WALLET_UNAVAILABLE: &str = "Adding expenses through Google Wallet is not available yet.";

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn upload_message(err: AppError) -> String {
    match err {
        AppError::Rejected(message) => message,
        other => format!("Error during file submission: {}", other),
    }
}

#[function_component(ExpensesPage)]
pub fn expenses_page() -> Html {
    let settings = use_context::<AppSettings>().unwrap_or_default();
    let session = use_context::<UserSession>().unwrap_or_default();
    let api = ApiClient::new(&settings, &session);

    let state = use_reducer(|| ExpensesState::new(today()));
    let file = use_state(|| None::<File>);

    {
        let state = state.clone();
        let api = api.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api.overview().await {
                        Ok(overview) => state.dispatch(ExpensesAction::OverviewLoaded(overview)),
                        Err(err) => log::error!("Error fetching expenses or savings data: {}", err),
                    }
                });
                || ()
            },
            session.uid.clone(),
        );
    }

    {
        let deps = (state.time_range, session.uid.clone());
        let state = state.clone();
        let api = api.clone();
        use_effect_with_deps(
            move |(range, _): &(TimeRange, String)| {
                let range = *range;
                state.dispatch(ExpensesAction::FetchStarted);
                spawn_local(async move {
                    match api.expenses(range).await {
                        Ok(records) => {
                            state.dispatch(ExpensesAction::ExpensesLoaded { range, records })
                        }
                        Err(err) => {
                            log::error!("Failed to fetch expenses: {}", err);
                            state.dispatch(ExpensesAction::FetchFailed {
                                range,
                                message: err.to_string(),
                            });
                        }
                    }
                });
                || ()
            },
            deps,
        );
    }

    let upload = {
        let state = state.clone();
        let file = file.clone();
        let api = api.clone();
        Callback::from(move |(image, name): (Blob, String)| {
            let state = state.clone();
            let file = file.clone();
            let api = api.clone();
            state.dispatch(ExpensesAction::UploadStarted);
            spawn_local(async move {
                match api.upload_receipt(&image, &name).await {
                    Ok(extracted) => {
                        log::info!("{} submitted, extracted {:?}", name, extracted);
                        let record = extracted.into_expense(today());
                        state.dispatch(ExpensesAction::UploadSucceeded {
                            record,
                            now_ms: now_ms(),
                        });
                        file.set(None);
                    }
                    Err(err) => {
                        log::error!("upload of {} failed: {}", name, err);
                        state.dispatch(ExpensesAction::UploadFailed(upload_message(err)));
                    }
                }
            });
        })
    };

    let on_option = {
        let state = state.clone();
        Callback::from(move |option: AddOption| {
            state.dispatch(ExpensesAction::ChooseAddOption(option));
        })
    };

    let on_form_action = {
        let state = state.clone();
        Callback::from(move |action: FormAction| state.dispatch(ExpensesAction::Form(action)))
    };

    let on_submit = {
        let state = state.clone();
        Callback::from(move |_| {
            state.dispatch(ExpensesAction::Submit {
                today: today(),
                now_ms: now_ms(),
            })
        })
    };

    let on_cancel = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(ExpensesAction::ClosePanel { today: today() }))
    };

    let on_file = {
        let state = state.clone();
        let file = file.clone();
        Callback::from(move |selected: Option<File>| {
            let name = selected.as_ref().map(|f| f.name());
            log::debug!("file selected: {:?}", name);
            state.dispatch(ExpensesAction::FileSelected(name));
            file.set(selected);
        })
    };

    let on_file_submit = {
        let state = state.clone();
        let file = file.clone();
        let upload = upload.clone();
        Callback::from(move |_| match &*file {
            Some(selected) => {
                let image: &Blob = selected;
                upload.emit((image.clone(), selected.name()));
            }
            None => state.dispatch(ExpensesAction::Failed(NO_FILE.to_string())),
        })
    };

    let on_capture = {
        let upload = upload.clone();
        Callback::from(move |image: Blob| {
            upload.emit((image, crate::media::CAPTURE_FILE_NAME.to_string()))
        })
    };

    let on_failure = {
        let state = state.clone();
        Callback::from(move |message: String| state.dispatch(ExpensesAction::Failed(message)))
    };

    let on_range = {
        let state = state.clone();
        Callback::from(move |range: TimeRange| state.dispatch(ExpensesAction::SetTimeRange(range)))
    };

    let on_edit = {
        let state = state.clone();
        Callback::from(move |record: ExpenseRecord| state.dispatch(ExpensesAction::Edit(record)))
    };

    let on_remove = {
        let state = state.clone();
        Callback::from(move |id: i64| {
            if confirm(REMOVE_PROMPT) {
                state.dispatch(ExpensesAction::Remove(id));
            }
        })
    };

    let on_export = {
        let state = state.clone();
        Callback::from(move |_| {
            if let Err(err) = export_expenses(state.book.records()) {
                log::error!("{}", err);
                state.dispatch(ExpensesAction::Failed(err.to_string()));
            }
        })
    };

    let currency = settings.currency_code.clone();
    let rows: Vec<ExpenseRecord> = state
        .book
        .in_range(state.time_range, Utc::now())
        .into_iter()
        .cloned()
        .collect();

    let panel = match state.add_option {
        Some(AddOption::Manual) => html! {
            <ExpenseFormView
                form={state.form.clone()}
                today={today()}
                currency={currency.clone()}
                on_action={on_form_action}
                on_submit={on_submit}
                on_cancel={on_cancel}
            />
        },
        Some(AddOption::Picture) => html! {
            <UploadPanel
                file_name={state.file_name.clone()}
                uploading={state.is_uploading}
                on_file={on_file}
                on_submit={on_file_submit}
            />
        },
        Some(AddOption::Camera) => html! {
            <CameraPanel uploading={state.is_uploading} on_capture={on_capture} on_error={on_failure} />
        },
        Some(AddOption::Wallet) => html! {
            <p class="text-sm text-muted-foreground">{ WALLET_UNAVAILABLE }</p>
        },
        None => html! {},
    };

    html! {
        <>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <InfoCard title="Monthly Expense" amount={state.overview.monthly_expense} icon={CardIcon::CreditCard} currency={currency.clone()} />
                <InfoCard title="Monthly Savings" amount={state.overview.monthly_savings} icon={CardIcon::Wallet} currency={currency.clone()} />
                <InfoCard title="Total Savings" amount={state.overview.total_savings} icon={CardIcon::Target} currency={currency.clone()} />
            </div>

            <AddOptions selected={state.add_option} on_select={on_option} />

            { panel }

            if state.is_uploading {
                <div class="text-center text-sm text-muted-foreground">{"Submitting..."}</div>
            }
            if let Some(msg) = &state.success_message {
                <p class="text-sm text-green-600">{ msg.clone() }</p>
            }
            if let Some(msg) = &state.error_message {
                <p class="text-sm text-red-500">{ msg.clone() }</p>
            }

            <ExpenseTable
                rows={rows}
                time_range={state.time_range}
                loading={state.is_fetching}
                currency={currency}
                on_range={on_range}
                on_edit={on_edit}
                on_remove={on_remove}
                on_export={on_export}
            />
        </>
    }
}
