use chrono::NaiveDate;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::icons::icon_plus;
use crate::models::Category;
use crate::state::{DateOption, ExpenseForm, FormAction, FormField};

#[derive(Properties, PartialEq)]
pub struct ExpenseFormViewProps {
    pub form: ExpenseForm,
    pub today: NaiveDate,
    pub currency: String,
    pub on_action: Callback<FormAction>,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
}

fn on_input(field: FormField, on_action: &Callback<FormAction>) -> Callback<InputEvent> {
    let on_action = on_action.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_action.emit(FormAction::Set(field, input.value()));
    })
}

#[function_component(ExpenseFormView)]
pub fn expense_form_view(props: &ExpenseFormViewProps) -> Html {
    let form = &props.form;

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_description = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_action.emit(FormAction::Set(FormField::Description, area.value()));
        })
    };

    let on_category = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_action.emit(FormAction::Set(FormField::Category, select.value()));
        })
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_| on_cancel.emit(()))
    };

    let input_class = "w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[13px] text-[#173E63] border-none";

    html! {
        <form class="bg-white p-5 rounded-[10px] shadow-sm border border-white/50 space-y-4" {onsubmit}>
            <h4 class="text-[#1D617A] font-bold text-[15px] tracking-wider">
                { if form.is_editing() { "Edit Expense" } else { "Add New Expense" } }
            </h4>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-3">
                <input type="text" placeholder="Expense Name" value={form.name.clone()}
                    oninput={on_input(FormField::Name, &props.on_action)} class={input_class} />
                <input type="number" step="0.01" placeholder={format!("Amount ({})", props.currency)} value={form.amount.clone()}
                    oninput={on_input(FormField::Amount, &props.on_action)} class={input_class} />
            </div>

            <div class="space-y-1">
                <label class="text-[12px] font-bold text-muted-foreground">{"Select Date"}</label>
                <div class="flex gap-2">
                    { for DateOption::ALL.iter().map(|option| {
                        let option = *option;
                        let on_action = props.on_action.clone();
                        let today = props.today;
                        let class_name = if form.date_option == option {
                            "flex-1 bg-[#173E63] text-white py-2 rounded-[10px] text-[11px] font-bold"
                        } else {
                            "flex-1 bg-[#B2CBDE] text-[#173E63] py-2 rounded-[10px] text-[11px] font-bold"
                        };
                        html! {
                            <button type="button" class={class_name}
                                onclick={Callback::from(move |_| on_action.emit(FormAction::ChooseDate(option, today)))}>
                                { option.label() }
                            </button>
                        }
                    }) }
                </div>
            </div>

            if form.date_option == DateOption::Custom {
                <input type="date" value={form.date.clone()}
                    oninput={on_input(FormField::Date, &props.on_action)} class={input_class} />
            }

            <div class="grid grid-cols-1 md:grid-cols-2 gap-3">
                <textarea rows="2" placeholder="Description (optional)" value={form.description.clone()}
                    oninput={on_description} class={input_class} />
                <select onchange={on_category} class={input_class}>
                    <option value="" selected={form.category.is_empty()}>{"Select Category (optional)"}</option>
                    { for Category::ALL.iter().map(|category| html! {
                        <option value={category.as_str()} selected={form.category == category.as_str()}>
                            { category.as_str() }
                        </option>
                    }) }
                </select>
            </div>

            if let Some(err) = &form.error {
                <p class="text-sm text-red-500">{ err.to_string() }</p>
            }

            <div class="flex gap-3">
                <button type="submit" class="flex-1 bg-[#173E63] text-white py-2 rounded-[10px] text-[11px] font-bold flex items-center justify-center gap-2">
                    { if form.is_editing() { "Update Expense" } else { "Add Expense" } }
                    { icon_plus() }
                </button>
                <button type="button" onclick={on_cancel} class="flex-1 bg-[#B2CBDE] text-[#173E63] py-2 rounded-[10px] text-[11px] font-bold">
                    {"Cancel"}
                </button>
            </div>
        </form>
    }
}
