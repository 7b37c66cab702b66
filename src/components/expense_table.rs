use web_sys::HtmlSelectElement;
use yew::prelude::*;

use super::icons::{icon_download, icon_pencil, icon_trash};
use crate::format::{format_currency, format_date};
use crate::models::{ExpenseRecord, TimeRange};

#[derive(Properties, PartialEq)]
pub struct ExpenseTableProps {
    /// Rows already filtered to `time_range`
    pub rows: Vec<ExpenseRecord>,
    pub time_range: TimeRange,
    pub loading: bool,
    pub currency: String,
    pub on_range: Callback<TimeRange>,
    pub on_edit: Callback<ExpenseRecord>,
    pub on_remove: Callback<i64>,
    pub on_export: Callback<()>,
}

#[function_component(ExpenseTable)]
pub fn expense_table(props: &ExpenseTableProps) -> Html {
    let on_range = {
        let on_range = props.on_range.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(range) = TimeRange::from_label(&select.value()) {
                on_range.emit(range);
            }
        })
    };

    let on_export = {
        let on_export = props.on_export.clone();
        Callback::from(move |_| on_export.emit(()))
    };

    let shown_total: f64 = props.rows.iter().map(|r| r.amount).sum();

    html! {
        <div class="bg-card rounded-2xl shadow-md border border-border overflow-hidden">
            <div class="p-5 border-b border-border flex items-center justify-between gap-3">
                <h3 class="font-bold text-lg text-foreground">{"Expense Tracker"}</h3>
                <div class="flex items-center gap-3">
                    <select onchange={on_range} class="bg-[#B2CBDE] text-[#173E63] rounded-[10px] px-3 py-2 text-[11px] font-bold">
                        { for TimeRange::ALL.iter().map(|range| html! {
                            <option value={range.label()} selected={*range == props.time_range}>
                                { format!("Showing: Last {}", range.label()) }
                            </option>
                        }) }
                    </select>
                    <button type="button" onclick={on_export}
                        class="flex items-center gap-2 bg-[#173E63] text-white px-4 py-2 rounded-[10px] text-[11px] font-bold">
                        { icon_download() }
                        {"Export"}
                    </button>
                </div>
            </div>
            <div class="overflow-x-auto">
                <table class="w-full text-left border-collapse">
                    <thead>
                        <tr class="bg-muted text-muted-foreground text-[10px] uppercase tracking-widest">
                            <th class="px-8 py-4 font-bold">{"Date"}</th>
                            <th class="px-8 py-4 font-bold">{"Name"}</th>
                            <th class="px-8 py-4 font-bold">{"Category"}</th>
                            <th class="px-8 py-4 font-bold">{"Description"}</th>
                            <th class="px-8 py-4 font-bold text-right">{"Amount"}</th>
                            <th class="px-8 py-4 font-bold">{"Action"}</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        { if props.loading {
                            html! { <tr><td colspan="6" class="px-8 py-6 text-center text-muted-foreground">{"Loading..."}</td></tr> }
                        } else if props.rows.is_empty() {
                            html! { <tr><td colspan="6" class="px-8 py-6 text-center text-muted-foreground">{"No expenses found for the selected time range."}</td></tr> }
                        } else {
                            html! {
                                <>
                                    { for props.rows.iter().enumerate().map(|(idx, item)| {
                                        let key = item.id.map_or_else(|| format!("row-{}", idx), |id| id.to_string());
                                        html! {
                                            <tr key={key} class="text-sm hover:bg-muted/40 transition-colors group">
                                                <td class="px-8 py-4 text-muted-foreground">{ format_date(&item.date) }</td>
                                                <td class="px-8 py-4 text-foreground">{ item.name.clone() }</td>
                                                <td class="px-8 py-4">
                                                    <span class="bg-secondary text-secondary-foreground px-3 py-1 rounded-full text-[10px] font-bold">{ item.category.clone() }</span>
                                                </td>
                                                <td class="px-8 py-4 text-muted-foreground">{ item.description.clone() }</td>
                                                <td class="px-8 py-4 text-right font-semibold text-foreground">{ format_currency(item.amount, &props.currency) }</td>
                                                <td class="px-8 py-4">{ row_actions(item, &props.on_edit, &props.on_remove) }</td>
                                            </tr>
                                        }
                                    }) }
                                    <tr class="text-sm font-bold">
                                        <td colspan="4" class="px-8 py-4 text-muted-foreground">{"Total"}</td>
                                        <td class="px-8 py-4 text-right text-foreground">{ format_currency(shown_total, &props.currency) }</td>
                                        <td></td>
                                    </tr>
                                </>
                            }
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

/// Edit/remove buttons. Rows the API sent without an id can't be targeted,
/// so they get none.
fn row_actions(item: &ExpenseRecord, on_edit: &Callback<ExpenseRecord>, on_remove: &Callback<i64>) -> Html {
    let id = match item.id {
        Some(id) => id,
        None => return html! {},
    };

    let edit = {
        let on_edit = on_edit.clone();
        let item = item.clone();
        Callback::from(move |_| on_edit.emit(item.clone()))
    };
    let remove = {
        let on_remove = on_remove.clone();
        Callback::from(move |_| on_remove.emit(id))
    };

    html! {
        <div class="flex gap-2 opacity-60 group-hover:opacity-100">
            <button type="button" title="Edit" onclick={edit} class="p-1 rounded hover:bg-secondary">{ icon_pencil() }</button>
            <button type="button" title="Remove" onclick={remove} class="p-1 rounded hover:bg-secondary">{ icon_trash() }</button>
        </div>
    }
}
