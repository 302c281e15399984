use gloo_console::error;
use wasm_bindgen_futures::spawn_local;
use web_sys::InputEvent;
use yew::prelude::*;

use crate::api;
use crate::model::{filter_expenses, Expense, RowEditor};
use crate::session::Session;

#[derive(Properties, PartialEq)]
pub struct ExpensesTableProps {
    pub expenses: Vec<Expense>,
    pub categories: Vec<String>,
    pub on_refresh: Callback<()>,
}

/// The expense list with category filtering and inline per-row editing.
/// The snapshot itself is never mutated here: committing an edit or a
/// delete goes to the server and, on success, asks the dashboard to
/// refresh. A failed save keeps the row in edit mode with its draft; a
/// failed delete leaves the row exactly where it was.
#[function_component(ExpensesTable)]
pub fn expenses_table(props: &ExpensesTableProps) -> Html {
    let session = use_context::<UseStateHandle<Session>>();
    let filter = use_state(|| "All".to_string());
    let editor = use_state(RowEditor::default);
    let busy = use_state(|| false);

    let authorization = session
        .as_ref()
        .and_then(|s| s.authorization().map(str::to_string));

    let filtered = filter_expenses(&props.expenses, &filter);

    let on_filter_change = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            filter.set(select.value());
        })
    };

    let on_save = {
        let editor = editor.clone();
        let busy = busy.clone();
        let on_refresh = props.on_refresh.clone();
        let authorization = authorization.clone();
        Callback::from(move |_| {
            let Some((id, draft)) = editor.pending() else {
                return;
            };
            let Some(authorization) = authorization.clone() else {
                return;
            };
            let editor = editor.clone();
            let busy = busy.clone();
            let on_refresh = on_refresh.clone();
            busy.set(true);
            spawn_local(async move {
                match api::update_expense(&authorization, id, &draft).await {
                    Ok(()) => {
                        let mut next = (*editor).clone();
                        next.cancel();
                        editor.set(next);
                        on_refresh.emit(());
                    }
                    // The row stays in edit mode with the draft intact.
                    Err(err) => error!("failed to update expense:", err.to_string()),
                }
                busy.set(false);
            });
        })
    };

    let on_cancel = {
        let editor = editor.clone();
        Callback::from(move |_| {
            let mut next = (*editor).clone();
            next.cancel();
            editor.set(next);
        })
    };

    let edit_categories: Vec<String> = props
        .categories
        .iter()
        .filter(|c| *c != "All")
        .cloned()
        .collect();

    html! {
        <div class="bg-white rounded-lg shadow-sm border border-slate-200 p-6">
            <h2 class="text-lg font-semibold text-slate-800 mb-4">{"Expenses"}</h2>

            <div class="mb-4">
                <label class="text-sm text-slate-600">
                    {"Filter by Category: "}
                    <select
                        value={(*filter).clone()}
                        onchange={on_filter_change}
                        class="ml-1 px-3 py-1 border border-slate-300 rounded-md text-sm"
                    >
                        { for props.categories.iter().map(|cat| html! {
                            <option value={cat.clone()} selected={*cat == **filter}>{ cat.clone() }</option>
                        }) }
                    </select>
                </label>
            </div>

            <div class="overflow-x-auto">
                <table class="w-full text-left border-collapse">
                    <thead>
                        <tr class="bg-slate-50 text-slate-500 text-xs uppercase tracking-wider">
                            <th class="px-4 py-3 font-semibold">{"Title"}</th>
                            <th class="px-4 py-3 font-semibold">{"Description"}</th>
                            <th class="px-4 py-3 font-semibold">{"Category"}</th>
                            <th class="px-4 py-3 font-semibold">{"Amount"}</th>
                            <th class="px-4 py-3 font-semibold">{"Date"}</th>
                            <th class="px-4 py-3 font-semibold">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-slate-100">
                        { for filtered.iter().map(|exp| {
                            if editor.is_editing(exp.id) {
                                let draft = editor.draft().cloned().unwrap_or_default();
                                let on_title = {
                                    let editor = editor.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        let value = input.value();
                                        let mut next = (*editor).clone();
                                        next.update_draft(|d| d.title = value);
                                        editor.set(next);
                                    })
                                };
                                let on_description = {
                                    let editor = editor.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        let value = input.value();
                                        let mut next = (*editor).clone();
                                        next.update_draft(|d| d.description = value);
                                        editor.set(next);
                                    })
                                };
                                let on_category = {
                                    let editor = editor.clone();
                                    Callback::from(move |e: Event| {
                                        let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
                                        let value = select.value();
                                        let mut next = (*editor).clone();
                                        next.update_draft(|d| d.category = value);
                                        editor.set(next);
                                    })
                                };
                                let on_amount = {
                                    let editor = editor.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        let value = input.value().parse::<f64>().unwrap_or(0.0);
                                        let mut next = (*editor).clone();
                                        next.update_draft(|d| d.amount = value);
                                        editor.set(next);
                                    })
                                };
                                let on_date = {
                                    let editor = editor.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        let value = input.value();
                                        let mut next = (*editor).clone();
                                        next.update_draft(|d| d.date = value);
                                        editor.set(next);
                                    })
                                };

                                html! {
                                    <tr key={exp.id} class="bg-blue-50 text-sm">
                                        <td class="px-4 py-2">
                                            <input type="text" value={draft.title.clone()} oninput={on_title}
                                                class="w-full px-2 py-1 border border-slate-300 rounded-md" />
                                        </td>
                                        <td class="px-4 py-2">
                                            <input type="text" value={draft.description.clone()} oninput={on_description}
                                                class="w-full px-2 py-1 border border-slate-300 rounded-md" />
                                        </td>
                                        <td class="px-4 py-2">
                                            <select value={draft.category.clone()} onchange={on_category}
                                                class="w-full px-2 py-1 border border-slate-300 rounded-md">
                                                { for edit_categories.iter().map(|cat| html! {
                                                    <option value={cat.clone()} selected={*cat == draft.category}>{ cat.clone() }</option>
                                                }) }
                                            </select>
                                        </td>
                                        <td class="px-4 py-2">
                                            <input type="number" min="0" value={draft.amount.to_string()} oninput={on_amount}
                                                class="w-full px-2 py-1 border border-slate-300 rounded-md" />
                                        </td>
                                        <td class="px-4 py-2">
                                            <input type="date" value={draft.date.clone()} oninput={on_date}
                                                class="w-full px-2 py-1 border border-slate-300 rounded-md" />
                                        </td>
                                        <td class="px-4 py-2 whitespace-nowrap">
                                            <button onclick={on_save.clone()} disabled={*busy}
                                                class="mr-2 px-3 py-1 rounded-md text-white text-sm bg-green-600 hover:bg-green-700 disabled:opacity-50">
                                                {"Save"}
                                            </button>
                                            <button onclick={on_cancel.clone()}
                                                class="px-3 py-1 rounded-md text-white text-sm bg-slate-400 hover:bg-slate-500">
                                                {"Cancel"}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            } else {
                                let on_edit = {
                                    let editor = editor.clone();
                                    let exp = exp.clone();
                                    Callback::from(move |_| {
                                        // Replaces any edit already in progress.
                                        let mut next = (*editor).clone();
                                        next.start(&exp);
                                        editor.set(next);
                                    })
                                };
                                let on_delete = {
                                    let busy = busy.clone();
                                    let on_refresh = props.on_refresh.clone();
                                    let authorization = authorization.clone();
                                    let id = exp.id;
                                    Callback::from(move |_| {
                                        let confirmed = web_sys::window()
                                            .map(|w| {
                                                w.confirm_with_message("You sure you wanna delete this expense?")
                                                    .unwrap_or(false)
                                            })
                                            .unwrap_or(false);
                                        if !confirmed {
                                            return;
                                        }
                                        let Some(authorization) = authorization.clone() else {
                                            return;
                                        };
                                        let busy = busy.clone();
                                        let on_refresh = on_refresh.clone();
                                        busy.set(true);
                                        spawn_local(async move {
                                            match api::delete_expense(&authorization, id).await {
                                                Ok(()) => on_refresh.emit(()),
                                                // Nothing was removed locally, so the row just stays.
                                                Err(err) => error!("failed to delete expense:", err.to_string()),
                                            }
                                            busy.set(false);
                                        });
                                    })
                                };

                                html! {
                                    <tr key={exp.id} class="text-sm hover:bg-slate-50 transition-colors">
                                        <td class="px-4 py-3 text-slate-700">{ exp.title.clone() }</td>
                                        <td class="px-4 py-3 text-slate-500">{ exp.description.clone() }</td>
                                        <td class="px-4 py-3">
                                            <span class="bg-slate-100 text-slate-600 px-2.5 py-1 rounded-full text-xs font-semibold">
                                                { exp.category.clone() }
                                            </span>
                                        </td>
                                        <td class="px-4 py-3 font-semibold text-slate-700">{ format!("{:.2}", exp.amount) }</td>
                                        <td class="px-4 py-3 text-slate-500">{ crate::model::truncate_date(&exp.date) }</td>
                                        <td class="px-4 py-3 whitespace-nowrap">
                                            <button onclick={on_edit}
                                                class="mr-2 px-3 py-1 rounded-md text-white text-sm bg-blue-500 hover:bg-blue-600">
                                                {"Edit"}
                                            </button>
                                            <button onclick={on_delete} disabled={*busy}
                                                class="px-3 py-1 rounded-md text-white text-sm bg-red-500 hover:bg-red-600 disabled:opacity-50">
                                                {"Delete"}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        }) }
                    </tbody>
                </table>
                if filtered.is_empty() {
                    <p class="py-6 text-center text-sm text-slate-400">{"No expenses to show."}</p>
                }
            </div>
        </div>
    }
}
