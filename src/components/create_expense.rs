use gloo_console::error;
use wasm_bindgen_futures::spawn_local;
use web_sys::InputEvent;
use yew::prelude::*;

use crate::api;
use crate::model::ExpenseDraft;
use crate::session::Session;

#[derive(Properties, PartialEq)]
pub struct CreateExpenseProps {
    pub on_refresh: Callback<()>,
}

/// New-expense form. Field validation is left to the browser's required
/// constraints; on a successful post the draft resets to its defaults and
/// the dashboard refreshes. A failed post keeps everything the user typed.
#[function_component(CreateExpense)]
pub fn create_expense(props: &CreateExpenseProps) -> Html {
    let session = use_context::<UseStateHandle<Session>>();
    let draft = use_state(ExpenseDraft::default);
    let busy = use_state(|| false);

    let set_field = |apply: fn(&mut ExpenseDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            apply(&mut next, input.value());
            draft.set(next);
        })
    };

    let on_title = set_field(|d, v| d.title = v);
    let on_description = set_field(|d, v| d.description = v);
    let on_category = set_field(|d, v| d.category = v);
    let on_amount = set_field(|d, v| d.amount = v.parse().unwrap_or(0.0));
    let on_date = set_field(|d, v| d.date = v);

    let on_submit = {
        let session = session.clone();
        let draft = draft.clone();
        let busy = busy.clone();
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(authorization) = session
                .as_ref()
                .and_then(|s| s.authorization().map(str::to_string))
            else {
                return;
            };
            let payload = (*draft).clone();
            let draft = draft.clone();
            let busy = busy.clone();
            let on_refresh = on_refresh.clone();
            busy.set(true);
            spawn_local(async move {
                match api::create_expense(&authorization, &payload).await {
                    Ok(()) => {
                        draft.set(ExpenseDraft::default());
                        on_refresh.emit(());
                    }
                    // Typed input is preserved for another attempt.
                    Err(err) => error!("failed to add expense:", err.to_string()),
                }
                busy.set(false);
            });
        })
    };

    html! {
        <form onsubmit={on_submit} class="bg-white rounded-lg shadow-sm border border-slate-200 p-6 space-y-3">
            <h2 class="text-lg font-semibold text-slate-800">{"Add New Expense"}</h2>
            <input
                type="text"
                placeholder="Title"
                required={true}
                value={draft.title.clone()}
                oninput={on_title}
                class="w-full px-4 py-2 border border-slate-300 rounded-md"
            />
            <input
                type="text"
                placeholder="Description"
                required={true}
                value={draft.description.clone()}
                oninput={on_description}
                class="w-full px-4 py-2 border border-slate-300 rounded-md"
            />
            <input
                type="number"
                placeholder="Amount"
                required={true}
                min="0"
                value={draft.amount.to_string()}
                oninput={on_amount}
                class="w-full px-4 py-2 border border-slate-300 rounded-md"
            />
            <input
                type="text"
                placeholder="Category"
                required={true}
                value={draft.category.clone()}
                oninput={on_category}
                class="w-full px-4 py-2 border border-slate-300 rounded-md"
            />
            <input
                type="date"
                required={true}
                value={draft.date.clone()}
                oninput={on_date}
                class="w-full px-4 py-2 border border-slate-300 rounded-md"
            />
            <button
                type="submit"
                disabled={*busy}
                class="w-full bg-blue-500 text-white py-2 rounded-md font-semibold hover:bg-blue-600 transition-colors disabled:opacity-50"
            >
                { if *busy { "Adding..." } else { "Add Expense" } }
            </button>
        </form>
    }
}
