use gloo_console::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{self, CategoryTotal, PeriodTotal};
use crate::model::{derive_categories, Expense};
use crate::session::Session;

use super::create_expense::CreateExpense;
use super::expense_table::ExpensesTable;
use super::summary::Summary;

/// Owns the authoritative local snapshot of the expense list, the category
/// list derived from it, and the three aggregate datasets. `refresh` is the
/// only code path that writes any of them: it runs on mount and again after
/// every successful mutation, replacing each dataset wholesale. A failed
/// fetch is logged and leaves the previous value of that dataset in place.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let session = use_context::<UseStateHandle<Session>>();
    let expenses = use_state(Vec::<Expense>::new);
    let categories = use_state(|| vec!["All".to_string()]);
    let by_category = use_state(Vec::<CategoryTotal>::new);
    let by_week = use_state(Vec::<PeriodTotal>::new);
    let by_month = use_state(Vec::<PeriodTotal>::new);

    let refresh = {
        let session = session.clone();
        let expenses = expenses.clone();
        let categories = categories.clone();
        let by_category = by_category.clone();
        let by_week = by_week.clone();
        let by_month = by_month.clone();
        Callback::from(move |_: ()| {
            let Some(authorization) = session
                .as_ref()
                .and_then(|s| s.authorization().map(str::to_string))
            else {
                return;
            };
            let expenses = expenses.clone();
            let categories = categories.clone();
            let by_category = by_category.clone();
            let by_week = by_week.clone();
            let by_month = by_month.clone();
            spawn_local(async move {
                match api::fetch_expenses(&authorization).await {
                    Ok(list) => {
                        categories.set(derive_categories(&list));
                        expenses.set(list);
                    }
                    Err(err) => error!("failed to fetch expenses:", err.to_string()),
                }
                match api::fetch_category_totals(&authorization).await {
                    Ok(data) => by_category.set(data),
                    Err(err) => error!("failed to fetch category totals:", err.to_string()),
                }
                match api::fetch_weekly_totals(&authorization).await {
                    Ok(data) => by_week.set(data),
                    Err(err) => error!("failed to fetch weekly totals:", err.to_string()),
                }
                match api::fetch_monthly_totals(&authorization).await {
                    Ok(data) => by_month.set(data),
                    Err(err) => error!("failed to fetch monthly totals:", err.to_string()),
                }
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with_deps(
            move |_| {
                refresh.emit(());
                || ()
            },
            (),
        );
    }

    html! {
        <div class="p-8 max-w-6xl mx-auto space-y-6">
            <Summary
                by_category={(*by_category).clone()}
                by_week={(*by_week).clone()}
                by_month={(*by_month).clone()}
            />
            <ExpensesTable
                expenses={(*expenses).clone()}
                categories={(*categories).clone()}
                on_refresh={refresh.clone()}
            />
            <CreateExpense on_refresh={refresh} />
        </div>
    }
}
