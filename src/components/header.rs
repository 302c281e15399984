use yew::prelude::*;

use crate::session::Session;

#[function_component(Header)]
pub fn header() -> Html {
    let session = use_context::<UseStateHandle<Session>>();

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_| {
            // Clearing the token drops the app back to the auth screen.
            if let Some(session) = session.as_ref() {
                session.set(Session::logout());
            }
        })
    };

    html! {
        <header class="bg-white border-b border-slate-200 h-16 flex items-center justify-between px-8">
            <h1 class="text-xl font-bold text-slate-800">{"Xpense 💸"}</h1>
            <button
                onclick={on_logout}
                class="px-4 py-2 rounded-lg text-sm font-semibold text-white bg-slate-700 hover:bg-slate-600 transition-colors"
            >
                {"Logout"}
            </button>
        </header>
    }
}
