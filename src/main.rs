use yew::prelude::*;

mod api;
mod auth;
mod charts;
mod components;
mod model;
mod session;

use components::auth_page::AuthPage;
use components::dashboard::Dashboard;
use components::header::Header;
use session::Session;

#[function_component(App)]
fn app() -> Html {
    let session = use_state(Session::load);

    // Token presence gates the dashboard; login/logout flow through the
    // session context, so flipping it here re-renders the right screen.
    let content = if session.authenticated() {
        html! {
            <>
                <Header />
                <Dashboard />
            </>
        }
    } else {
        html! { <AuthPage /> }
    };

    html! {
        <ContextProvider<UseStateHandle<Session>> context={session.clone()}>
            { content }
        </ContextProvider<UseStateHandle<Session>>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
