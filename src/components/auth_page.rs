use wasm_bindgen_futures::spawn_local;
use web_sys::InputEvent;
use yew::prelude::*;

use crate::auth;
use crate::session::Session;

#[function_component(AuthPage)]
pub fn auth_page() -> Html {
    let session = use_context::<UseStateHandle<Session>>();
    let is_register = use_state(|| false);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let notice = use_state(|| None::<String>);
    let show_resend = use_state(|| false);
    let loading = use_state(|| false);

    let on_submit = {
        let session = session.clone();
        let is_register = is_register.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let notice = notice.clone();
        let show_resend = show_resend.clone();
        let loading = loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let email_val = (*email).clone();
            let password_val = (*password).clone();
            let register = *is_register;
            let session = session.clone();
            let error = error.clone();
            let notice = notice.clone();
            let show_resend = show_resend.clone();
            let loading = loading.clone();

            loading.set(true);
            error.set(None);
            notice.set(None);
            show_resend.set(false);

            spawn_local(async move {
                if register {
                    match auth::sign_up(&email_val, &password_val).await {
                        Ok(()) => notice.set(Some(
                            "Registration successful! Please check your email to confirm."
                                .to_string(),
                        )),
                        Err(failure) => error.set(Some(failure.message)),
                    }
                } else {
                    match auth::sign_in(&email_val, &password_val).await {
                        Ok(access_token) => {
                            if let Some(session) = session.as_ref() {
                                session.set(Session::login(&access_token));
                            }
                        }
                        Err(failure) if failure.unconfirmed_email => {
                            error.set(Some(
                                "Please confirm your email first. Didn't get it? Resend below."
                                    .to_string(),
                            ));
                            show_resend.set(true);
                        }
                        Err(failure) => error.set(Some(failure.message)),
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_resend = {
        let email = email.clone();
        let error = error.clone();
        let notice = notice.clone();
        let show_resend = show_resend.clone();
        let loading = loading.clone();
        Callback::from(move |_| {
            let email_val = (*email).clone();
            let error = error.clone();
            let notice = notice.clone();
            let show_resend = show_resend.clone();
            let loading = loading.clone();

            loading.set(true);
            error.set(None);

            spawn_local(async move {
                match auth::resend_confirmation(&email_val).await {
                    Ok(()) => {
                        notice.set(Some(
                            "New confirmation email sent! Check your inbox.".to_string(),
                        ));
                        show_resend.set(false);
                    }
                    Err(failure) => error.set(Some(failure.message)),
                }
                loading.set(false);
            });
        })
    };

    let toggle_mode = {
        let is_register = is_register.clone();
        let error = error.clone();
        let notice = notice.clone();
        let show_resend = show_resend.clone();
        Callback::from(move |_| {
            is_register.set(!*is_register);
            error.set(None);
            notice.set(None);
            show_resend.set(false);
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-slate-100">
            <div class="w-full max-w-md bg-white border border-slate-200 rounded-2xl shadow-lg p-8">
                <h1 class="text-2xl font-bold text-slate-800 text-center mb-6">
                    { if *is_register { "Register for Xpense" } else { "Login to Xpense" } }
                </h1>

                <form class="space-y-4" onsubmit={on_submit}>
                    <input
                        type="email"
                        placeholder="Email"
                        required={true}
                        class="w-full px-4 py-2 border border-slate-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                        value={(*email).clone()}
                        oninput={{
                            let email = email.clone();
                            Callback::from(move |e: InputEvent| {
                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                email.set(input.value());
                            })
                        }}
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        required={true}
                        class="w-full px-4 py-2 border border-slate-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                        value={(*password).clone()}
                        oninput={{
                            let password = password.clone();
                            Callback::from(move |e: InputEvent| {
                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                password.set(input.value());
                            })
                        }}
                    />

                    if let Some(msg) = &*error {
                        <p class="text-sm text-red-500">{ msg.clone() }</p>
                    }
                    if let Some(msg) = &*notice {
                        <p class="text-sm text-green-600">{ msg.clone() }</p>
                    }

                    <button
                        type="submit"
                        disabled={*loading}
                        class="w-full bg-blue-500 text-white py-2 rounded-lg font-semibold hover:bg-blue-600 transition-colors disabled:opacity-50"
                    >
                        { if *loading { "Please wait..." } else if *is_register { "Register" } else { "Login" } }
                    </button>
                </form>

                if *show_resend {
                    <button
                        onclick={on_resend}
                        disabled={*loading}
                        class="w-full mt-3 bg-amber-500 text-white py-2 rounded-lg font-semibold hover:bg-amber-600 transition-colors disabled:opacity-50"
                    >
                        {"Resend Confirmation Email"}
                    </button>
                }

                <p class="mt-6 text-center text-sm text-slate-500">
                    { if *is_register { "Already have an account?" } else { "Don't have an account?" } }
                    <button class="ml-2 text-blue-600 font-semibold" onclick={toggle_mode}>
                        { if *is_register { "Login" } else { "Register" } }
                    </button>
                </p>
            </div>
        </div>
    }
}
