//! Login page

use crate::routes::Route;
use photovault_frontend_common::services::SessionService;
use photovault_frontend_common::{use_is_authenticated, use_session, SessionAction};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session = use_session();
    let is_authenticated = use_is_authenticated();
    let navigator = use_navigator();

    // Already signed in; nothing to do here
    {
        let navigator = navigator.clone();
        use_effect_with(is_authenticated, move |authenticated| {
            if *authenticated {
                if let Some(navigator) = navigator {
                    navigator.push(&Route::Gallery);
                }
            }
            || ()
        });
    }

    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let is_submitting = use_state(|| false);

    let on_username_input = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let onsubmit = {
        let session = session.clone();
        let navigator = navigator.clone();
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let is_submitting = is_submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let session = session.clone();
            let navigator = navigator.clone();
            let username = (*username).clone();
            let password = (*password).clone();
            let error = error.clone();
            let is_submitting = is_submitting.clone();

            is_submitting.set(true);
            error.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                match SessionService::new().login(username, password).await {
                    Ok(token) => {
                        session.dispatch(SessionAction::Login(token));
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Gallery);
                        }
                    }
                    Err(message) => {
                        error.set(Some(message));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    html! {
        <main class="min-h-screen bg-gray-50 flex items-center justify-center">
            <form class="bg-white rounded-lg shadow p-8 w-full max-w-sm" {onsubmit}>
                <h1 class="text-2xl font-semibold mb-6">{"Sign in to Photovault"}</h1>

                if let Some(message) = &session.error {
                    <p class="text-amber-600 text-sm mb-4">{message}</p>
                }
                if let Some(message) = &*error {
                    <p class="text-red-600 text-sm mb-4">{message}</p>
                }

                <label class="block mb-4">
                    <span class="text-sm text-gray-700">{"Username"}</span>
                    <input
                        type="text"
                        class="mt-1 block w-full rounded border-gray-300"
                        value={(*username).clone()}
                        oninput={on_username_input}
                        disabled={*is_submitting}
                    />
                </label>

                <label class="block mb-6">
                    <span class="text-sm text-gray-700">{"Password"}</span>
                    <input
                        type="password"
                        class="mt-1 block w-full rounded border-gray-300"
                        value={(*password).clone()}
                        oninput={on_password_input}
                        disabled={*is_submitting}
                    />
                </label>

                <button
                    type="submit"
                    class="w-full bg-blue-600 text-white rounded py-2 disabled:opacity-50"
                    disabled={*is_submitting}
                >
                    { if *is_submitting { "Signing in..." } else { "Sign in" } }
                </button>
            </form>
        </main>
    }
}
