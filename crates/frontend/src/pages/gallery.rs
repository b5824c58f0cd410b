//! Gallery page (guarded)

use crate::routes::Route;
use photovault_frontend_common::{use_session, SessionAction};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(GalleryPage)]
pub fn gallery_page() -> Html {
    let session = use_session();
    let navigator = use_navigator();

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_| {
            session.dispatch(SessionAction::Logout);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    html! {
        <main class="min-h-screen bg-gray-50">
            <header class="bg-white shadow flex items-center justify-between px-6 py-4">
                <h1 class="text-xl font-semibold">{"Photovault"}</h1>
                <button
                    class="text-sm text-gray-600 hover:text-gray-900"
                    onclick={on_logout}
                >
                    {"Sign out"}
                </button>
            </header>
            <section class="p-6">
                <p class="text-gray-600">{"Your archive is empty. Connect a photo source to get started."}</p>
            </section>
        </main>
    }
}
