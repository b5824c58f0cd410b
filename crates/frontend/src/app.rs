use crate::pages::{GalleryPage, LoginPage};
use crate::routes::Route;
use photovault_frontend_common::{RequireSession, SessionProvider};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <SessionProvider>
                <Switch<Route> render={switch} />
            </SessionProvider>
        </BrowserRouter>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Gallery => html! {
            <RequireSession<Route> login={Route::Login}>
                <GalleryPage />
            </RequireSession<Route>>
        },
        Route::Login => html! { <LoginPage /> },
        Route::NotFound => html! {
            <main class="min-h-screen flex items-center justify-center">
                <h1 class="text-xl text-gray-600">{"Page not found"}</h1>
            </main>
        },
    }
}
