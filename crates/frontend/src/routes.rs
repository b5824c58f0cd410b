//! Application routes

use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Gallery,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}
