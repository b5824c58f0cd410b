//! Session guard component for protected routes

use crate::components::Spinner;
use crate::session::context::use_session;
use yew::prelude::*;
use yew_router::prelude::*;

/// Props for the session guard
#[derive(Properties, PartialEq)]
pub struct RequireSessionProps<R>
where
    R: Routable + 'static,
{
    /// Route unauthenticated visitors are sent to
    pub login: R,
    pub children: Children,
}

/// Guard that redirects unauthenticated visitors to the login route
///
/// While the provider's mount-time check is in flight a spinner is shown;
/// once the session is known to be invalid the visitor is pushed to the
/// login route of the surrounding router.
#[function_component]
pub fn RequireSession<R>(props: &RequireSessionProps<R>) -> Html
where
    R: Routable + 'static,
{
    let session = use_session();
    let navigator = use_navigator();

    {
        let login = props.login.clone();
        use_effect_with(
            (session.is_authenticated, session.is_checking),
            move |(is_authenticated, is_checking): &(bool, bool)| {
                if !*is_checking && !*is_authenticated {
                    if let Some(navigator) = navigator {
                        navigator.push(&login);
                    }
                }
                || ()
            },
        );
    }

    if session.is_checking {
        return html! {
            <Spinner text={"Checking your session...".to_string()} />
        };
    }

    if session.is_authenticated {
        return html! { <>{ props.children.clone() }</> };
    }

    // Redirect dispatched above; render nothing in the meantime
    html! {}
}
