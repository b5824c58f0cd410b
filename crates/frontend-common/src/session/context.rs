//! Global session context and provider

use crate::client::set_session_token;
use crate::config::SessionConfig;
use crate::cookies;
use crate::services::session::{SessionService, SessionStatus};
use std::rc::Rc;
use yew::prelude::*;

/// Session context data
#[derive(Clone, Debug, PartialEq)]
pub struct SessionContextData {
    /// Whether the stored session token was accepted by the backend
    pub is_authenticated: bool,
    /// True while the mount-time validation round trip is in flight
    pub is_checking: bool,
    pub error: Option<String>,
}

/// Session context actions
pub enum SessionAction {
    /// A login completed with the given session token
    Login(String),
    /// User-initiated logout
    Logout,
    /// No token cookie was found
    SessionAbsent,
    /// The stored token was accepted by the backend
    SessionValid,
    /// The stored token was rejected (the cookie is already cleared)
    SessionRejected,
    /// The validation endpoint could not be reached
    SessionUnreachable,
}

/// Session context
pub type SessionContext = UseReducerHandle<SessionContextData>;

impl Default for SessionContextData {
    fn default() -> Self {
        Self {
            is_authenticated: false,
            is_checking: true, // Start checking; the provider validates on mount
            error: None,
        }
    }
}

impl Reducible for SessionContextData {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::Login(token) => {
                // Persist the token and install it on the shared client
                cookies::set(SessionConfig::SESSION_COOKIE, &token);
                let _ = set_session_token(Some(&token));

                Rc::new(Self {
                    is_authenticated: true,
                    is_checking: false,
                    error: None,
                })
            }
            SessionAction::Logout => {
                cookies::remove(SessionConfig::SESSION_COOKIE);
                let _ = set_session_token(None);

                Rc::new(Self {
                    is_authenticated: false,
                    is_checking: false,
                    error: None,
                })
            }
            SessionAction::SessionAbsent => Rc::new(Self {
                is_authenticated: false,
                is_checking: false,
                error: None,
            }),
            SessionAction::SessionValid => Rc::new(Self {
                is_authenticated: true,
                is_checking: false,
                error: None,
            }),
            SessionAction::SessionRejected => {
                let _ = set_session_token(None);

                Rc::new(Self {
                    is_authenticated: false,
                    is_checking: false,
                    error: Some("Your session has expired. Please log in again.".to_string()),
                })
            }
            SessionAction::SessionUnreachable => Rc::new(Self {
                is_authenticated: false,
                is_checking: false,
                error: Some("Could not reach the server to check your session.".to_string()),
            }),
        }
    }
}

/// Session provider props
#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Session provider component
///
/// Validates the stored token once on mount and exposes the resulting flag
/// through the context. Navigation stays out of here; `RequireSession`
/// decides where unauthenticated visitors go.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer(SessionContextData::default);

    {
        let session = session.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let status = SessionService::new().validate_stored().await;
                let action = match status {
                    SessionStatus::Missing => SessionAction::SessionAbsent,
                    SessionStatus::Valid => SessionAction::SessionValid,
                    SessionStatus::Rejected => SessionAction::SessionRejected,
                    SessionStatus::Unreachable => SessionAction::SessionUnreachable,
                };
                session.dispatch(action);
            });
            || ()
        });
    }

    html! {
        <ContextProvider<SessionContext> context={session}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

/// Hook to use session context
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Make sure to wrap your component with SessionProvider")
}

/// Hook to check if authenticated
#[hook]
pub fn use_is_authenticated() -> bool {
    let session = use_session();
    session.is_authenticated
}
