pub mod client;
pub mod components;
pub mod config;
pub mod cookies;
pub mod services;
pub mod session;

pub use client::{create_public_client, create_session_client, set_session_token};
pub use components::Spinner;
pub use config::SessionConfig;
pub use session::context::{
    use_is_authenticated, use_session, SessionAction, SessionContext, SessionProvider,
};
pub use session::guard::RequireSession;
