//! Session state module

pub mod context;
pub mod guard;

pub use context::{
    use_is_authenticated, use_session, SessionAction, SessionContext, SessionContextData,
    SessionProvider,
};
pub use guard::RequireSession;
