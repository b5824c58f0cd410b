pub mod session;

pub use session::{SessionService, SessionStatus};
