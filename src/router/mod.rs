pub mod guard;
pub mod route;

pub use guard::{evaluate, GuardOutcome};
pub use route::{role_home, Route};
