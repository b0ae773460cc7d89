//! Session model and access controllers for the LedgerDesk front-end.
//!
//! This crate owns the browser-independent pieces shared by `client` and
//! `server`: the session snapshot, the route access guard, the realtime
//! connection controller and the small lookups built on top of them. Nothing
//! here touches the DOM, so every controller is exercised by native tests.

pub mod config;
pub mod guard;
pub mod permissions;
pub mod provider;
pub mod realtime;
pub mod state;
pub mod token;

#[cfg(test)]
mod test_log;

pub use config::{AuthConfig, AuthMethod, ConfigError};
pub use guard::{AccessGuard, GuardPolicy, GuardState, GuardView, Router};
pub use provider::{SessionProvider, Subscription};
pub use realtime::{ConnectionStatus, RealtimeConnectionController, Transport};
pub use state::{Company, SessionState, User};
pub use token::{MemoryTokenStore, TokenStore};
