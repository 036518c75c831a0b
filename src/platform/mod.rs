//! Collaborators injected into the event client: configuration, device
//! details, sessions, and the context that bundles them.

pub mod configuration;
pub mod context;
pub mod session;
pub mod system;
pub mod time;
