//! Grant Flows
//!
//! One module per standardized grant, each owning its request encoders and,
//! for the user-agent-routed grants, its redirect-URI response decoders.
//! Token-endpoint JSON responses are shared across grants and live in
//! `crate::token`.

pub mod authorization_code;
pub mod client_credentials;
pub mod implicit;
pub mod password;
pub mod refresh;
