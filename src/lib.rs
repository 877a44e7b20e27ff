//! blockdrop (workspace facade crate).
//!
//! Re-exports the member crates under `blockdrop::{core,input,term,types}` and
//! holds the client shell shared by the binary and the integration tests.

pub use blockdrop_core as core;
pub use blockdrop_input as input;
pub use blockdrop_term as term;
pub use blockdrop_types as types;

pub mod app;
pub mod config;
pub mod logging;

pub use app::{App, Presenter};
pub use config::{Config, ConfigError};
