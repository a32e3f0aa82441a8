//! CLI command implementations.
//!
//! Commands implement the [`Command`] trait and are routed by
//! [`CommandDispatcher`]. The binary has one command, the verification run.

pub mod dispatcher;
pub mod verify;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use verify::VerifyCommand;
