//! Command dispatch module.
//!
//! The presentation layer sends intents; the dispatcher turns them into
//! typed commands, applies them to the engine and hands back fresh views.

mod command;
mod dispatcher;

pub use command::{Command, Intent};
pub use dispatcher::{CommandDispatcher, Dispatched, Outcome};
