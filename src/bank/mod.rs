//! Banking module for accounts, scripted commands, and the ledger state that applies them.
mod account;
mod command;
mod demo;
mod script;
mod state;
mod types;

pub use account::*;
pub use command::*;
pub use demo::*;
pub use script::*;
pub use state::*;
pub use types::*;
