//! Interactive four-function calculator.
mod format;
mod input;
mod operation;
mod session;

pub use format::*;
pub use input::*;
pub use operation::*;
pub use session::*;
