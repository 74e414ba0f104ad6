//! Game logic for litgrid: a square board whose cells light up one by one at a pace set by the difficulty mode.
//!
//! Nothing in here touches a browser, a clock or a timer. [`GameMachine`] describes the timer it needs through
//! [`GameMachine::schedule`] and the host calls back into it.

pub use error::*;
pub use grid::*;
pub use machine::*;
pub use mode::*;
pub use picker::*;
pub use session::*;
pub use types::*;

mod error;
mod grid;
mod machine;
mod mode;
mod picker;
mod session;
mod types;
