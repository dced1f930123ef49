//! Login view state: validation, lockout, notifications and the submission
//! state machine. Nothing in here touches the DOM or a timer; operations
//! return [`Command`]s that the view binding carries out.

pub use alerts::*;
pub use commands::*;
pub use controller::*;
pub use lockout::*;
pub use policy::*;
pub use validator::*;

mod alerts;
mod commands;
mod controller;
mod lockout;
mod policy;
mod validator;
