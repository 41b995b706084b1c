//! External process services.

pub mod process;

pub use process::{CommandOutcome, CommandRunner, Invocation, SystemRunner};
