//! Input parameters for the various functions within Roster.

mod user;
pub use user::*;
