//! Request and response shapes shared between the Roster crates.

pub mod params;
pub mod views;
