//! Date and time differences over the proleptic Gregorian calendar,
//! with second counts carried in `biguint` values.

pub mod calendar;
pub mod config;
pub mod error;
pub mod input;
pub mod session;

pub use crate::config::Args;
pub use crate::input::{Clock, LocalClock, Timestamp};
pub use crate::session::Session;
