//! Countdown calculator: pure functions from (event, today) to facts.

pub mod countdown;
pub mod memorial;
pub mod occurrence;
pub mod retirement;

pub use countdown::{compute, compute_event};
