//! Static, read-only lookup tables.

pub mod age;
pub mod holidays;
pub mod medals;
pub mod saints;
pub mod wedding;
