pub mod add;
pub mod agenda;
pub mod calculator;
pub mod del;
pub mod edit;
pub mod import;
pub mod log;
pub mod title;
