pub mod career;
pub mod countdown;
pub mod event;
pub mod event_type;
pub mod record;
