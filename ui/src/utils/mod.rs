pub mod date;
pub mod link;

pub use date::{format_date, format_local_date, time_since, time_since_now, to_date};
pub use link::is_valid_link;
