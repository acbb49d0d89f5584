pub mod errors;
pub mod expander;
pub mod models;
pub mod template;
pub mod time_of_day;
pub mod weekday;
