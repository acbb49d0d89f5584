pub mod room;
pub mod user;
