pub mod room;
pub mod slot;
