pub mod input;
pub mod timefmt;
pub mod timer;
