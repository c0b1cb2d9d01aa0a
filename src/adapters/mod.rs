pub mod display;
pub mod pulse;
pub mod window;
