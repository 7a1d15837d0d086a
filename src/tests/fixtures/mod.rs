pub mod publishers;
pub mod state;
