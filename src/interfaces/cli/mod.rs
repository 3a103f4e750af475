pub mod args;
pub mod commands;
pub mod interactive;
pub mod render;

pub use commands::Outcome;
