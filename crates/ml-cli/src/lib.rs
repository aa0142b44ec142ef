pub mod commands;
pub mod input;
