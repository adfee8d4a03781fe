pub mod commands;
pub mod config;
pub mod fs;
pub mod output;
pub mod session;
