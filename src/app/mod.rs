pub mod cli;
pub mod commands;
pub mod config;
mod context;
pub mod logging;

pub use context::AppContext;
