//! CLI module graph.

pub mod analyze;
pub mod command;
pub mod config;
pub mod diagnostic;
pub mod evaluate;
pub mod output;
pub mod paths;
pub mod run;
pub mod stop;
pub mod trades;
