pub mod commands;
pub mod render;

pub use commands::{App, Cli, Command, TerminalNavigator};
