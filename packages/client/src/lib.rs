pub mod cli_args;
pub mod command;
pub mod console;
pub mod session;
