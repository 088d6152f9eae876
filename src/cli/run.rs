//! Dispatches to the appropriate command handler based on the parsed arguments.
//!
//! # Returns
//! - `Ok(CommandResult)` with the command summary and error count
//! - `Err` if the command fails (e.g., missing source file, invalid config)
use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, generate::generate, init::init},
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Generate(cmd)) => generate(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
