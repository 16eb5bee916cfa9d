//! Commands that do not address a single entity.

use crate::book::manager::Model;
use crate::command::{Command, CommandOutcome, CommandResult};

/// Removes every contact and trip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearCommand;

impl ClearCommand {
    pub const MESSAGE_SUCCESS: &'static str = "Address book has been cleared!";
}

impl Command for ClearCommand {
    fn execute(&self, model: &mut dyn Model) -> CommandOutcome {
        model.clear();
        Ok(CommandResult::new(Self::MESSAGE_SUCCESS))
    }

    fn mutates_data(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HelpCommand;

impl HelpCommand {
    pub const MESSAGE_SUCCESS: &'static str = "Opened help window.";
}

impl Command for HelpCommand {
    fn execute(&self, _model: &mut dyn Model) -> CommandOutcome {
        Ok(CommandResult::help(Self::MESSAGE_SUCCESS))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExitCommand;

impl ExitCommand {
    pub const MESSAGE_SUCCESS: &'static str = "Exiting Address Book as requested ...";
}

impl Command for ExitCommand {
    fn execute(&self, _model: &mut dyn Model) -> CommandOutcome {
        Ok(CommandResult::exit(Self::MESSAGE_SUCCESS))
    }
}
