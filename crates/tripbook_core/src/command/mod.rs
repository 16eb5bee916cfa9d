//! User-intent commands executed against the model.
//!
//! # Responsibility
//! - Turn one user intent into model calls and a user-facing result.
//! - Keep command values comparable so translated commands can be checked
//!   without executing them.
//!
//! # Invariants
//! - Commands never keep a reference to the model past `execute`.
//! - Model errors are returned unchanged inside `CommandError::Model`.

use crate::book::error::ModelError;
use crate::book::manager::Model;
use crate::model::entity::EntityKind;
use crate::model::value::Index;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

pub mod add;
pub mod delete;
pub mod edit;
pub mod find;
pub mod general;
pub mod list;

pub type CommandOutcome = Result<CommandResult, CommandError>;

/// One executable user intent.
pub trait Command: Debug {
    fn execute(&self, model: &mut dyn Model) -> CommandOutcome;

    /// Whether a successful run changes master data and should be persisted.
    fn mutates_data(&self) -> bool {
        false
    }
}

/// Feedback plus presentation directives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    feedback: String,
    show_help: bool,
    exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: false,
        }
    }

    /// Result asking the presentation layer to show help.
    pub fn help(feedback: impl Into<String>) -> Self {
        Self {
            show_help: true,
            ..Self::new(feedback)
        }
    }

    /// Result asking the presentation layer to exit.
    pub fn exit(feedback: impl Into<String>) -> Self {
        Self {
            exit: true,
            ..Self::new(feedback)
        }
    }

    pub fn feedback(&self) -> &str {
        self.feedback.as_str()
    }

    pub fn is_show_help(&self) -> bool {
        self.show_help
    }

    pub fn is_exit(&self) -> bool {
        self.exit
    }
}

impl Display for CommandResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.feedback.as_str())
    }
}

/// Failure of one command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Model rejected the mutation.
    Model(ModelError),
    /// Index does not point into the displayed list.
    InvalidIndex { kind: EntityKind, index: Index },
    /// Edit descriptor carries no field.
    NothingToEdit,
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Model(err) => write!(f, "{err}"),
            Self::InvalidIndex { kind, index } => {
                write!(f, "The {kind} index provided is invalid: {index}")
            }
            Self::NothingToEdit => write!(f, "At least one field to edit must be provided."),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Model(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ModelError> for CommandError {
    fn from(value: ModelError) -> Self {
        Self::Model(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{CommandError, CommandResult};
    use crate::book::error::ModelError;
    use crate::model::entity::EntityKind;
    use crate::model::value::Index;
    use std::error::Error;

    #[test]
    fn result_directives_default_off() {
        let result = CommandResult::new("done");
        assert_eq!(result.feedback(), "done");
        assert!(!result.is_show_help());
        assert!(!result.is_exit());
        assert!(CommandResult::help("h").is_show_help());
        assert!(CommandResult::exit("bye").is_exit());
    }

    #[test]
    fn model_errors_display_unchanged() {
        let model_err = ModelError::DuplicateEntity {
            kind: EntityKind::Trip,
            key: "Bali".to_string(),
        };
        let err = CommandError::from(model_err.clone());
        assert_eq!(err.to_string(), model_err.to_string());
        assert!(err.source().is_some());
    }

    #[test]
    fn invalid_index_names_kind_and_position() {
        let err = CommandError::InvalidIndex {
            kind: EntityKind::Contact,
            index: Index::from_one_based(4).unwrap(),
        };
        assert_eq!(err.to_string(), "The contact index provided is invalid: 4");
    }
}
