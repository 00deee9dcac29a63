//! Commander error types

use alloc::string::String;

use thiserror::Error;

/// Failure raised inside a user-registered callback.
///
/// Carries a free-form description; the dispatcher reports it together with
/// the command id and keeps running.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct CallbackError(pub String);

impl CallbackError {
    /// Build from anything displayable.
    pub fn new(message: impl core::fmt::Display) -> Self {
        Self(alloc::format!("{message}"))
    }
}

impl From<&str> for CallbackError {
    fn from(message: &str) -> Self {
        Self(String::from(message))
    }
}

/// Per-command dispatch failure.
///
/// Always local: the commander reports the error as text on its output and
/// continues with the next line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    /// Value string of a set command did not parse as a number. The target
    /// field is left unchanged.
    #[error("invalid number")]
    InvalidNumber,

    /// No registered callback and no active built-in for this id.
    #[error("unknown command '{0}'")]
    UnknownCommand(char),

    /// A registered callback failed.
    #[error("command '{id}' failed: {source}")]
    Callback {
        id: char,
        #[source]
        source: CallbackError,
    },
}

/// Misuse of the registration API. Signaled immediately to the registering
/// caller, never deferred to dispatch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Command ids are exactly one character.
    #[error("command id must be a single character")]
    NotSingleChar,
}
