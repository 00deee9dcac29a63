//! Custom command registry
//!
//! Maps a single-character id to a user callback and an optional label.
//! Entries keep registration order for the `@` listing; re-registering an
//! id replaces the callback in place. A registered id always pre-empts the
//! built-in with the same character.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Write;

use super::error::{CallbackError, RegistryError};

/// What a user callback returns: `Err` is caught at the dispatch boundary
/// and reported together with the command id.
pub type CallbackResult = Result<(), CallbackError>;

/// Boxed user callback: receives the trimmed value string and the console
/// output writer.
pub type CommandFn<'a> = Box<dyn FnMut(&str, &mut dyn Write) -> CallbackResult + 'a>;

struct Entry<'a> {
    id: char,
    callback: CommandFn<'a>,
    label: Option<&'static str>,
}

/// Insertion-ordered id-to-callback mapping.
pub struct CommandRegistry<'a> {
    entries: Vec<Entry<'a>>,
}

impl<'a> CommandRegistry<'a> {
    /// Create empty registry
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register `callback` under `id`.
    ///
    /// `id` must be exactly one character. Re-registering an id replaces
    /// the callback and label, keeping the entry's position.
    ///
    /// Ids are stored verbatim: dispatch upper-cases the incoming command
    /// character before lookup, so a lower-case registration is only
    /// reachable through [`lookup_mut`](Self::lookup_mut), not through
    /// normal command entry.
    pub fn register<F>(
        &mut self,
        id: &str,
        callback: F,
        label: Option<&'static str>,
    ) -> Result<(), RegistryError>
    where
        F: FnMut(&str, &mut dyn Write) -> CallbackResult + 'a,
    {
        let mut chars = id.chars();
        let id = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(RegistryError::NotSingleChar),
        };

        let callback: CommandFn<'a> = Box::new(callback);
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            log::debug!("replacing command '{id}'");
            entry.callback = callback;
            entry.label = label;
        } else {
            self.entries.push(Entry {
                id,
                callback,
                label,
            });
        }
        Ok(())
    }

    /// Callback registered under `id`, exact match.
    pub fn lookup_mut(&mut self, id: char) -> Option<&mut CommandFn<'a>> {
        self.entries
            .iter_mut()
            .find(|e| e.id == id)
            .map(|e| &mut e.callback)
    }

    /// Whether `id` is registered.
    pub fn contains(&self, id: char) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Registered ids with their labels, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (char, Option<&'static str>)> + '_ {
        self.entries.iter().map(|e| (e.id, e.label))
    }

    /// Number of registered commands
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CommandRegistry<'_> {
    fn default() -> Self {
        Self::new()
    }
}
