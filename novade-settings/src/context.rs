//! Interfaces to the collaborators the registry calls into.
//!
//! The menu layer drives settings through [`ActionContext`], which carries the
//! wraparound policy for numeric edits and optional access to the command
//! dispatcher and the input-binding subsystem. Neither collaborator is owned
//! by the registry; the caller lends them for the duration of one action.

use std::fmt;

use crate::config::RegistryConfig;
use crate::setting::{Keybind, Setting};

/// Identifier of an application command fired by OK on a setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandEvent(pub u32);

impl fmt::Display for CommandEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cmd#{}", self.0)
    }
}

/// Executes application commands.
pub trait CommandDispatcher {
    /// Runs `event` immediately. Returns `false` if the command failed.
    fn dispatch(&mut self, event: CommandEvent) -> bool;
}

/// The input-binding subsystem as seen by Bind-kind settings.
pub trait InputBindings {
    /// Default binding table for player one (`rest_of_players == false`) or
    /// for every other player.
    fn default_binds(&self, rest_of_players: bool) -> &[Keybind];

    /// Binding supplied by an auto-configured device on `port` for the
    /// logical action `id`, if any.
    fn auto_bind(&self, port: u32, id: u32) -> Option<Keybind>;

    /// Formats a binding for display, falling back to `auto_bind` for the
    /// joypad half when the user has not bound one.
    fn bind_to_string(&self, bind: &Keybind, auto_bind: Option<&Keybind>) -> String;

    /// Starts capturing a single new binding for `setting`. Returns `false`
    /// if the capture could not be started.
    fn bind_single(&mut self, setting: &Setting) -> bool;
}

/// Everything an action handler may need beyond the setting itself.
pub struct ActionContext<'a> {
    /// When `true`, stepping past `max` wraps to `min` instead of clamping.
    pub wraparound: bool,
    commands: Option<&'a mut dyn CommandDispatcher>,
    input: Option<&'a mut dyn InputBindings>,
}

impl<'a> ActionContext<'a> {
    pub fn new(wraparound: bool) -> Self {
        Self {
            wraparound,
            commands: None,
            input: None,
        }
    }

    /// Builds a context whose wraparound policy comes from the navigation
    /// section of the registry configuration.
    pub fn from_config(config: &RegistryConfig) -> Self {
        Self::new(config.wraparound())
    }

    pub fn with_commands(mut self, commands: &'a mut dyn CommandDispatcher) -> Self {
        self.commands = Some(commands);
        self
    }

    pub fn with_input(mut self, input: &'a mut dyn InputBindings) -> Self {
        self.input = Some(input);
        self
    }

    pub fn commands(&mut self) -> Option<&mut (dyn CommandDispatcher + 'a)> {
        self.commands.as_deref_mut()
    }

    pub fn input(&self) -> Option<&(dyn InputBindings + 'a)> {
        self.input.as_deref()
    }

    pub fn input_mut(&mut self) -> Option<&mut (dyn InputBindings + 'a)> {
        self.input.as_deref_mut()
    }
}

impl fmt::Debug for ActionContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionContext")
            .field("wraparound", &self.wraparound)
            .field("commands", &self.commands.is_some())
            .field("input", &self.input.is_some())
            .finish()
    }
}
