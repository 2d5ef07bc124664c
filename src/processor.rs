//! Command parsing and dispatch
//!
//! One line of input in, a list of output lines and an exit flag out.
//! Nothing here prints; the interactive loop owns all output.

use crate::thing::dispatch::broadcast;
use crate::thing::registry::Registry;
use crate::thing::{Color, ThingKind};

pub const UNKNOWN_COMMAND: &str = "Unknown command";
pub const NONE_SUBSCRIBED: &str = "No things currently subscribed.";

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Subscribe(ThingKind),
    Unsubscribe(ThingKind),
    Broadcast(Color),
    List,
    Exit,
    Unknown(String),
}

impl Command {
    /// Parse a line. Returns `None` for blank input.
    ///
    /// Only the first whitespace-separated token matters. Only Salt can be
    /// subscribed or unsubscribed; `+frog` falls through to `Unknown`.
    pub fn parse(line: &str) -> Option<Self> {
        let token = line.split_whitespace().next()?.to_lowercase();

        let command = match token.as_str() {
            "+salt" => Self::Subscribe(ThingKind::Salt),
            "-salt" => Self::Unsubscribe(ThingKind::Salt),
            "list" => Self::List,
            "exit" => Self::Exit,
            other => match Color::from_str(other) {
                Some(color) => Self::Broadcast(color),
                None => Self::Unknown(other.to_string()),
            },
        };

        Some(command)
    }
}

/// Result of processing one line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub outputs: Vec<String>,
    pub should_exit: bool,
}

impl Outcome {
    fn say(message: impl Into<String>) -> Self {
        Self {
            outputs: vec![message.into()],
            should_exit: false,
        }
    }
}

/// Owns the registry and interprets commands against it
#[derive(Debug, Clone, Default)]
pub struct CommandProcessor {
    registry: Registry,
}

impl CommandProcessor {
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    #[cfg(test)]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn process(&mut self, line: &str) -> Outcome {
        let Some(command) = Command::parse(line) else {
            return Outcome::default();
        };

        log::debug!("Processing command: {:?}", command);

        match command {
            Command::Subscribe(kind) => self.subscribe(kind),
            Command::Unsubscribe(kind) => self.unsubscribe(kind),
            Command::Broadcast(color) => Outcome {
                outputs: broadcast(color, self.registry.observers()),
                should_exit: false,
            },
            Command::List => self.list(),
            Command::Exit => {
                log::debug!("Subscribed at exit: {:?}", self.registry.subscribed_names());
                Outcome {
                    outputs: Vec::new(),
                    should_exit: true,
                }
            }
            Command::Unknown(token) => {
                log::debug!("Unknown command token: {}", token);
                Outcome::say(UNKNOWN_COMMAND)
            }
        }
    }

    fn subscribe(&mut self, kind: ThingKind) -> Outcome {
        match self.registry.set_subscribed(kind.key(), true) {
            Some(name) => Outcome::say(format!("Subscribed {} for notifications.", name)),
            None => Outcome::default(),
        }
    }

    fn unsubscribe(&mut self, kind: ThingKind) -> Outcome {
        match self.registry.set_subscribed(kind.key(), false) {
            Some(name) => Outcome::say(format!("Unsubscribed {} from notifications.", name)),
            None => Outcome::default(),
        }
    }

    fn list(&self) -> Outcome {
        let names = self.registry.subscribed_names();
        if names.is_empty() {
            Outcome::say(NONE_SUBSCRIBED)
        } else {
            Outcome::say(format!("Subscribed things: {}", names.join(", ")))
        }
    }
}
