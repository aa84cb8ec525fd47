//! Command sender adaptation
//!
//! Wraps a host [`CommandSource`] in the engine's [`CommandSender`] view.
//! Which kind of source it is gets decided once, at construction, and is
//! kept as a [`SenderIdentity`] so every accessor is a plain match.

use std::sync::Arc;

use spark_shared::{CommandSender, CommandSource, Component, Server};
use uuid::Uuid;

#[cfg(test)]
mod tests;

/// Prefix for senders the platform does not recognise.
pub const UNKNOWN_SENDER_PREFIX: &str = "unknown:";

/// What kind of source issued a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SenderIdentity {
    /// A connected player
    Player { name: String, unique_id: Uuid },
    /// The server's singleton console
    Console,
    /// Anything else (RCON bridges, other plugins' synthetic sources, ...)
    Unknown { type_name: &'static str },
}

impl SenderIdentity {
    /// Classify `source` against the server's console.
    pub fn of(server: &dyn Server, source: &Arc<dyn CommandSource>) -> Self {
        if let Some(player) = source.as_player() {
            return SenderIdentity::Player {
                name: player.name().to_string(),
                unique_id: player.unique_id(),
            };
        }

        let console = server.console_command_source();
        if is_same_source(source, &console) {
            SenderIdentity::Console
        } else {
            SenderIdentity::Unknown {
                type_name: source.type_name(),
            }
        }
    }
}

/// Identity comparison on the underlying allocation, ignoring vtables.
fn is_same_source(a: &Arc<dyn CommandSource>, b: &Arc<dyn CommandSource>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

/// A host command source seen through the engine's sender interface.
///
/// Read-through: messages and permission checks go straight to the wrapped
/// source, nothing is buffered or transformed.
pub struct SculkCommandSender {
    source: Arc<dyn CommandSource>,
    identity: SenderIdentity,
    console_name: Arc<str>,
}

impl SculkCommandSender {
    /// Wrap `source`, labelling the console "Console".
    pub fn new(server: &dyn Server, source: Arc<dyn CommandSource>) -> Self {
        Self::with_console_name(server, source, Arc::from("Console"))
    }

    pub fn with_console_name(
        server: &dyn Server,
        source: Arc<dyn CommandSource>,
        console_name: Arc<str>,
    ) -> Self {
        let identity = SenderIdentity::of(server, &source);
        Self {
            source,
            identity,
            console_name,
        }
    }

    pub fn identity(&self) -> &SenderIdentity {
        &self.identity
    }

    pub fn source(&self) -> &Arc<dyn CommandSource> {
        &self.source
    }
}

impl CommandSender for SculkCommandSender {
    fn name(&self) -> String {
        match &self.identity {
            SenderIdentity::Player { name, .. } => name.clone(),
            SenderIdentity::Console => self.console_name.to_string(),
            SenderIdentity::Unknown { type_name } => {
                format!("{UNKNOWN_SENDER_PREFIX}{type_name}")
            }
        }
    }

    fn unique_id(&self) -> Option<Uuid> {
        match &self.identity {
            SenderIdentity::Player { unique_id, .. } => Some(*unique_id),
            SenderIdentity::Console | SenderIdentity::Unknown { .. } => None,
        }
    }

    fn send_message(&self, message: &Component) {
        self.source.send_message(message);
    }

    fn has_permission(&self, permission: &str) -> bool {
        self.source.has_permission(permission)
    }
}

/// Builds senders for one server with a fixed console label.
#[derive(Clone)]
pub struct SenderFactory {
    server: Arc<dyn Server>,
    console_name: Arc<str>,
}

impl SenderFactory {
    pub fn new(server: Arc<dyn Server>, console_name: impl Into<Arc<str>>) -> Self {
        Self {
            server,
            console_name: console_name.into(),
        }
    }

    pub fn wrap(&self, source: Arc<dyn CommandSource>) -> SculkCommandSender {
        SculkCommandSender::with_console_name(
            self.server.as_ref(),
            source,
            Arc::clone(&self.console_name),
        )
    }

    /// Every online player followed by the console.
    pub fn all(&self) -> Vec<SculkCommandSender> {
        let players = self.server.online_players();
        let mut senders = Vec::with_capacity(players.len() + 1);
        for player in players {
            let source: Arc<dyn CommandSource> = player;
            senders.push(self.wrap(source));
        }
        senders.push(self.wrap(self.server.console_command_source()));
        senders
    }

    pub fn server(&self) -> &Arc<dyn Server> {
        &self.server
    }
}
