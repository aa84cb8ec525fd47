//! Sculk server runtime boundary
//!
//! These traits are implemented by the host server. The platform adapter
//! only ever reads through them; it never owns or mutates host state.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ids::{LoaderId, simple_type_name};
use crate::text::Component;

/// Anything that can issue a command and receive chat messages.
pub trait CommandSource: Send + Sync {
    /// Deliver a message. The host decides when it actually reaches the client.
    fn send_message(&self, message: &Component);

    /// Check a permission node against the host's permission system.
    fn has_permission(&self, permission: &str) -> bool;

    /// Downcast to a connected player, if this source is one.
    fn as_player(&self) -> Option<&dyn Player> {
        None
    }

    /// Short name of the concrete source type, used for senders the
    /// platform does not recognise.
    fn type_name(&self) -> &'static str {
        simple_type_name(std::any::type_name::<Self>())
    }
}

/// A connected player.
pub trait Player: CommandSource {
    fn name(&self) -> &str;

    fn unique_id(&self) -> Uuid;

    /// Last measured round-trip latency in milliseconds, maintained by the host.
    fn ping(&self) -> i32;
}

/// Name and version declared by a loaded extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionDescription {
    pub name: String,
    pub version: String,
}

impl ExtensionDescription {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// A dynamically loaded unit of server functionality.
pub trait Extension: Send + Sync {
    fn description(&self) -> &ExtensionDescription;

    /// The loading context this extension's code lives in.
    fn loader(&self) -> LoaderId;
}

/// Collects tab-completion candidates for the host's command system.
pub trait SuggestionBuilder {
    fn suggest(&mut self, text: &str);
}

impl SuggestionBuilder for Vec<String> {
    fn suggest(&mut self, text: &str) {
        self.push(text.to_string());
    }
}

/// A top-level command registered with the host.
///
/// `input` is the full command line as typed, including the command
/// keyword (with or without a leading `/`).
pub trait CommandHandler: Send + Sync {
    fn execute(&self, source: Arc<dyn CommandSource>, input: &str);

    fn suggest(
        &self,
        source: Arc<dyn CommandSource>,
        input: &str,
        builder: &mut dyn SuggestionBuilder,
    );
}

/// The running server.
pub trait Server: Send + Sync {
    /// Server implementation version.
    fn version(&self) -> String;

    /// Game protocol version the server speaks.
    fn minecraft_version(&self) -> String;

    /// The singleton console source. Always the same allocation.
    fn console_command_source(&self) -> Arc<dyn CommandSource>;

    /// Players connected right now.
    fn online_players(&self) -> Vec<Arc<dyn Player>>;

    fn player_count(&self) -> usize {
        self.online_players().len()
    }

    /// Extensions loaded right now.
    fn extensions(&self) -> Vec<Arc<dyn Extension>>;

    /// Register a top-level command. `name` has no leading slash.
    fn register_command(&self, name: &str, handler: Arc<dyn CommandHandler>);
}

/// A unit of fire-and-forget background work.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Background executor supplied by the host.
///
/// There is no result channel and no cancellation: once accepted, a task
/// runs to completion or fails on its own.
pub trait TaskExecutor: Send + Sync {
    fn execute(&self, task: Task);
}

/// Logger the host hands to each plugin.
pub trait PluginLogger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}
