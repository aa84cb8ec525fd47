//! Profiler engine boundary
//!
//! The engine is host-agnostic: it talks to whatever server it runs in
//! exclusively through [`SparkPlugin`] and the small capability traits
//! below. A platform integration implements these; the engine consumes them.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::host::Task;
use crate::ids::LoaderId;
use crate::text::Component;

// ============================================================================
// Senders
// ============================================================================

/// Uniform view of whoever issued a command.
pub trait CommandSender: Send + Sync {
    fn name(&self) -> String;

    /// `None` for senders without a persistent identity (console, others).
    fn unique_id(&self) -> Option<Uuid>;

    fn send_message(&self, message: &Component);

    fn has_permission(&self, permission: &str) -> bool;
}

// ============================================================================
// Logging
// ============================================================================

/// Severity vocabulary the engine logs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Severe,
    Warning,
    Info,
    Config,
    Fine,
    Finer,
    Finest,
}

impl Level {
    pub fn name(self) -> &'static str {
        match self {
            Level::Severe => "SEVERE",
            Level::Warning => "WARNING",
            Level::Info => "INFO",
            Level::Config => "CONFIG",
            Level::Fine => "FINE",
            Level::Finer => "FINER",
            Level::Finest => "FINEST",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Raised when the engine logs at a level the platform has no mapping for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unsupported log level: {0}")]
pub struct UnsupportedLevel(pub Level);

// ============================================================================
// Platform metadata
// ============================================================================

/// Which side of the network the platform runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformType {
    Server,
    Client,
    Proxy,
}

/// Static description of the platform, embedded in every report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformInfo {
    #[serde(rename = "type")]
    pub platform_type: PlatformType,
    pub name: String,
    pub brand: String,
    pub version: String,
    pub minecraft_version: String,
}

/// A code source the engine can attribute frames to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceMetadata {
    pub name: String,
    pub version: String,
    /// Content checksum, empty when the platform cannot compute one.
    pub checksum: String,
}

impl SourceMetadata {
    /// Build metadata for each item, in iteration order.
    pub fn gather<T>(
        items: impl IntoIterator<Item = T>,
        name: impl Fn(&T) -> String,
        version: impl Fn(&T) -> String,
        checksum: impl Fn(&T) -> String,
    ) -> Vec<SourceMetadata> {
        items
            .into_iter()
            .map(|item| SourceMetadata {
                name: name(&item),
                version: version(&item),
                checksum: checksum(&item),
            })
            .collect()
    }
}

// ============================================================================
// Tick instrumentation
// ============================================================================

/// Called with the new tick number after each loop iteration.
pub type TickCallback = Arc<dyn Fn(u64) + Send + Sync>;

/// Called with the time elapsed since the previous loop iteration.
pub type TickReporterCallback = Arc<dyn Fn(Duration) + Send + Sync>;

/// Counts host loop iterations.
pub trait TickHook: Send + Sync {
    fn start(&self);

    fn close(&self);

    fn current_tick(&self) -> u64;

    fn add_callback(&self, callback: TickCallback);

    /// Unregister a callback previously passed to `add_callback`, matched by
    /// allocation. Returns false if it was not registered.
    fn remove_callback(&self, callback: &TickCallback) -> bool;
}

/// Publishes per-iteration timing to the engine.
pub trait TickReporter: Send + Sync {
    fn start(&self);

    fn close(&self);

    fn add_callback(&self, callback: TickReporterCallback);

    /// Unregister a callback previously passed to `add_callback`, matched by
    /// allocation. Returns false if it was not registered.
    fn remove_callback(&self, callback: &TickReporterCallback) -> bool;
}

// ============================================================================
// Enrichment providers
// ============================================================================

/// Player display name to round-trip latency in milliseconds.
///
/// Display names are not unique; on collision the later entry wins.
pub type LatencySnapshot = hashbrown::HashMap<String, i32>;

pub trait PlayerPingProvider: Send + Sync {
    fn poll(&self) -> LatencySnapshot;
}

/// Answers "which extension owns this code".
pub trait ClassSourceLookup: Send + Sync {
    /// `None` means no attribution is available; callers omit the origin.
    fn identify(&self, loader: LoaderId) -> Option<String>;
}

// ============================================================================
// Plugin / engine contract
// ============================================================================

/// Everything the engine needs from the platform it runs on.
pub trait SparkPlugin: Send + Sync {
    fn version(&self) -> String;

    fn plugin_directory(&self) -> &Path;

    fn command_name(&self) -> &str;

    /// Every sender that may receive broadcast output.
    fn command_senders(&self) -> Vec<Box<dyn CommandSender>>;

    fn execute_async(&self, task: Task);

    fn log(&self, level: Level, message: &str) -> Result<(), UnsupportedLevel>;

    fn platform_info(&self) -> PlatformInfo;

    fn create_class_source_lookup(&self) -> Box<dyn ClassSourceLookup>;

    fn known_sources(&self) -> Vec<SourceMetadata>;

    fn create_player_ping_provider(&self) -> Option<Box<dyn PlayerPingProvider>> {
        None
    }

    fn create_tick_hook(&self) -> Option<Box<dyn TickHook>> {
        None
    }

    fn create_tick_reporter(&self) -> Option<Box<dyn TickReporter>> {
        None
    }
}

/// The profiler engine as seen from the platform.
pub trait SparkEngine: Send + Sync {
    fn enable(&self) -> anyhow::Result<()>;

    fn disable(&self) -> anyhow::Result<()>;

    /// Run a command. Heavy work is the engine's to offload via
    /// [`SparkPlugin::execute_async`]; this must return promptly.
    fn execute_command(&self, sender: Box<dyn CommandSender>, args: Vec<String>);

    /// Completion candidates for a partially typed command, in display order.
    fn tab_complete(&self, sender: Box<dyn CommandSender>, args: Vec<String>) -> Vec<String>;
}
