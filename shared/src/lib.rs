//! Shared contracts for running the spark profiler on Sculk.
//!
//! Two boundaries meet here:
//!
//! - [`host`] - what the Sculk server runtime provides (command sources,
//!   players, extensions, the command system, a task executor, a logger)
//! - [`platform`] - what the profiler engine expects from a platform
//!   integration (senders, tick hooks, ping polling, source lookup)
//!
//! The `spark-sculk` crate implements the second in terms of the first.

pub mod host;
pub mod ids;
pub mod platform;
pub mod text;

pub use host::{
    CommandHandler, CommandSource, Extension, ExtensionDescription, Player, PluginLogger, Server,
    SuggestionBuilder, Task, TaskExecutor,
};
pub use ids::{LoaderId, is_valid_command_name, simple_type_name};
pub use platform::{
    ClassSourceLookup, CommandSender, LatencySnapshot, Level, PlatformInfo, PlatformType,
    PlayerPingProvider, SourceMetadata, SparkEngine, SparkPlugin, TickCallback, TickHook,
    TickReporter, TickReporterCallback, UnsupportedLevel,
};
pub use text::{Component, NamedColor};
