//! spark for Sculk - profiler platform integration
//!
//! This crate plugs the spark profiler engine into a Sculk server. The host
//! owns the game loop, the player list and the command system; the engine
//! owns sampling and reporting. Everything here is glue between the two.
//!
//! # Architecture
//!
//! - [`SculkSparkPlugin`] - The plugin object handed to the engine; owns
//!   lifecycle, logging and background execution
//! - [`CommandRouter`] - Routes `spark ...` / `/spark ...` lines into the
//!   engine held in the shared [`EngineSlot`]
//! - [`SculkCommandSender`] - A host command source in the engine's sender view
//! - [`TickInstrumentation`] - Tick counter and tick duration reporter driven
//!   by the host loop
//! - [`SculkPlayerPingProvider`] - Per-player latency snapshots
//! - [`SculkClassSourceLookup`] - Attributes loading contexts to extensions

pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod ping;
pub mod plugin;
pub mod sender;
pub mod source;
#[cfg(test)]
pub mod test_utils;
pub mod tick;

pub use command::{CommandRouter, Invocation, InvocationMode, RouteResult};
pub use config::SparkConfig;
pub use engine::EngineSlot;
pub use error::{ConfigError, PlatformError, UnsupportedLevel};
pub use ping::SculkPlayerPingProvider;
pub use plugin::{SculkSparkPlugin, TokioExecutor, TracingLogger};
pub use sender::{SculkCommandSender, SenderFactory, SenderIdentity, UNKNOWN_SENDER_PREFIX};
pub use source::SculkClassSourceLookup;
pub use tick::{SculkTickHook, SculkTickReporter, TickInstrumentation};

// Re-export the boundary contracts so hosts need only one dependency
pub use spark_shared;
