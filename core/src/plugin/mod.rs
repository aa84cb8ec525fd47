//! The spark plugin for Sculk
//!
//! [`SculkSparkPlugin`] is the object the engine talks to. It owns the
//! platform-side pieces (sender factory, tick instrumentation, logger and
//! executor) and exposes them through [`SparkPlugin`].
//!
//! # Lifecycle
//!
//! ```text
//! new() -> on_initialize(factory) -> on_server_tick()* -> on_shutdown()
//! ```
//!
//! `on_initialize` builds the engine, enables it and publishes it in the
//! [`EngineSlot`]. The command router is registered with the host on the
//! first successful initialization and reads the same slot, so after a
//! shutdown and re-initialization commands reach the new engine. The engine
//! keeps a handle to the plugin; `on_shutdown` empties the slot, which
//! releases the platform's references to the engine.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Context;
use spark_shared::{
    ClassSourceLookup, CommandSender, Extension, Level, PlatformInfo, PlatformType,
    PlayerPingProvider, PluginLogger, Server, SourceMetadata, SparkEngine, SparkPlugin, Task,
    TaskExecutor, TickHook, TickReporter, UnsupportedLevel,
};

use crate::command::CommandRouter;
use crate::config::SparkConfig;
use crate::engine::EngineSlot;
use crate::error::PlatformError;
use crate::ping::SculkPlayerPingProvider;
use crate::sender::SenderFactory;
use crate::source::SculkClassSourceLookup;
use crate::tick::TickInstrumentation;

mod executor;
mod logger;


pub use executor::TokioExecutor;
pub use logger::TracingLogger;

/// spark running as a Sculk extension.
pub struct SculkSparkPlugin {
    server: Arc<dyn Server>,
    config: SparkConfig,
    version: String,
    data_dir: PathBuf,
    executor: Arc<dyn TaskExecutor>,
    logger: Arc<dyn PluginLogger>,
    senders: SenderFactory,
    ticks: TickInstrumentation,
    engine: EngineSlot,
    registered: AtomicBool,
}

impl SculkSparkPlugin {
    /// Create the plugin. Nothing is registered with the host until
    /// [`on_initialize`](Self::on_initialize).
    pub fn new(
        server: Arc<dyn Server>,
        config: SparkConfig,
        version: impl Into<String>,
        data_dir: impl Into<PathBuf>,
        executor: Arc<dyn TaskExecutor>,
    ) -> Self {
        let senders = SenderFactory::new(Arc::clone(&server), config.console_name.as_str());
        Self {
            server,
            config,
            version: version.into(),
            data_dir: data_dir.into(),
            executor,
            logger: Arc::new(TracingLogger::new("spark")),
            senders,
            ticks: TickInstrumentation::new(),
            engine: EngineSlot::new(),
            registered: AtomicBool::new(false),
        }
    }

    /// Replace the default `tracing` logger with the host's plugin logger.
    pub fn with_logger(mut self, logger: Arc<dyn PluginLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn config(&self) -> &SparkConfig {
        &self.config
    }

    pub fn ticks(&self) -> &TickInstrumentation {
        &self.ticks
    }

    pub fn is_enabled(&self) -> bool {
        self.engine.is_set()
    }

    /// The running engine, if enabled.
    pub fn engine(&self) -> Option<Arc<dyn SparkEngine>> {
        self.engine.get()
    }

    /// Build and enable the engine, then make it reachable through the
    /// command router.
    ///
    /// No lock is held while the factory and `enable` run; both may call
    /// back into the plugin.
    ///
    /// # Errors
    ///
    /// Fails if the plugin is already enabled, the configuration is
    /// invalid, or the engine cannot be built or enabled. On failure the
    /// slot stays empty and no command is registered.
    pub fn on_initialize(
        self: &Arc<Self>,
        factory: impl FnOnce(Arc<dyn SparkPlugin>) -> anyhow::Result<Arc<dyn SparkEngine>>,
    ) -> anyhow::Result<()> {
        if self.engine.is_set() {
            return Err(PlatformError::AlreadyEnabled.into());
        }
        self.config.validate()?;

        let plugin: Arc<dyn SparkPlugin> = Arc::clone(self) as Arc<dyn SparkPlugin>;
        let engine = factory(plugin).context("Failed to create spark engine")?;
        engine.enable().context("Failed to enable spark engine")?;

        // A concurrent initialization may have won while this engine was built
        if let Err(surplus) = self.engine.try_set(engine) {
            if let Err(err) = surplus.disable() {
                tracing::warn!("Failed to disable surplus spark engine: {err:#}");
            }
            return Err(PlatformError::AlreadyEnabled.into());
        }

        let command = self.config.command_name.as_str();
        if !self.registered.swap(true, Ordering::AcqRel) {
            let router = CommandRouter::new(command, self.engine.clone(), self.senders.clone());
            self.server.register_command(command, Arc::new(router));
        }
        tracing::info!(
            "spark {} enabled on {} (command: /{})",
            self.version,
            self.config.platform_name,
            command
        );
        Ok(())
    }

    /// Disable the engine and release it. The registered command stays and
    /// declines input until the next `on_initialize`.
    ///
    /// # Errors
    ///
    /// Fails if the plugin was never enabled or the engine fails to shut
    /// down. The engine is released either way.
    pub fn on_shutdown(&self) -> anyhow::Result<()> {
        let engine = self.engine.take().ok_or(PlatformError::NotEnabled)?;
        engine.disable().context("Failed to disable spark engine")?;
        tracing::info!("spark disabled");
        Ok(())
    }

    /// Call once per completed server tick, on the main thread.
    pub fn on_server_tick(&self) {
        self.ticks.on_tick();
    }
}

impl SparkPlugin for SculkSparkPlugin {
    fn version(&self) -> String {
        self.version.clone()
    }

    fn plugin_directory(&self) -> &Path {
        &self.data_dir
    }

    fn command_name(&self) -> &str {
        &self.config.command_name
    }

    fn command_senders(&self) -> Vec<Box<dyn CommandSender>> {
        self.senders
            .all()
            .into_iter()
            .map(|sender| Box::new(sender) as Box<dyn CommandSender>)
            .collect()
    }

    fn execute_async(&self, task: Task) {
        self.executor.execute(task);
    }

    fn log(&self, level: Level, message: &str) -> Result<(), UnsupportedLevel> {
        match level {
            Level::Info => self.logger.info(message),
            Level::Warning => self.logger.warn(message),
            Level::Severe => self.logger.error(message),
            other => return Err(UnsupportedLevel(other)),
        }
        Ok(())
    }

    fn platform_info(&self) -> PlatformInfo {
        PlatformInfo {
            platform_type: PlatformType::Server,
            name: self.config.platform_name.clone(),
            brand: self.config.platform_name.clone(),
            version: self.server.version(),
            minecraft_version: self.server.minecraft_version(),
        }
    }

    fn create_class_source_lookup(&self) -> Box<dyn ClassSourceLookup> {
        Box::new(SculkClassSourceLookup::new(self.server.as_ref()))
    }

    fn known_sources(&self) -> Vec<SourceMetadata> {
        SourceMetadata::gather(
            self.server.extensions(),
            |extension: &Arc<dyn Extension>| extension.description().name.clone(),
            |extension: &Arc<dyn Extension>| extension.description().version.clone(),
            |_: &Arc<dyn Extension>| String::new(),
        )
    }

    fn create_player_ping_provider(&self) -> Option<Box<dyn PlayerPingProvider>> {
        Some(Box::new(SculkPlayerPingProvider::new(Arc::clone(
            &self.server,
        ))))
    }

    fn create_tick_hook(&self) -> Option<Box<dyn TickHook>> {
        Some(Box::new(self.ticks.hook.clone()))
    }

    fn create_tick_reporter(&self) -> Option<Box<dyn TickReporter>> {
        Some(Box::new(self.ticks.reporter.clone()))
    }
}
