//! Default plugin logger backed by `tracing`

use spark_shared::PluginLogger;

/// Emits plugin log lines as `tracing` events tagged with the plugin name.
///
/// The subscriber is the host binary's business.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    plugin: String,
}

impl TracingLogger {
    pub fn new(plugin: impl Into<String>) -> Self {
        Self {
            plugin: plugin.into(),
        }
    }

    pub fn plugin(&self) -> &str {
        &self.plugin
    }
}

impl PluginLogger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(plugin = %self.plugin, "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(plugin = %self.plugin, "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(plugin = %self.plugin, "{}", message);
    }
}
