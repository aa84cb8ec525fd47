//! Shared handle to the running engine

use std::sync::Arc;

use parking_lot::Mutex;
use spark_shared::SparkEngine;

/// The engine currently enabled on this server, if any.
///
/// The plugin and the command router hold clones of the same slot, so the
/// router always dispatches to whichever engine is enabled now. Emptying the
/// slot on shutdown drops the platform's last reference to the engine.
#[derive(Clone, Default)]
pub struct EngineSlot {
    inner: Arc<Mutex<Option<Arc<dyn SparkEngine>>>>,
}

impl EngineSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_engine(engine: Arc<dyn SparkEngine>) -> Self {
        let slot = Self::new();
        *slot.inner.lock() = Some(engine);
        slot
    }

    /// The current engine. The lock is released before this returns.
    pub fn get(&self) -> Option<Arc<dyn SparkEngine>> {
        self.inner.lock().clone()
    }

    pub fn is_set(&self) -> bool {
        self.inner.lock().is_some()
    }

    /// Store `engine` if the slot is empty, otherwise hand it back.
    pub fn try_set(&self, engine: Arc<dyn SparkEngine>) -> Result<(), Arc<dyn SparkEngine>> {
        let mut slot = self.inner.lock();
        if slot.is_some() {
            return Err(engine);
        }
        *slot = Some(engine);
        Ok(())
    }

    pub fn take(&self) -> Option<Arc<dyn SparkEngine>> {
        self.inner.lock().take()
    }
}
