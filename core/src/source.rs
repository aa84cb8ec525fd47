//! Extension origin lookup
//!
//! Maps the loading context of each extension to the extension's declared
//! name so profiled frames can be attributed to whoever owns the code.
//!
//! The table is a snapshot taken at construction. Extensions loaded later
//! are not attributed and unloaded ones are not forgotten; long-running
//! profiling sessions lose accuracy if the extension set changes.

use hashbrown::HashMap;
use spark_shared::{ClassSourceLookup, LoaderId, Server};

/// Immutable `LoaderId -> extension name` table.
#[derive(Debug, Clone, Default)]
pub struct SculkClassSourceLookup {
    by_loader: HashMap<LoaderId, String>,
}

impl SculkClassSourceLookup {
    /// Snapshot the extensions currently loaded on `server`.
    pub fn new(server: &dyn Server) -> Self {
        Self::from_entries(
            server
                .extensions()
                .iter()
                .map(|extension| (extension.loader(), extension.description().name.clone())),
        )
    }

    /// Build from explicit entries. On duplicate loaders the later name wins.
    pub fn from_entries(entries: impl IntoIterator<Item = (LoaderId, String)>) -> Self {
        Self {
            by_loader: entries.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.by_loader.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_loader.is_empty()
    }
}

impl ClassSourceLookup for SculkClassSourceLookup {
    fn identify(&self, loader: LoaderId) -> Option<String> {
        self.by_loader.get(&loader).cloned()
    }
}
