//! Shared test utilities: an in-memory Sculk host and recording collaborators

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use spark_shared::{
    CommandHandler, CommandSender, CommandSource, Component, Extension, ExtensionDescription,
    LoaderId, Player, PluginLogger, Server, SparkEngine, Task, TaskExecutor,
};
use uuid::Uuid;

// ============================================================================
// Command Sources
// ============================================================================

/// A generic, non-player, non-console source (e.g. another plugin's sender)
#[derive(Default)]
pub struct TestSource {
    pub messages: Mutex<Vec<Component>>,
    pub permissions: Vec<String>,
}

impl TestSource {
    pub fn with_permissions(permissions: &[&str]) -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl CommandSource for TestSource {
    fn send_message(&self, message: &Component) {
        self.messages.lock().push(message.clone());
    }

    fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }
}

/// The server console; has every permission
#[derive(Default)]
pub struct TestConsole {
    pub messages: Mutex<Vec<Component>>,
}

impl CommandSource for TestConsole {
    fn send_message(&self, message: &Component) {
        self.messages.lock().push(message.clone());
    }

    fn has_permission(&self, _permission: &str) -> bool {
        true
    }
}

/// A connected player
pub struct TestPlayer {
    pub name: String,
    pub unique_id: Uuid,
    pub ping: i32,
    pub messages: Mutex<Vec<Component>>,
    pub operator: bool,
}

impl TestPlayer {
    pub fn new(name: &str, ping: i32) -> Self {
        Self {
            name: name.to_string(),
            unique_id: Uuid::new_v4(),
            ping,
            messages: Mutex::new(Vec::new()),
            operator: false,
        }
    }

    pub fn operator(mut self) -> Self {
        self.operator = true;
        self
    }
}

impl CommandSource for TestPlayer {
    fn send_message(&self, message: &Component) {
        self.messages.lock().push(message.clone());
    }

    fn has_permission(&self, permission: &str) -> bool {
        self.operator && permission.starts_with("spark")
    }

    fn as_player(&self) -> Option<&dyn Player> {
        Some(self)
    }
}

impl Player for TestPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn unique_id(&self) -> Uuid {
        self.unique_id
    }

    fn ping(&self) -> i32 {
        self.ping
    }
}

// ============================================================================
// Extensions
// ============================================================================

pub struct TestExtension {
    pub description: ExtensionDescription,
    pub loader: LoaderId,
}

impl TestExtension {
    pub fn new(name: &str, version: &str, loader: u64) -> Self {
        Self {
            description: ExtensionDescription::new(name, version),
            loader: LoaderId::new(loader),
        }
    }
}

impl Extension for TestExtension {
    fn description(&self) -> &ExtensionDescription {
        &self.description
    }

    fn loader(&self) -> LoaderId {
        self.loader
    }
}

// ============================================================================
// Server
// ============================================================================

/// In-memory server with a mutable player and extension list
pub struct TestServer {
    pub console: Arc<TestConsole>,
    pub players: Mutex<Vec<Arc<TestPlayer>>>,
    pub extensions: Mutex<Vec<Arc<TestExtension>>>,
    pub commands: Mutex<Vec<(String, Arc<dyn CommandHandler>)>>,
}

impl TestServer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            console: Arc::new(TestConsole::default()),
            players: Mutex::new(Vec::new()),
            extensions: Mutex::new(Vec::new()),
            commands: Mutex::new(Vec::new()),
        })
    }

    pub fn add_player(&self, player: TestPlayer) -> Arc<TestPlayer> {
        let player = Arc::new(player);
        self.players.lock().push(Arc::clone(&player));
        player
    }

    pub fn add_extension(&self, extension: TestExtension) {
        self.extensions.lock().push(Arc::new(extension));
    }

    pub fn console_source(&self) -> Arc<dyn CommandSource> {
        self.console.clone()
    }

    /// The handler registered under `name`, if any
    pub fn command(&self, name: &str) -> Option<Arc<dyn CommandHandler>> {
        self.commands
            .lock()
            .iter()
            .find(|(registered, _)| registered == name)
            .map(|(_, handler)| Arc::clone(handler))
    }
}

impl Server for TestServer {
    fn version(&self) -> String {
        "1.0.0-test".to_string()
    }

    fn minecraft_version(&self) -> String {
        "1.20.4".to_string()
    }

    fn console_command_source(&self) -> Arc<dyn CommandSource> {
        self.console.clone()
    }

    fn online_players(&self) -> Vec<Arc<dyn Player>> {
        self.players
            .lock()
            .iter()
            .map(|p| Arc::clone(p) as Arc<dyn Player>)
            .collect()
    }

    fn player_count(&self) -> usize {
        self.players.lock().len()
    }

    fn extensions(&self) -> Vec<Arc<dyn Extension>> {
        self.extensions
            .lock()
            .iter()
            .map(|e| Arc::clone(e) as Arc<dyn Extension>)
            .collect()
    }

    fn register_command(&self, name: &str, handler: Arc<dyn CommandHandler>) {
        self.commands.lock().push((name.to_string(), handler));
    }
}

// ============================================================================
// Engine
// ============================================================================

/// A dispatched command as the engine saw it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub sender: String,
    pub unique_id: Option<Uuid>,
    pub args: Vec<String>,
}

/// Records every call; returns a fixed completion list
#[derive(Default)]
pub struct RecordingEngine {
    pub executed: Mutex<Vec<RecordedCall>>,
    pub completed: Mutex<Vec<RecordedCall>>,
    pub completions: Vec<String>,
    pub enable_count: AtomicUsize,
    pub disable_count: AtomicUsize,
}

impl RecordingEngine {
    pub fn with_completions(completions: &[&str]) -> Self {
        Self {
            completions: completions.iter().map(|c| c.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn executed(&self) -> Vec<RecordedCall> {
        self.executed.lock().clone()
    }

    pub fn completed(&self) -> Vec<RecordedCall> {
        self.completed.lock().clone()
    }
}

fn record(sender: &dyn CommandSender, args: Vec<String>) -> RecordedCall {
    RecordedCall {
        sender: sender.name(),
        unique_id: sender.unique_id(),
        args,
    }
}

impl SparkEngine for RecordingEngine {
    fn enable(&self) -> anyhow::Result<()> {
        self.enable_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn disable(&self) -> anyhow::Result<()> {
        self.disable_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn execute_command(&self, sender: Box<dyn CommandSender>, args: Vec<String>) {
        self.executed.lock().push(record(sender.as_ref(), args));
    }

    fn tab_complete(&self, sender: Box<dyn CommandSender>, args: Vec<String>) -> Vec<String> {
        self.completed.lock().push(record(sender.as_ref(), args));
        self.completions.clone()
    }
}

// ============================================================================
// Logger / Executor
// ============================================================================

/// Records (method, message) pairs
#[derive(Default)]
pub struct RecordingLogger {
    pub calls: Mutex<Vec<(&'static str, String)>>,
}

impl RecordingLogger {
    pub fn calls(&self) -> Vec<(&'static str, String)> {
        self.calls.lock().clone()
    }
}

impl PluginLogger for RecordingLogger {
    fn info(&self, message: &str) {
        self.calls.lock().push(("info", message.to_string()));
    }

    fn warn(&self, message: &str) {
        self.calls.lock().push(("warn", message.to_string()));
    }

    fn error(&self, message: &str) {
        self.calls.lock().push(("error", message.to_string()));
    }
}

/// Runs tasks inline on the calling thread and counts them
#[derive(Default)]
pub struct RecordingExecutor {
    pub submitted: AtomicUsize,
}

impl TaskExecutor for RecordingExecutor {
    fn execute(&self, task: Task) {
        self.submitted.fetch_add(1, Ordering::SeqCst);
        task();
    }
}
