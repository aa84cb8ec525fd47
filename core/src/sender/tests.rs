//! Tests for command sender adaptation

use std::sync::Arc;

use spark_shared::{CommandSender, CommandSource, Component};

use crate::test_utils::{TestPlayer, TestServer, TestSource};

use super::{SculkCommandSender, SenderFactory, SenderIdentity};

// ============================================================================
// Identity
// ============================================================================

#[test]
fn test_player_identity() {
    let server = TestServer::new();
    let player = server.add_player(TestPlayer::new("Notch", 42));
    let source: Arc<dyn CommandSource> = player.clone();

    let sender = SculkCommandSender::new(server.as_ref(), source);
    assert_eq!(sender.name(), "Notch");
    assert_eq!(sender.unique_id(), Some(player.unique_id));
    assert!(matches!(sender.identity(), SenderIdentity::Player { .. }));
}

#[test]
fn test_console_identity() {
    let server = TestServer::new();
    let sender = SculkCommandSender::new(server.as_ref(), server.console_source());

    assert_eq!(sender.identity(), &SenderIdentity::Console);
    assert_eq!(sender.name(), "Console");
    assert_eq!(sender.unique_id(), None);
}

#[test]
fn test_console_detected_by_identity_not_type() {
    // A second TestConsole is not the server's console
    let server = TestServer::new();
    let other: Arc<dyn CommandSource> = Arc::new(crate::test_utils::TestConsole::default());

    let sender = SculkCommandSender::new(server.as_ref(), other);
    assert_eq!(sender.name(), "unknown:TestConsole");
    assert_eq!(sender.unique_id(), None);
}

#[test]
fn test_unknown_identity_uses_type_name() {
    let server = TestServer::new();
    let source: Arc<dyn CommandSource> = Arc::new(TestSource::default());

    let sender = SculkCommandSender::new(server.as_ref(), source);
    assert_eq!(
        sender.identity(),
        &SenderIdentity::Unknown {
            type_name: "TestSource"
        }
    );
    assert_eq!(sender.name(), "unknown:TestSource");
    assert_eq!(sender.unique_id(), None);
}

#[test]
fn test_custom_console_name() {
    let server = TestServer::new();
    let factory = SenderFactory::new(server.clone(), "Terminal");

    let sender = factory.wrap(server.console_source());
    assert_eq!(sender.name(), "Terminal");
}

// ============================================================================
// Delegation
// ============================================================================

#[test]
fn test_send_message_forwards_unchanged() {
    let server = TestServer::new();
    let source = Arc::new(TestSource::default());
    let sender = SculkCommandSender::new(server.as_ref(), source.clone());

    let message = Component::text("Profiler started");
    sender.send_message(&message);
    sender.send_message(&message);

    let received = source.messages.lock();
    assert_eq!(received.len(), 2);
    assert_eq!(received[0], message);
}

#[test]
fn test_has_permission_delegates() {
    let server = TestServer::new();
    let source = Arc::new(TestSource::with_permissions(&["spark.profiler"]));
    let sender = SculkCommandSender::new(server.as_ref(), source);

    assert!(sender.has_permission("spark.profiler"));
    assert!(!sender.has_permission("spark.heapdump"));
}

// ============================================================================
// Factory
// ============================================================================

#[test]
fn test_all_senders_players_then_console() {
    let server = TestServer::new();
    server.add_player(TestPlayer::new("alice", 10));
    server.add_player(TestPlayer::new("bob", 20));

    let factory = SenderFactory::new(server.clone(), "Console");
    let names: Vec<String> = factory.all().iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["alice", "bob", "Console"]);
}

#[test]
fn test_all_senders_empty_server() {
    let server = TestServer::new();
    let factory = SenderFactory::new(server.clone(), "Console");

    let senders = factory.all();
    assert_eq!(senders.len(), 1);
    assert_eq!(senders[0].identity(), &SenderIdentity::Console);
}
