//! Player latency snapshots

use std::sync::Arc;

use spark_shared::{LatencySnapshot, PlayerPingProvider, Server};

/// Polls the host for every online player's last measured round-trip time.
///
/// Nothing is cached: each poll enumerates the players connected at that
/// moment. If the host changes its player list mid-poll the snapshot may be
/// partial, which is fine for statistics.
pub struct SculkPlayerPingProvider {
    server: Arc<dyn Server>,
}

impl SculkPlayerPingProvider {
    pub fn new(server: Arc<dyn Server>) -> Self {
        Self { server }
    }
}

impl PlayerPingProvider for SculkPlayerPingProvider {
    fn poll(&self) -> LatencySnapshot {
        let mut snapshot = LatencySnapshot::with_capacity(self.server.player_count());
        for player in self.server.online_players() {
            // Display names can collide; the later player wins
            snapshot.insert(player.name().to_string(), player.ping());
        }
        snapshot
    }
}
