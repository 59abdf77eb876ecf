use std::fmt::{Display, Formatter};
use std::sync::Arc;
use uuid::Uuid;

/// Opaque identity of a connected peer, assigned by the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PeerKey(Uuid);

impl PeerKey {
    pub fn new(identity: Uuid) -> Self {
        Self(identity)
    }

    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Abbreviated form used in log lines
    pub fn short_id(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Display for PeerKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A borrowed view of a registry-owned peer: its identity plus the chain
/// height the registry currently estimates for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncPeer {
    key: PeerKey,
    estimated_height: u64,
}

impl SyncPeer {
    pub fn new(key: PeerKey, estimated_height: u64) -> Self {
        Self { key, estimated_height }
    }

    pub fn key(&self) -> PeerKey {
        self.key
    }

    pub fn estimated_height(&self) -> u64 {
        self.estimated_height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisconnectReason {
    /// The peer cannot serve the current sync need (proven wrong about the pivot)
    UselessPeer,
    /// Pressure relief when the peer slots are full of unusable candidates
    TooManyPeers,
}

impl Display for DisconnectReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DisconnectReason::UselessPeer => f.write_str("useless peer"),
            DisconnectReason::TooManyPeers => f.write_str("too many peers"),
        }
    }
}

/// Peer bookkeeping as seen by sync target selection. Peers are owned and
/// mutated exclusively by the registry; this trait only exposes queries and
/// disconnect requests.
pub trait PeerRegistry: Send + Sync {
    /// The connected peer with the highest estimated chain height, if any
    fn best_peer_by_height(&self) -> Option<SyncPeer>;

    fn peer_count(&self) -> usize;

    fn max_peers(&self) -> usize;

    /// Drops the single least useful peer to make room for better candidates
    fn disconnect_worst_useless_peer(&self);

    fn disconnect(&self, peer: PeerKey, reason: DisconnectReason);
}

pub type DynPeerRegistry = Arc<dyn PeerRegistry>;
