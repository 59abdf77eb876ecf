use crate::chain::{DynChainState, DynWorldState};
use crate::config::FastSyncConfig;
use crate::diagnostics::DiagnosticSink;
use crate::error::SyncTargetError;
use crate::header::DynHeaderFetcher;
use crate::peer::{DisconnectReason, DynPeerRegistry, SyncPeer};
use crate::pivot::{BlockHeader, PivotState};
use hearth_core::{debug, info, warn};
use log::Level;
use std::sync::Arc;

/// Message classes for the throttled "no sync target" diagnostics
const NO_TARGET_DEBUG_KEY: &str = "sync-target-unavailable-debug";
const NO_TARGET_INFO_KEY: &str = "sync-target-unavailable-info";

/// Selects the peer that should serve as the source for a fast sync session
/// and decides, per sync iteration, whether downloading should continue.
///
/// The manager never writes the pivot; it snapshots [`PivotState`] once at the
/// start of every reasoning step and re-reads on each retry, tolerating the
/// external pivot selection process swapping the target at any moment.
pub struct SyncTargetManager {
    config: FastSyncConfig,
    pivot_state: Arc<PivotState>,
    peers: DynPeerRegistry,
    headers: DynHeaderFetcher,
    chain: DynChainState,
    world_state: DynWorldState,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl SyncTargetManager {
    pub fn new(
        config: FastSyncConfig,
        pivot_state: Arc<PivotState>,
        peers: DynPeerRegistry,
        headers: DynHeaderFetcher,
        chain: DynChainState,
        world_state: DynWorldState,
        diagnostics: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self { config, pivot_state, peers, headers, chain, world_state, diagnostics }
    }

    /// Picks the best available candidate peer and confirms it has the pivot
    /// block. Resolves to `None` when no candidate can be confirmed right now;
    /// the caller is expected to re-invoke on its own schedule.
    pub async fn select_sync_target(&self) -> Result<Option<SyncPeer>, SyncTargetError> {
        let pivot = self.pivot_state.pivot_header().ok_or(SyncTargetError::NoPivotConfigured)?;
        let Some(best_peer) = self.peers.best_peer_by_height() else {
            self.diagnostics.emit_throttled(
                Level::Debug,
                &format!(
                    "Unable to find sync target. Currently checking {} peers for usefulness. Pivot block: {}",
                    self.peers.peer_count(),
                    pivot.number
                ),
                NO_TARGET_DEBUG_KEY,
                self.config.no_target_debug_interval,
            );
            self.diagnostics.emit_throttled(
                Level::Info,
                &format!("Unable to find sync target. Currently checking {} peers for usefulness.", self.peers.peer_count()),
                NO_TARGET_INFO_KEY,
                self.config.no_target_info_interval,
            );
            return Ok(None);
        };
        if best_peer.estimated_height() < pivot.number {
            info!(
                "Best peer {} has chain height {} below pivot block height {}. Waiting for better peers. Current {} of max {}",
                best_peer.key().short_id(),
                best_peer.estimated_height(),
                pivot.number,
                self.peers.peer_count(),
                self.peers.max_peers()
            );
            // Structurally unable to have the pivot block; make room for a better candidate
            self.peers.disconnect_worst_useless_peer();
            return Ok(None);
        }
        Ok(self.confirm_pivot(best_peer).await)
    }

    /// Queries `best_peer` for the pivot block header and checks the response
    /// against the currently agreed pivot.
    ///
    /// A wrong answer has two possible causes which are treated differently:
    /// if the pivot was swapped while the query was in flight the peer is
    /// innocent and the query is retried with the fresh pivot (bounded by
    /// `max_pivot_churn_retries`); if the pivot is unchanged the peer is
    /// provably wrong about the agreed block and gets disconnected.
    pub async fn confirm_pivot(&self, best_peer: SyncPeer) -> Option<SyncPeer> {
        for _ in 0..self.config.max_pivot_churn_retries {
            let pivot = self.pivot_state.pivot_header()?;
            let result = self
                .headers
                .header_at(pivot.number, best_peer.key(), self.config.max_query_retries_per_peer, self.config.query_timeout)
                .await;
            match result {
                Ok(headers) => {
                    if headers.len() == 1 && headers[0] == pivot {
                        return Some(best_peer);
                    }
                    if !self.pivot_changed(&pivot) {
                        let received = match headers.as_slice() {
                            [header] => header.hash.to_string(),
                            _ => "invalid response".to_string(),
                        };
                        warn!(
                            "Best peer {} has wrong pivot block (#{}) expecting {} but received {}. Disconnecting",
                            best_peer.key().short_id(),
                            pivot.number,
                            pivot.hash,
                            received
                        );
                        self.peers.disconnect(best_peer.key(), DisconnectReason::UselessPeer);
                        return None;
                    }
                    debug!("Retrying best peer {} with a new pivot block", best_peer.key().short_id());
                }
                Err(err) => {
                    debug!("Could not confirm best peer {} has pivot block {}: {}", best_peer.key().short_id(), pivot, err);
                    return None;
                }
            }
        }
        debug!(
            "Pivot block changed {} times while confirming with peer {}; rejecting the candidate",
            self.config.max_pivot_churn_retries,
            best_peer.key().short_id()
        );
        None
    }

    /// Keeps selecting until a candidate peer is confirmed, sleeping between
    /// attempts while no usable peer is connected
    pub async fn find_sync_target(&self) -> Result<SyncPeer, SyncTargetError> {
        loop {
            if let Some(peer) = self.select_sync_target().await? {
                return Ok(peer);
            }
            tokio::time::sleep(self.config.peer_wait_interval).await;
        }
    }

    /// Whether the download stage still has work to do for the current pivot.
    ///
    /// Three local conditions demand three different actions: a chain head
    /// already at the pivot only needs the state availability check; a head
    /// that diverged from a locally-known pivot block is rewound first; a
    /// pivot block unknown locally means headers have not reached it yet, so
    /// downloading continues regardless of state.
    pub fn should_continue_downloading(&self) -> Result<bool, SyncTargetError> {
        let pivot = self.pivot_state.pivot_header().ok_or(SyncTargetError::NoPivotConfigured)?;
        if self.chain.head_hash() != pivot.hash {
            if self.chain.contains_block(pivot.hash) {
                if !self.chain.rewind_to(pivot.hash) {
                    warn!("Failed to rewind the local chain head to pivot block {}", pivot);
                }
            } else {
                return Ok(true);
            }
        }
        Ok(!self.world_state.is_world_state_available(pivot.state_root, pivot.hash))
    }

    fn pivot_changed(&self, requested: &BlockHeader) -> bool {
        self.pivot_state.pivot_hash() != Some(requested.hash)
    }
}
