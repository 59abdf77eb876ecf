//! Fast ("snapshot") sync target selection.
//!
//! This crate decides which peer should serve as the synchronization source
//! for a fast sync session, confirms by direct query that the candidate
//! actually has the agreed pivot block, and decides on every sync iteration
//! whether downloading should continue. Everything downstream of these two
//! decisions (block/state download, persistence) lives elsewhere and merely
//! consumes the results.
//!
//! The surrounding node is reached through capability traits ([`PeerRegistry`],
//! [`HeaderFetcher`], [`ChainStateApi`], [`WorldStateApi`], [`DiagnosticSink`])
//! so the selection logic stays a single concrete state machine.

pub mod chain;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod header;
pub mod peer;
pub mod pivot;
pub mod target;

pub use chain::{ChainStateApi, DynChainState, DynWorldState, WorldStateApi};
pub use config::FastSyncConfig;
pub use diagnostics::{DiagnosticSink, ThrottledLogSink};
pub use error::SyncTargetError;
pub use header::{DynHeaderFetcher, HeaderFetchError, HeaderFetcher};
pub use peer::{DisconnectReason, DynPeerRegistry, PeerKey, PeerRegistry, SyncPeer};
pub use pivot::{BlockHeader, PivotState};
pub use target::SyncTargetManager;
