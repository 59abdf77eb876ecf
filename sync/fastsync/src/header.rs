use crate::peer::PeerKey;
use crate::pivot::BlockHeader;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Failures of a single header query. All of these are recoverable from the
/// selection logic's point of view: the candidate is rejected without penalty
/// and a new one is picked on the next cycle.
#[derive(Error, Debug, Clone)]
pub enum HeaderFetchError {
    #[error("timeout expired after {0:?}")]
    Timeout(Duration),

    #[error("peer connection is closed")]
    ConnectionClosed,

    #[error("{0}")]
    Other(&'static str),
}

/// Wire-level header download primitive. Implementations handle their own
/// per-attempt retry/backoff and peer assignment mechanics; the selection
/// logic only pins the query to a peer and bounds it.
#[async_trait::async_trait]
pub trait HeaderFetcher: Send + Sync {
    /// Requests the header at block `number` from `peer`, retrying at most
    /// `max_retries` times and giving up after `timeout` overall. May resolve
    /// with zero, one, or several headers.
    async fn header_at(
        &self,
        number: u64,
        peer: PeerKey,
        max_retries: u32,
        timeout: Duration,
    ) -> Result<Vec<BlockHeader>, HeaderFetchError>;
}

pub type DynHeaderFetcher = Arc<dyn HeaderFetcher>;
