use thiserror::Error;

/// Errors surfaced by the public sync target operations.
///
/// Recoverable conditions (no usable peer, failed confirmation, query
/// timeouts) never appear here; they resolve to `None`/`bool` results and the
/// caller is expected to simply try again later.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncTargetError {
    /// The pivot selection stage has not installed a pivot target yet. This is
    /// a sequencing bug in the surrounding pipeline, not a transient condition.
    #[error("no pivot block is configured for this sync session")]
    NoPivotConfigured,
}
