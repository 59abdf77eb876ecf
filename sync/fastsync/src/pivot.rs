use hearth_hashes::Hash;
use parking_lot::RwLock;
use std::fmt::{Display, Formatter};

/// The pivot-shaped view of a block header: the only header fields fast sync
/// reasons about. Headers are compared as a whole, never field by field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHeader {
    pub number: u64,
    pub hash: Hash,
    pub state_root: Hash,
}

impl BlockHeader {
    pub fn new(number: u64, hash: Hash, state_root: Hash) -> Self {
        Self { number, hash, state_root }
    }
}

impl Display for BlockHeader {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} ({})", self.number, self.hash)
    }
}

#[derive(Default)]
struct PivotInner {
    header: Option<BlockHeader>,
    hash: Option<Hash>,
}

/// Holder of the currently agreed pivot target.
///
/// Written by the external pivot selection process and read repeatedly by the
/// sync target logic, which must snapshot it once per reasoning step — the
/// pivot may be swapped at any moment between reads. A single lock guards both
/// the header and the independently-tracked hash, so a snapshot can never mix
/// fields of two different pivots.
#[derive(Default)]
pub struct PivotState {
    inner: RwLock<PivotInner>,
}

impl PivotState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the full pivot header, if one is set
    pub fn pivot_header(&self) -> Option<BlockHeader> {
        self.inner.read().header
    }

    /// The current pivot hash. Tracked separately from the header so a pivot
    /// change is observable even before the new full header is available.
    pub fn pivot_hash(&self) -> Option<Hash> {
        let inner = self.inner.read();
        inner.hash.or_else(|| inner.header.map(|header| header.hash))
    }

    /// Installs a new pivot target, replacing both the header and the hash
    pub fn set_pivot(&self, header: BlockHeader) {
        let mut inner = self.inner.write();
        inner.hash = Some(header.hash);
        inner.header = Some(header);
    }

    /// Records the hash of the upcoming pivot ahead of its full header
    pub fn announce_pivot_hash(&self, hash: Hash) {
        self.inner.write().hash = Some(hash);
    }
}
