use hearth_hashes::Hash;
use std::sync::Arc;

/// Local chain storage as seen by sync target selection
pub trait ChainStateApi: Send + Sync {
    /// Hash of the current local chain head
    fn head_hash(&self) -> Hash;

    /// Whether the local chain knows the block with the given hash
    fn contains_block(&self, hash: Hash) -> bool;

    /// Rewinds the chain head to the given block. Returns false if the block
    /// is unknown locally and no rewind took place.
    fn rewind_to(&self, hash: Hash) -> bool;
}

/// World state storage as seen by sync target selection
pub trait WorldStateApi: Send + Sync {
    /// Whether the full account/storage state for the given state root and
    /// block hash is present in local storage
    fn is_world_state_available(&self, state_root: Hash, block_hash: Hash) -> bool;
}

pub type DynChainState = Arc<dyn ChainStateApi>;
pub type DynWorldState = Arc<dyn WorldStateApi>;
