use crate::domain::ChainRef;

/// Read-only view of the configured networks.
pub trait NetworkConfigSource: Send + Sync {
    /// Raw explorer base configured for `chain`, exactly as stored.
    fn explorer_url(&self, chain: &ChainRef) -> Option<String>;
}
