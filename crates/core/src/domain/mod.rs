pub mod blockchain;
pub mod panel;
pub mod shell;

// Re-export commonly used types
pub use blockchain::chain::ChainRef;
pub use blockchain::explorer::{ExplorerAction, ExplorerRequest};
pub use blockchain::probe::ProbeOutcome;
