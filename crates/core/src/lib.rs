// Public API exports
pub mod adapters;
pub mod application;
pub mod domain;
pub mod logging;
pub mod ports;

// Re-export key types for easy access
pub use application::explorer_service::BlockExplorerService;
pub use application::external_link_gate::ExternalLinkGate;
pub use application::shell_router::{ShellRequest, ShellRouter};
pub use application::surface_factory::SurfaceFactory;
pub use domain::*;
