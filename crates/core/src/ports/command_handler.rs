use thiserror::Error;

use crate::domain::shell::surface::SurfaceKind;
use crate::domain::{ChainRef, ExplorerRequest};

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Invalid command: {details}")]
    InvalidCommand { details: String },
    #[error("Command execution failed: {details}")]
    ExecutionFailed { details: String },
}

#[derive(Debug, Clone)]
pub enum Command {
    OpenExternal { url: String },
    OpenExplorer { chain: ChainRef, request: ExplorerRequest },
    ResolveExplorer { chain: ChainRef, request: ExplorerRequest },
    Dispatch { payload: String },
    SelectPanel { state: String },
    CreateSurface { kind: SurfaceKind, options: Option<String> },
    HealthCheck,
}

#[async_trait::async_trait]
pub trait CommandHandler: Send + Sync {
    async fn handle(&self, command: Command) -> error_stack::Result<String, CommandError>;
}
