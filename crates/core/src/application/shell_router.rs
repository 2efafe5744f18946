use error_stack::{Result, ResultExt};
use serde::Deserialize;
use thiserror::Error;
use tracing::instrument;

use super::explorer_service::BlockExplorerService;
use super::external_link_gate::ExternalLinkGate;
use crate::domain::{ChainRef, ExplorerRequest};

#[derive(Error, Debug)]
pub enum RouterError {
    #[error("Malformed shell request")]
    MalformedRequest,
}

/// A link request coming from the UI.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ShellRequest {
    OpenExternal {
        url: String,
    },
    OpenExplorer {
        chain: ChainRef,
        request: ExplorerRequest,
    },
}

impl ShellRequest {
    pub fn parse(payload: &str) -> Result<Self, RouterError> {
        serde_json::from_str(payload)
            .change_context(RouterError::MalformedRequest)
            .attach_printable_lazy(|| format!("Payload: {}", payload))
    }
}

/// Sends page-supplied links through the gate and explorer requests to the
/// resolver.
#[derive(Debug)]
pub struct ShellRouter {
    gate: ExternalLinkGate,
    explorer: BlockExplorerService,
}

impl ShellRouter {
    pub fn new(gate: ExternalLinkGate, explorer: BlockExplorerService) -> Self {
        Self { gate, explorer }
    }

    pub fn gate(&self) -> &ExternalLinkGate {
        &self.gate
    }

    pub fn explorer(&self) -> &BlockExplorerService {
        &self.explorer
    }

    #[instrument(skip(self))]
    pub async fn handle(&self, request: ShellRequest) {
        match request {
            ShellRequest::OpenExternal { url } => self.gate.open_external(&url),
            ShellRequest::OpenExplorer { chain, request } => {
                self.explorer.open_block_explorer(&chain, &request).await
            }
        }
    }

    pub async fn dispatch(&self, payload: &str) -> Result<(), RouterError> {
        let request = ShellRequest::parse(payload)?;
        self.handle(request).await;
        Ok(())
    }
}
