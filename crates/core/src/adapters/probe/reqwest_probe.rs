use error_stack::{Result, ResultExt};
use reqwest::{redirect::Policy, Client};
use thiserror::Error;

use crate::domain::ProbeOutcome;
use crate::ports::url_probe::UrlProbe;

#[derive(Error, Debug)]
pub enum ProbeClientError {
    #[error("Failed to build HTTP client for explorer probes")]
    BuildFailed,
}

/// Issues `HEAD` requests without following redirects. A redirecting explorer
/// page usually means "not found, go to search", so a redirect never counts.
#[derive(Debug, Clone)]
pub struct ReqwestProbe {
    client: Client,
}

impl ReqwestProbe {
    pub fn new() -> Result<Self, ProbeClientError> {
        let client = Client::builder()
            .redirect(Policy::none())
            .build()
            .change_context(ProbeClientError::BuildFailed)?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl UrlProbe for ReqwestProbe {
    #[tracing::instrument(skip(self))]
    async fn probe(&self, url: &str) -> ProbeOutcome {
        match self.client.head(url).send().await {
            Ok(response) => {
                let status = response.status();
                let outcome = ProbeOutcome::from_status(status.as_u16(), status.is_redirection());
                tracing::debug!(status = status.as_u16(), exists = outcome.exists(), "Probe answered");
                outcome
            }
            Err(e) => {
                tracing::warn!(error = %e, "Explorer probe failed");
                ProbeOutcome::ProbeFailed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
