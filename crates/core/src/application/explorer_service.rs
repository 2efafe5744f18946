use std::sync::Arc;

use futures::future::join;
use tracing::{debug, instrument, warn};

use crate::domain::blockchain::explorer::normalize_base_url;
use crate::domain::{ChainRef, ExplorerAction, ExplorerRequest};
use crate::ports::external_opener::ExternalOpener;
use crate::ports::network_config::NetworkConfigSource;
use crate::ports::url_probe::UrlProbe;

/// Resolves "view in explorer" requests against the configured explorer of a
/// chain and opens the result.
///
/// Explorer destinations come from configuration rather than from page content,
/// so they are opened directly and never pass through `ExternalLinkGate`.
pub struct BlockExplorerService {
    networks: Arc<dyn NetworkConfigSource>,
    probe: Arc<dyn UrlProbe>,
    opener: Arc<dyn ExternalOpener>,
}

impl std::fmt::Debug for BlockExplorerService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockExplorerService").finish_non_exhaustive()
    }
}

impl BlockExplorerService {
    pub fn new(
        networks: Arc<dyn NetworkConfigSource>,
        probe: Arc<dyn UrlProbe>,
        opener: Arc<dyn ExternalOpener>,
    ) -> Self {
        Self {
            networks,
            probe,
            opener,
        }
    }

    /// Configured explorer for `chain` without trailing slashes, or `None` when
    /// nothing usable is configured. Read on every call.
    pub fn explorer_base(&self, chain: &ChainRef) -> Option<String> {
        let raw = self.networks.explorer_url(chain)?;
        let base = normalize_base_url(raw.trim());
        (!base.is_empty()).then(|| base.to_string())
    }

    /// The URL `open_block_explorer` would open. Falls back to the bare
    /// explorer when the request lacks the field its type needs.
    #[instrument(skip(self))]
    pub async fn resolve(&self, chain: &ChainRef, request: &ExplorerRequest) -> Option<String> {
        let Some(base) = self.explorer_base(chain) else {
            debug!(%chain, "No explorer configured");
            return None;
        };

        let resolved = match request.action() {
            Some(ExplorerAction::Transaction { hash }) => Some(format!("{base}/tx/{hash}")),
            Some(ExplorerAction::Address { address }) => Some(format!("{base}/address/{address}")),
            Some(ExplorerAction::Token { address, token_id }) => {
                Some(self.token_url(&base, &address, token_id.as_deref()).await)
            }
            None => {
                debug!(kind = %request.kind, "Explorer request is missing its target");
                None
            }
        };

        Some(resolved.unwrap_or(base))
    }

    /// Opens the explorer page for `request`. Never fails: a chain without an
    /// explorer is a no-op and launch errors are only logged.
    #[instrument(skip(self))]
    pub async fn open_block_explorer(&self, chain: &ChainRef, request: &ExplorerRequest) {
        let Some(url) = self.resolve(chain, request).await else {
            return;
        };

        if let Err(report) = self.opener.open(&url) {
            warn!("Failed to open explorer: {:?}", report);
        }
    }

    /// Picks between the NFT page and the token page of a contract.
    ///
    /// Without a token id the token page is returned without touching the
    /// network. With one, both candidates are probed at the same time and the
    /// first existing one wins, NFT first. If neither exists the contract's
    /// address page is used.
    pub async fn token_url(&self, base: &str, address: &str, token_id: Option<&str>) -> String {
        let token_page = format!("{base}/token/{address}");

        let Some(token_id) = token_id else {
            return token_page;
        };

        let nft_page = format!("{base}/nft/{address}/{token_id}");

        let (nft_outcome, token_outcome) =
            join(self.probe.probe(&nft_page), self.probe.probe(&token_page)).await;

        debug!(?nft_outcome, ?token_outcome, "Token page probes settled");

        [(nft_page, nft_outcome), (token_page, token_outcome)]
            .into_iter()
            .find(|(_, outcome)| outcome.exists())
            .map(|(url, _)| url)
            .unwrap_or_else(|| format!("{base}/address/{address}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProbeOutcome;
    use crate::ports::external_opener::OpenError;
    use std::collections::HashSet;
    use std::sync::Mutex;

    struct StaticNetworks(Option<String>);

    impl NetworkConfigSource for StaticNetworks {
        fn explorer_url(&self, _chain: &ChainRef) -> Option<String> {
            self.0.clone()
        }
    }

    #[derive(Default)]
    struct ScriptedProbe {
        existing: HashSet<String>,
        failing: HashSet<String>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedProbe {
        fn existing(urls: &[&str]) -> Self {
            Self {
                existing: urls.iter().map(|u| u.to_string()).collect(),
                ..Default::default()
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl UrlProbe for ScriptedProbe {
        async fn probe(&self, url: &str) -> ProbeOutcome {
            self.calls.lock().unwrap().push(url.to_string());
            if self.failing.contains(url) {
                ProbeOutcome::ProbeFailed {
                    reason: "dns error".into(),
                }
            } else if self.existing.contains(url) {
                ProbeOutcome::Exists
            } else {
                ProbeOutcome::NotExists { status: 404 }
            }
        }
    }

    #[derive(Default)]
    struct RecordingOpener {
        opened: Mutex<Vec<String>>,
        fail: bool,
    }

    impl ExternalOpener for RecordingOpener {
        fn open(&self, url: &str) -> error_stack::Result<(), OpenError> {
            self.opened.lock().unwrap().push(url.to_string());
            if self.fail {
                return Err(error_stack::Report::new(OpenError::LaunchFailed {
                    url: url.to_string(),
                }));
            }
            Ok(())
        }
    }

    const NFT: &str = "https://ex.com/nft/0xabc/7";
    const TOKEN: &str = "https://ex.com/token/0xabc";
    const ADDRESS: &str = "https://ex.com/address/0xabc";

    fn service(
        explorer: Option<&str>,
        probe: Arc<ScriptedProbe>,
        opener: Arc<RecordingOpener>,
    ) -> BlockExplorerService {
        BlockExplorerService::new(
            Arc::new(StaticNetworks(explorer.map(str::to_string))),
            probe,
            opener,
        )
    }

    fn chain() -> ChainRef {
        ChainRef::new("ethereum", 1)
    }

    #[tokio::test]
    async fn test_token_without_id_skips_network() {
        let probe = Arc::new(ScriptedProbe::default());
        let svc = service(Some("https://ex.com"), probe.clone(), Default::default());
        assert_eq!(svc.token_url("https://ex.com", "0xabc", None).await, TOKEN);
        assert!(probe.calls().is_empty());
    }

    #[tokio::test]
    async fn test_only_nft_exists() {
        let probe = Arc::new(ScriptedProbe::existing(&[NFT]));
        let svc = service(None, probe.clone(), Default::default());
        assert_eq!(svc.token_url("https://ex.com", "0xabc", Some("7")).await, NFT);
        assert_eq!(probe.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_only_token_exists() {
        let probe = Arc::new(ScriptedProbe::existing(&[TOKEN]));
        let svc = service(None, probe, Default::default());
        assert_eq!(svc.token_url("https://ex.com", "0xabc", Some("7")).await, TOKEN);
    }

    #[tokio::test]
    async fn test_neither_exists_falls_back_to_address() {
        let probe = Arc::new(ScriptedProbe::default());
        let svc = service(None, probe, Default::default());
        assert_eq!(svc.token_url("https://ex.com", "0xabc", Some("7")).await, ADDRESS);
    }

    #[tokio::test]
    async fn test_both_exist_prefers_nft() {
        let probe = Arc::new(ScriptedProbe::existing(&[NFT, TOKEN]));
        let svc = service(None, probe, Default::default());
        assert_eq!(svc.token_url("https://ex.com", "0xabc", Some("7")).await, NFT);
    }

    /// Lets the barrier through only when both candidate pages are requested together.
    struct RendezvousCheck {
        barrier: tokio::sync::Barrier,
    }

    #[async_trait::async_trait]
    impl UrlProbe for RendezvousCheck {
        async fn probe(&self, url: &str) -> ProbeOutcome {
            self.barrier.wait().await;
            if url == TOKEN {
                ProbeOutcome::Exists
            } else {
                ProbeOutcome::NotExists { status: 404 }
            }
        }
    }

    #[tokio::test]
    async fn test_candidates_are_checked_concurrently() {
        let checker = Arc::new(RendezvousCheck {
            barrier: tokio::sync::Barrier::new(2),
        });
        let svc = BlockExplorerService::new(
            Arc::new(StaticNetworks(None)),
            checker,
            Arc::new(RecordingOpener::default()),
        );

        let url = tokio::time::timeout(
            std::time::Duration::from_secs(5),
            svc.token_url("https://ex.com", "0xabc", Some("7")),
        )
        .await
        .expect("token page checks should not wait on each other");
        assert_eq!(url, TOKEN);
    }

    #[tokio::test]
    async fn test_probe_failure_counts_as_missing() {
        let probe = Arc::new(ScriptedProbe {
            existing: HashSet::from([NFT.to_string()]),
            failing: HashSet::from([NFT.to_string()]),
            ..Default::default()
        });
        let svc = service(None, probe, Default::default());
        assert_eq!(svc.token_url("https://ex.com", "0xabc", Some("7")).await, ADDRESS);
    }

    #[tokio::test]
    async fn test_missing_explorer_opens_nothing() {
        let opener = Arc::new(RecordingOpener::default());
        let svc = service(None, Default::default(), opener.clone());
        svc.open_block_explorer(&chain(), &ExplorerRequest::transaction("0x1"))
            .await;
        assert!(opener.opened.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blank_explorer_opens_nothing() {
        let opener = Arc::new(RecordingOpener::default());
        let svc = service(Some("  / "), Default::default(), opener.clone());
        svc.open_block_explorer(&chain(), &ExplorerRequest::address("0xabc"))
            .await;
        assert!(opener.opened.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_tx_url() {
        let opener = Arc::new(RecordingOpener::default());
        let svc = service(Some("https://ex.com/"), Default::default(), opener.clone());
        svc.open_block_explorer(&chain(), &ExplorerRequest::transaction("0xdead"))
            .await;
        assert_eq!(*opener.opened.lock().unwrap(), vec!["https://ex.com/tx/0xdead"]);
    }

    #[tokio::test]
    async fn test_address_url() {
        let opener = Arc::new(RecordingOpener::default());
        let svc = service(Some("https://ex.com"), Default::default(), opener.clone());
        svc.open_block_explorer(&chain(), &ExplorerRequest::address("0xabc"))
            .await;
        assert_eq!(*opener.opened.lock().unwrap(), vec![ADDRESS]);
    }

    #[tokio::test]
    async fn test_tx_without_hash_opens_stripped_base() {
        let opener = Arc::new(RecordingOpener::default());
        let svc = service(Some("https://ex.com//"), Default::default(), opener.clone());
        let request = ExplorerRequest {
            hash: None,
            ..ExplorerRequest::transaction("unused")
        };
        svc.open_block_explorer(&chain(), &request).await;
        assert_eq!(*opener.opened.lock().unwrap(), vec!["https://ex.com"]);
    }

    #[tokio::test]
    async fn test_token_request_goes_through_probes() {
        let probe = Arc::new(ScriptedProbe::existing(&[TOKEN]));
        let opener = Arc::new(RecordingOpener::default());
        let svc = service(Some("https://ex.com/"), probe.clone(), opener.clone());
        svc.open_block_explorer(&chain(), &ExplorerRequest::token("0xabc", Some("7".into())))
            .await;
        assert_eq!(*opener.opened.lock().unwrap(), vec![TOKEN]);
        assert_eq!(probe.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_open_failure_is_swallowed() {
        let opener = Arc::new(RecordingOpener {
            fail: true,
            ..Default::default()
        });
        let svc = service(Some("https://ex.com"), Default::default(), opener.clone());
        svc.open_block_explorer(&chain(), &ExplorerRequest::transaction("0x1"))
            .await;
        assert_eq!(opener.opened.lock().unwrap().len(), 1);
    }
}
