use crate::domain::ProbeOutcome;

#[async_trait::async_trait]
pub trait UrlProbe: Send + Sync {
    /// Checks whether `url` resolves to a page. Never fails; transport errors
    /// come back as [`ProbeOutcome::ProbeFailed`].
    async fn probe(&self, url: &str) -> ProbeOutcome;
}
