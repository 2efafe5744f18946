use std::sync::Arc;

use tracing::{trace, warn};

use crate::domain::shell::external_link::is_allowed_external;
use crate::ports::external_opener::ExternalOpener;

/// The only way page content gets a URL into the system browser.
pub struct ExternalLinkGate {
    opener: Arc<dyn ExternalOpener>,
}

impl std::fmt::Debug for ExternalLinkGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExternalLinkGate").finish_non_exhaustive()
    }
}

impl ExternalLinkGate {
    pub fn new(opener: Arc<dyn ExternalOpener>) -> Self {
        Self { opener }
    }

    pub fn is_allowed(&self, url: &str) -> bool {
        is_allowed_external(url)
    }

    /// Opens `url` if it is allow-listed and silently drops it otherwise.
    pub fn open_external(&self, url: &str) {
        if !self.is_allowed(url) {
            trace!(url, "External link dropped");
            return;
        }

        if let Err(report) = self.opener.open(url) {
            warn!("Failed to open external link: {:?}", report);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::external_opener::OpenError;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingOpener(Mutex<Vec<String>>);

    impl ExternalOpener for RecordingOpener {
        fn open(&self, url: &str) -> error_stack::Result<(), OpenError> {
            self.0.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    fn opened_after(urls: &[&str]) -> Vec<String> {
        let opener = Arc::new(RecordingOpener::default());
        let gate = ExternalLinkGate::new(opener.clone());
        for url in urls {
            gate.open_external(url);
        }
        let opened = opener.0.lock().unwrap().clone();
        opened
    }

    #[test]
    fn test_prefix_match_opens() {
        assert_eq!(opened_after(&["https://frame.sh/docs"]), vec!["https://frame.sh/docs"]);
    }

    #[test]
    fn test_unknown_url_is_dropped() {
        assert!(opened_after(&["https://evil.example"]).is_empty());
    }

    #[test]
    fn test_mixed_batch_only_opens_allowed() {
        let opened = opened_after(&[
            "javascript:alert(1)",
            "https://github.com/frame-labs/frame/releases/tag/v0.6.0",
            "file:///etc/passwd",
            "https://frame.sh",
        ]);
        assert_eq!(
            opened,
            vec![
                "https://github.com/frame-labs/frame/releases/tag/v0.6.0",
                "https://frame.sh"
            ]
        );
    }
}
