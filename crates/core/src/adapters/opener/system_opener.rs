use error_stack::{Result, ResultExt};

use crate::ports::external_opener::{ExternalOpener, OpenError};

/// Opens URLs with the desktop's default handler. Applies no policy of its
/// own; gating happens in `ExternalLinkGate`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl ExternalOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<(), OpenError> {
        open::that_detached(url).change_context_lazy(|| OpenError::LaunchFailed {
            url: url.to_string(),
        })?;
        tracing::info!(url, "Opened in external handler");
        Ok(())
    }
}
