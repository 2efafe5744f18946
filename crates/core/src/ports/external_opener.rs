use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpenError {
    #[error("Failed to launch external handler for {url}")]
    LaunchFailed { url: String },
}

/// Hands a URL to the platform's default external application.
pub trait ExternalOpener: Send + Sync {
    fn open(&self, url: &str) -> error_stack::Result<(), OpenError>;
}
