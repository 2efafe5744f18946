/// Result of checking whether an explorer page exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Exists,
    /// The server answered, but with a redirect or a non-success status.
    NotExists { status: u16 },
    /// The request never produced a response.
    ProbeFailed { reason: String },
}

impl ProbeOutcome {
    pub fn exists(&self) -> bool {
        matches!(self, ProbeOutcome::Exists)
    }

    /// A response only counts when it was answered directly with a 2xx status.
    pub fn from_status(status: u16, redirected: bool) -> Self {
        if !redirected && (200..300).contains(&status) {
            ProbeOutcome::Exists
        } else {
            ProbeOutcome::NotExists { status }
        }
    }
}
