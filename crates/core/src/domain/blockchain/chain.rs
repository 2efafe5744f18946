use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a network by its family tag and numeric id. Only ever used as a
/// lookup key into `main.networks`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainRef {
    pub id: u64,
    #[serde(rename = "type")]
    pub chain_type: Box<str>,
}

impl ChainRef {
    pub fn new(chain_type: impl Into<Box<str>>, id: u64) -> Self {
        Self {
            id,
            chain_type: chain_type.into(),
        }
    }
}

impl fmt::Display for ChainRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chain_type, self.id)
    }
}
