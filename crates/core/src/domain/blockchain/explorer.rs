use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The action a "view in explorer" request asks for, as sent by the UI. Every
/// field is optional on the wire; see [`ExplorerRequest::action`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorerRequest {
    #[serde(rename = "type")]
    pub kind: ExplorerActionKind,
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub token_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum ExplorerActionKind {
    #[serde(rename = "tx")]
    #[strum(serialize = "tx")]
    Transaction,
    #[serde(rename = "address")]
    #[strum(serialize = "address")]
    Address,
    #[serde(rename = "token")]
    #[strum(serialize = "token")]
    Token,
}

/// A validated explorer action. Each variant carries exactly the fields it
/// needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplorerAction {
    Transaction { hash: String },
    Address { address: String },
    Token { address: String, token_id: Option<String> },
}

impl ExplorerRequest {
    pub fn transaction(hash: impl Into<String>) -> Self {
        Self {
            kind: ExplorerActionKind::Transaction,
            hash: Some(hash.into()),
            address: None,
            token_id: None,
        }
    }

    pub fn address(address: impl Into<String>) -> Self {
        Self {
            kind: ExplorerActionKind::Address,
            hash: None,
            address: Some(address.into()),
            token_id: None,
        }
    }

    pub fn token(address: impl Into<String>, token_id: Option<String>) -> Self {
        Self {
            kind: ExplorerActionKind::Token,
            hash: None,
            address: Some(address.into()),
            token_id,
        }
    }

    /// Returns `None` when the field required by `kind` is missing or empty.
    pub fn action(&self) -> Option<ExplorerAction> {
        let present = |field: &Option<String>| field.clone().filter(|value| !value.is_empty());

        match self.kind {
            ExplorerActionKind::Transaction => {
                present(&self.hash).map(|hash| ExplorerAction::Transaction { hash })
            }
            ExplorerActionKind::Address => {
                present(&self.address).map(|address| ExplorerAction::Address { address })
            }
            ExplorerActionKind::Token => present(&self.address).map(|address| ExplorerAction::Token {
                address,
                token_id: present(&self.token_id),
            }),
        }
    }
}

/// Strips every trailing `/` from a configured explorer base.
pub fn normalize_base_url(raw: &str) -> &str {
    raw.trim_end_matches('/')
}
