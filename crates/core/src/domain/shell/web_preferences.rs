use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Blink feature switched off on every surface. Middle-click activation can be
/// abused to open links the page never offered.
pub const DISABLED_BLINK_FEATURES: &str = "Auxclick";

/// Preferences for a browsing context. `None` leaves the platform default in
/// place; keys the shell does not model travel in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_isolation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webview_tag: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sandbox: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_integration: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_blink_features: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preload: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_throttling: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Keys owned by the baseline. They are stripped from `extra` so a raw entry
/// cannot shadow the typed field.
const BASELINE_KEYS: &[&str] = &[
    "contextIsolation",
    "webviewTag",
    "sandbox",
    "nodeIntegration",
    "nodeIntegrationInSubFrames",
    "nodeIntegrationInWorker",
    "disableBlinkFeatures",
    "preload",
];

impl WebPreferences {
    /// Layers `overrides` on top of `self`, field by field.
    pub fn merged_with(mut self, overrides: WebPreferences) -> Self {
        macro_rules! take {
            ($($field:ident),*) => {
                $(if overrides.$field.is_some() { self.$field = overrides.$field; })*
            };
        }
        take!(
            context_isolation,
            webview_tag,
            sandbox,
            node_integration,
            disable_blink_features,
            preload,
            partition,
            background_throttling
        );
        self.extra.extend(overrides.extra);
        self
    }

    /// Re-asserts the isolation baseline. Runs after every merge so callers
    /// can add preferences but never loosen these.
    pub fn hardened(mut self, preload: &Path) -> Self {
        self.context_isolation = Some(true);
        self.webview_tag = Some(false);
        self.sandbox = Some(true);
        self.node_integration = Some(false);
        self.disable_blink_features = Some(DISABLED_BLINK_FEATURES.to_string());
        self.preload = Some(preload.to_path_buf());
        for key in BASELINE_KEYS {
            self.extra.remove(*key);
        }
        self
    }

    pub fn is_hardened(&self) -> bool {
        self.context_isolation == Some(true)
            && self.webview_tag == Some(false)
            && self.sandbox == Some(true)
            && self.node_integration == Some(false)
            && self.disable_blink_features.as_deref() == Some(DISABLED_BLINK_FEATURES)
            && self.preload.is_some()
            && !BASELINE_KEYS.iter().any(|key| self.extra.contains_key(*key))
    }
}
