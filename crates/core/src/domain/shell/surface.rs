use serde::{Deserialize, Serialize};
use strum::Display;

use super::web_preferences::WebPreferences;

#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SurfaceKind {
    /// A top-level window.
    #[strum(to_string = "window")]
    Window,
    /// Embedded content view with its own storage partition.
    #[strum(to_string = "view")]
    View { identity: String },
    #[strum(to_string = "overlay")]
    Overlay,
}

impl SurfaceKind {
    /// Storage partition for the surface, if it is bound to an identity.
    pub fn partition(&self) -> Option<String> {
        match self {
            SurfaceKind::View { identity } => Some(format!("persist:{identity}")),
            SurfaceKind::Window | SurfaceKind::Overlay => None,
        }
    }
}

/// Construction options a caller may pass for a surface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub web_preferences: WebPreferences,
}

/// Everything a backend needs to build one surface. Only produced by
/// `SurfaceFactory`, so the preferences are always hardened.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceSpec {
    pub name: String,
    pub kind: SurfaceKind,
    pub options: WindowOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum NavigationDecision {
    Allow,
    Block,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum WindowOpenDecision {
    Allow,
    Deny,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurfaceHandle {
    pub id: u64,
    pub name: String,
}
