use std::fmt;

use serde::Deserialize;

/// View state handed to the Dapps panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelViewState {
    #[serde(default)]
    pub origin_id: Option<String>,
    #[serde(default)]
    pub expanded: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelView {
    Origin(String),
    Expanded,
    Preview,
}

/// The selected view together with the data the caller passed through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelSelection<T> {
    pub view: PanelView,
    pub data: T,
}

impl PanelView {
    /// Origin wins over expanded; anything else is a preview.
    pub fn select(state: &PanelViewState) -> Self {
        if let Some(origin_id) = &state.origin_id {
            PanelView::Origin(origin_id.clone())
        } else if state.expanded.unwrap_or(false) {
            PanelView::Expanded
        } else {
            PanelView::Preview
        }
    }
}

impl fmt::Display for PanelView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelView::Origin(origin_id) => write!(f, "origin:{origin_id}"),
            PanelView::Expanded => write!(f, "expanded"),
            PanelView::Preview => write!(f, "preview"),
        }
    }
}

pub fn compose<T>(state: &PanelViewState, data: T) -> PanelSelection<T> {
    PanelSelection {
        view: PanelView::select(state),
        data,
    }
}
