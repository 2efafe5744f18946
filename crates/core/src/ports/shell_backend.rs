use std::sync::Arc;

use thiserror::Error;

use crate::domain::shell::surface::{
    NavigationDecision, SurfaceHandle, SurfaceSpec, WindowOpenDecision,
};

#[derive(Error, Debug)]
pub enum SurfaceError {
    #[error("Failed to create {kind} surface '{name}'")]
    CreationFailed { name: String, kind: String },
}

/// Callbacks a backend forwards from a live surface.
pub trait SurfaceEvents: Send + Sync {
    fn will_navigate(&self, url: &str) -> NavigationDecision;

    fn will_attach_webview(&self, src: &str) -> NavigationDecision;

    fn window_open(&self, url: &str) -> WindowOpenDecision;

    fn did_finish_load(&self, os_pid: u32);
}

/// The windowing layer that actually builds surfaces.
pub trait ShellBackend: Send + Sync {
    fn create_surface(
        &self,
        spec: SurfaceSpec,
        events: Arc<dyn SurfaceEvents>,
    ) -> error_stack::Result<SurfaceHandle, SurfaceError>;
}
