use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use error_stack::{Result, ResultExt};
use tracing::{debug, info, instrument};

use crate::domain::shell::surface::{
    NavigationDecision, SurfaceHandle, SurfaceKind, SurfaceSpec, WindowOpenDecision, WindowOptions,
};
use crate::domain::shell::web_preferences::WebPreferences;
use crate::ports::shell_backend::{ShellBackend, SurfaceError, SurfaceEvents};

/// Handlers attached to every surface. Page content can never navigate the
/// surface it lives in, attach nested webviews or spawn windows.
#[derive(Debug)]
pub struct SurfaceGuard {
    name: String,
    loaded: AtomicBool,
}

impl SurfaceGuard {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            loaded: AtomicBool::new(false),
        }
    }
}

impl SurfaceEvents for SurfaceGuard {
    fn will_navigate(&self, url: &str) -> NavigationDecision {
        debug!(surface = %self.name, url, "Blocked navigation");
        NavigationDecision::Block
    }

    fn will_attach_webview(&self, src: &str) -> NavigationDecision {
        debug!(surface = %self.name, src, "Blocked webview attachment");
        NavigationDecision::Block
    }

    fn window_open(&self, url: &str) -> WindowOpenDecision {
        debug!(surface = %self.name, url, "Denied window open");
        WindowOpenDecision::Deny
    }

    fn did_finish_load(&self, os_pid: u32) {
        if !self.loaded.swap(true, Ordering::SeqCst) {
            info!(surface = %self.name, os_pid, "Surface content loaded");
        }
    }
}

/// Builds windows and views with the shell's fixed isolation profile.
pub struct SurfaceFactory {
    backend: Arc<dyn ShellBackend>,
    preload: PathBuf,
}

impl std::fmt::Debug for SurfaceFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurfaceFactory")
            .field("preload", &self.preload)
            .finish_non_exhaustive()
    }
}

impl SurfaceFactory {
    pub fn new(backend: Arc<dyn ShellBackend>, preload: impl Into<PathBuf>) -> Self {
        Self {
            backend,
            preload: preload.into(),
        }
    }

    /// Merges caller preferences over the options' own, binds view partitions,
    /// then re-applies the baseline so it wins on its keys.
    pub fn spec(
        &self,
        name: &str,
        kind: SurfaceKind,
        options: Option<WindowOptions>,
        web_preferences: Option<WebPreferences>,
    ) -> SurfaceSpec {
        let mut options = options.unwrap_or_default();

        let mut preferences = std::mem::take(&mut options.web_preferences)
            .merged_with(web_preferences.unwrap_or_default());
        if let Some(partition) = kind.partition() {
            preferences.partition = Some(partition);
        }
        options.web_preferences = preferences.hardened(&self.preload);

        SurfaceSpec {
            name: name.to_string(),
            kind,
            options,
        }
    }

    #[instrument(skip(self, options, web_preferences))]
    pub fn create(
        &self,
        name: &str,
        kind: SurfaceKind,
        options: Option<WindowOptions>,
        web_preferences: Option<WebPreferences>,
    ) -> Result<SurfaceHandle, SurfaceError> {
        let spec = self.spec(name, kind, options, web_preferences);
        let kind_label = spec.kind.to_string();
        info!(surface = name, kind = %kind_label, "Creating surface");

        let guard: Arc<dyn SurfaceEvents> = Arc::new(SurfaceGuard::new(name));
        self.backend
            .create_surface(spec, guard)
            .change_context_lazy(|| SurfaceError::CreationFailed {
                name: name.to_string(),
                kind: kind_label.clone(),
            })
    }

    pub fn create_window(
        &self,
        name: &str,
        options: Option<WindowOptions>,
        web_preferences: Option<WebPreferences>,
    ) -> Result<SurfaceHandle, SurfaceError> {
        self.create(name, SurfaceKind::Window, options, web_preferences)
    }

    /// Content view whose storage is partitioned by `identity`.
    pub fn create_view(
        &self,
        name: &str,
        identity: &str,
        web_preferences: Option<WebPreferences>,
    ) -> Result<SurfaceHandle, SurfaceError> {
        let kind = SurfaceKind::View {
            identity: identity.to_string(),
        };
        self.create(name, kind, None, web_preferences)
    }

    pub fn create_overlay(
        &self,
        name: &str,
        web_preferences: Option<WebPreferences>,
    ) -> Result<SurfaceHandle, SurfaceError> {
        self.create(name, SurfaceKind::Overlay, None, web_preferences)
    }
}
