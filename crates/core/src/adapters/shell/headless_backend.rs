use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use error_stack::Result;

use crate::domain::shell::surface::{SurfaceHandle, SurfaceSpec};
use crate::ports::shell_backend::{ShellBackend, SurfaceError, SurfaceEvents};

struct HeadlessSurface {
    handle: SurfaceHandle,
    spec: SurfaceSpec,
    events: Arc<dyn SurfaceEvents>,
}

/// Backend with no windowing system behind it. Surfaces are only recorded, so
/// the CLI can show what a real backend would be asked to build.
#[derive(Default)]
pub struct HeadlessBackend {
    next_id: AtomicU64,
    surfaces: Mutex<Vec<HeadlessSurface>>,
}

impl std::fmt::Debug for HeadlessBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeadlessBackend")
            .field("created", &self.next_id.load(Ordering::SeqCst))
            .finish()
    }
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spec(&self, handle: &SurfaceHandle) -> Option<SurfaceSpec> {
        self.with_surface(handle, |surface| surface.spec.clone())
    }

    /// Handlers registered for `handle`, as a real backend would hold them.
    pub fn events(&self, handle: &SurfaceHandle) -> Option<Arc<dyn SurfaceEvents>> {
        self.with_surface(handle, |surface| Arc::clone(&surface.events))
    }

    fn with_surface<T>(
        &self,
        handle: &SurfaceHandle,
        f: impl FnOnce(&HeadlessSurface) -> T,
    ) -> Option<T> {
        let surfaces = match self.surfaces.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        surfaces
            .iter()
            .find(|surface| surface.handle == *handle)
            .map(f)
    }
}

impl ShellBackend for HeadlessBackend {
    fn create_surface(
        &self,
        spec: SurfaceSpec,
        events: Arc<dyn SurfaceEvents>,
    ) -> Result<SurfaceHandle, SurfaceError> {
        let handle = SurfaceHandle {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            name: spec.name.clone(),
        };
        tracing::debug!(id = handle.id, surface = %handle.name, "Recorded headless surface");

        let mut surfaces = match self.surfaces.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        surfaces.push(HeadlessSurface {
            handle: handle.clone(),
            spec,
            events,
        });
        Ok(handle)
    }
}
