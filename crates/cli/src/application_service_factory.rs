use std::sync::Arc;

use wallet_shell_core::{
    adapters::{
        config::{app_config::AppConfig, store::ConfigStore},
        opener::system_opener::SystemOpener,
        probe::reqwest_probe::ReqwestProbe,
        shell::headless_backend::HeadlessBackend,
    },
    BlockExplorerService, ExternalLinkGate, ShellRouter, SurfaceFactory,
};

/// Everything the CLI needs, wired against the real adapters.
#[derive(Debug)]
pub struct ShellContext {
    pub config_path: String,
    pub store: Arc<ConfigStore>,
    pub router: Arc<ShellRouter>,
    pub backend: Arc<HeadlessBackend>,
    pub surfaces: Arc<SurfaceFactory>,
}

pub struct ApplicationServiceFactory;

impl ApplicationServiceFactory {
    pub fn create() -> Result<ShellContext, Box<dyn std::error::Error>> {
        let config_path = AppConfig::default_path();
        let store = Arc::new(
            ConfigStore::load(config_path.clone())
                .map_err(|e| format!("Failed to load configuration: {:?}", e))?,
        );
        let probe = Arc::new(
            ReqwestProbe::new().map_err(|e| format!("Failed to set up probes: {:?}", e))?,
        );
        let opener = Arc::new(SystemOpener);

        let router = ShellRouter::new(
            ExternalLinkGate::new(opener.clone()),
            BlockExplorerService::new(store.clone(), probe, opener),
        );

        let backend = Arc::new(HeadlessBackend::new());
        let preload = store.snapshot().shell.preload_path();
        let surfaces = SurfaceFactory::new(backend.clone(), preload);

        Ok(ShellContext {
            config_path,
            store,
            router: Arc::new(router),
            backend,
            surfaces: Arc::new(surfaces),
        })
    }
}
