use std::sync::{Arc, RwLock};

use error_stack::Result;

use super::app_config::{AppConfig, AppConfigError};
use crate::domain::ChainRef;
use crate::ports::network_config::NetworkConfigSource;

/// Process-wide configuration. Readers always see the latest loaded value;
/// only `reload`/`replace` write.
#[derive(Debug)]
pub struct ConfigStore {
    path: Option<String>,
    current: RwLock<Arc<AppConfig>>,
}

impl ConfigStore {
    pub fn load(path: impl Into<String>) -> Result<Self, AppConfigError> {
        let path = path.into();
        let config = AppConfig::load(&path)?;
        Ok(Self {
            path: Some(path),
            current: RwLock::new(Arc::new(config)),
        })
    }

    pub fn from_config(config: AppConfig) -> Self {
        Self {
            path: None,
            current: RwLock::new(Arc::new(config)),
        }
    }

    pub fn snapshot(&self) -> Arc<AppConfig> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&*guard),
            Err(poisoned) => Arc::clone(&*poisoned.into_inner()),
        }
    }

    pub fn replace(&self, config: AppConfig) {
        let mut guard = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Arc::new(config);
    }

    /// Re-reads the file this store was loaded from. A store built with
    /// `from_config` has nothing to re-read and keeps its value.
    pub fn reload(&self) -> Result<(), AppConfigError> {
        if let Some(path) = &self.path {
            let config = AppConfig::load(path)?;
            self.replace(config);
            tracing::debug!(path = %path, "Configuration reloaded");
        }
        Ok(())
    }
}

impl NetworkConfigSource for ConfigStore {
    fn explorer_url(&self, chain: &ChainRef) -> Option<String> {
        self.snapshot().explorer_url(chain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::config::app_config::NetworkConfig;
    use std::collections::HashMap;

    fn with_explorer(explorer: &str) -> AppConfig {
        let mut config = AppConfig::default();
        config.main.networks.insert(
            "ethereum".into(),
            HashMap::from([(
                "1".to_string(),
                NetworkConfig {
                    name: None,
                    explorer: Some(explorer.to_string()),
                },
            )]),
        );
        config
    }

    #[test]
    fn test_reads_see_replaced_value() {
        let store = ConfigStore::from_config(with_explorer("https://a.example"));
        let chain = ChainRef::new("ethereum", 1);
        assert_eq!(store.explorer_url(&chain).as_deref(), Some("https://a.example"));

        store.replace(with_explorer("https://b.example"));
        assert_eq!(store.explorer_url(&chain).as_deref(), Some("https://b.example"));
    }

    #[test]
    fn test_reload_without_path_keeps_value() {
        let store = ConfigStore::from_config(with_explorer("https://a.example"));
        store.reload().unwrap();
        assert_eq!(
            store.explorer_url(&ChainRef::new("ethereum", 1)).as_deref(),
            Some("https://a.example")
        );
    }
}
