pub mod command_handler;
pub mod external_opener;
pub mod network_config;
pub mod shell_backend;
pub mod url_probe;
