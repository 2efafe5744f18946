pub mod config;
pub mod opener;
pub mod probe;
pub mod shell;
