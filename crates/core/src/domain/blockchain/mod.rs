pub mod chain;
pub mod explorer;
pub mod probe;
