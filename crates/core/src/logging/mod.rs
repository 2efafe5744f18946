#[cfg(test)]
pub(crate) mod capture;
pub mod formatter;
