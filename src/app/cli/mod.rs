//! CLI module containing argument parsing and manifest discovery

pub mod args;
pub mod config;

#[cfg(test)]
mod tests;
