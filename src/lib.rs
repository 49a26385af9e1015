pub mod app;
pub mod core;
pub mod manifest;
pub mod report;
pub mod resolver;

pub use manifest::BuildManifest;
pub use resolver::{VersionInfo, VersionResolver};
