pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::shell::Shell;
pub use config::{toml_config::TomlConfig, SessionSettings};
pub use core::{registry::ObjectRegistry, summary::SystemSummary};
pub use domain::model::{DangerTier, ObjectKind, QuantumObject};
pub use domain::ports::EmergencyCooling;
pub use utils::error::{QuantumError, Result};
