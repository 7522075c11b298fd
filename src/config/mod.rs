pub mod toml_config;

use crate::core::registry::ObjectRegistry;
use crate::core::summary::SummaryFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use toml_config::TomlConfig;

pub const DEFAULT_TITLE: &str = "QUANTUM STORAGE CONTROL PANEL";

#[cfg(feature = "cli")]
use crate::utils::validation::validate_path;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "quantum-chaos")]
#[command(about = "Interactive control panel for quantum storage and analysis objects")]
pub struct CliConfig {
    /// Path to a TOML session file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, help = "Preload the demo object set")]
    pub demo: bool,

    #[arg(long, help = "Run the scripted walkthrough instead of the menu")]
    pub walkthrough: bool,

    #[arg(long, value_enum, help = "Format of the report printed on exit")]
    pub summary_format: Option<SummaryFormat>,

    #[arg(long, help = "Override the control panel title")]
    pub title: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn load_toml(&self) -> Result<TomlConfig> {
        match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading session file: {}", path);
                TomlConfig::from_file(path)
            }
            None => Ok(TomlConfig::default()),
        }
    }

    /// Merges the session file with command-line flags; flags win.
    pub fn resolve(&self) -> Result<SessionSettings> {
        let file = self.load_toml()?;

        let settings = SessionSettings {
            title: self
                .title
                .clone()
                .or_else(|| file.title().map(str::to_string))
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            summary_format: self.summary_format.unwrap_or_else(|| file.summary_format()),
            demo: self.demo || file.demo_enabled(),
            walkthrough: self.walkthrough,
            seed: file,
        };
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        if let Some(title) = &self.title {
            validate_non_empty_string("title", title)?;
        }
        Ok(())
    }
}

/// Everything a session needs once flags and file are combined.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub title: String,
    pub summary_format: SummaryFormat,
    pub demo: bool,
    pub walkthrough: bool,
    pub seed: TomlConfig,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            summary_format: SummaryFormat::default(),
            demo: false,
            walkthrough: false,
            seed: TomlConfig::default(),
        }
    }
}

impl SessionSettings {
    /// Demo objects first (when enabled), then the file's seeds.
    /// A walkthrough with nothing to show falls back to the demo set.
    pub fn build_registry(&self) -> Result<ObjectRegistry> {
        let seeds = self.seed.build_objects()?;
        let use_demo = self.demo || (self.walkthrough && seeds.is_empty());

        let mut registry = if use_demo {
            ObjectRegistry::demo()?
        } else {
            ObjectRegistry::new()
        };
        registry.extend(seeds);

        tracing::debug!(objects = registry.len(), demo = use_demo, "Registry prepared");
        Ok(registry)
    }
}

impl Validate for SessionSettings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("title", &self.title)?;
        self.seed.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_build_empty_registry() {
        let settings = SessionSettings::default();
        assert!(settings.validate().is_ok());
        assert!(settings.build_registry().unwrap().is_empty());
    }

    #[test]
    fn test_walkthrough_falls_back_to_demo() {
        let settings = SessionSettings {
            walkthrough: true,
            ..SessionSettings::default()
        };
        assert_eq!(settings.build_registry().unwrap().len(), 4);
    }

    #[test]
    fn test_demo_and_seeds_are_combined() {
        let seed = TomlConfig::from_toml_str(
            r#"
[[objects]]
kind = "storage"
id = "AMB-900"
supervisor = "Extra"
"#,
        )
        .unwrap();
        let settings = SessionSettings {
            demo: true,
            seed,
            ..SessionSettings::default()
        };
        let registry = settings.build_registry().unwrap();
        assert_eq!(registry.len(), 5);
        assert_eq!(registry.get(4).unwrap().id(), "AMB-900");
    }

    #[test]
    fn test_build_registry_rejects_out_of_range_seed() {
        let seed = TomlConfig::from_toml_str(
            r#"
[[objects]]
kind = "storage"
id = "AMB-901"
stability = 140.0
supervisor = "Extra"
"#,
        )
        .unwrap();
        let settings = SessionSettings {
            seed,
            ..SessionSettings::default()
        };

        let err = settings.build_registry().unwrap_err();
        assert!(err.user_friendly_message().contains("stability must be between 0 and 100"));
        assert_ne!(err.severity().exit_code(), 0);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_flags_override_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[session]\ntitle = \"FROM FILE\"\nsummary_format = \"json\"\n")
            .unwrap();

        let cli = CliConfig::parse_from([
            "quantum-chaos",
            "--config",
            file.path().to_str().unwrap(),
            "--title",
            "FROM FLAG",
        ]);
        assert!(cli.validate().is_ok());

        let settings = cli.resolve().unwrap();
        assert_eq!(settings.title, "FROM FLAG");
        assert_eq!(settings.summary_format, SummaryFormat::Json);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_missing_config_file_is_an_error() {
        let cli = CliConfig::parse_from(["quantum-chaos", "--config", "/nonexistent/session.toml"]);
        assert!(cli.resolve().is_err());
    }
}
