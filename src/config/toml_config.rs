use crate::core::summary::SummaryFormat;
use crate::domain::model::{ObjectKind, QuantumObject};
use crate::utils::error::{QuantumError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub objects: Vec<SeedObject>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    pub title: Option<String>,
    pub summary_format: Option<SummaryFormat>,
    pub demo: Option<bool>,
}

/// An object to preload into the registry, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SeedObject {
    Storage {
        id: String,
        stability: Option<f64>,
        supervisor: String,
    },
    Method {
        id: String,
        stability: Option<f64>,
        analysis_type: String,
        status_reporting_enabled: Option<bool>,
    },
}

impl SeedObject {
    pub fn id(&self) -> &str {
        match self {
            SeedObject::Storage { id, .. } | SeedObject::Method { id, .. } => id,
        }
    }

    pub fn build(&self) -> Result<QuantumObject> {
        let (mut object, stability) = match self {
            SeedObject::Storage {
                id,
                stability,
                supervisor,
            } => (QuantumObject::storage(id.as_str(), supervisor.as_str()), *stability),
            SeedObject::Method {
                id,
                stability,
                analysis_type,
                status_reporting_enabled,
            } => {
                let mut object = QuantumObject::method(id.as_str(), analysis_type.as_str());
                if let (Some(enabled), ObjectKind::Method(method)) =
                    (status_reporting_enabled, object.kind_mut())
                {
                    method.set_status_reporting_enabled(*enabled);
                }
                (object, *stability)
            }
        };

        if let Some(value) = stability {
            object.set_stability(value)?;
        }
        Ok(object)
    }
}

impl TomlConfig {
    /// Loads a session file from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(QuantumError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| QuantumError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` placeholders with environment values.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| QuantumError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        // Unknown variables are left in place.
        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(title) = &self.session.title {
            validate_non_empty_string("session.title", title)?;
        }

        for (index, seed) in self.objects.iter().enumerate() {
            validate_non_empty_string(&format!("objects[{}].id", index), seed.id())?;
            seed.build().map_err(|e| QuantumError::ConfigValidationError {
                field: format!("objects[{}].stability", index),
                message: e.to_string(),
            })?;
        }

        Ok(())
    }

    pub fn title(&self) -> Option<&str> {
        self.session.title.as_deref()
    }

    pub fn summary_format(&self) -> SummaryFormat {
        self.session.summary_format.unwrap_or_default()
    }

    pub fn demo_enabled(&self) -> bool {
        self.session.demo.unwrap_or(false)
    }

    pub fn build_objects(&self) -> Result<Vec<QuantumObject>> {
        self.objects.iter().map(SeedObject::build).collect()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
