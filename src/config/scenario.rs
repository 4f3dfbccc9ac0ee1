use crate::domain::model::{Command, DeviceKind, RemoteKind};
use crate::utils::error::Result;
use crate::utils::validation::{validate_commands, validate_non_empty, Validate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A scripted run loaded from a TOML file: which device, which remote, and
/// the command sequence to play against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub scenario: ScenarioMeta,
    pub device: DeviceKind,
    pub remote: RemoteKind,
    pub commands: Vec<Command>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioMeta {
    pub name: String,
    pub description: Option<String>,
}

impl ScenarioConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ScenarioConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

impl Validate for ScenarioConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty("scenario.name", &self.scenario.name)?;
        validate_commands("commands", &self.commands, self.remote)?;
        Ok(())
    }
}
