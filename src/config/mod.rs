pub mod scenario;

use crate::domain::model::{Command, DeviceKind, RemoteKind};
use crate::utils::error::Result;
use crate::utils::validation::{validate_commands, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "zapper")]
#[command(about = "Drive simulated devices through basic or advanced remotes")]
pub struct CliConfig {
    /// Device to control
    #[arg(long, value_enum)]
    pub device: Option<DeviceKind>,

    /// Remote variant to use
    #[arg(long, value_enum)]
    pub remote: Option<RemoteKind>,

    /// Comma-separated command sequence, e.g. toggle-power,volume-up
    #[arg(long, value_enum, value_delimiter = ',')]
    pub commands: Vec<Command>,

    /// Run a scenario file instead of the flags above
    #[arg(long)]
    pub scenario: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn effective_device(&self) -> DeviceKind {
        self.device.unwrap_or(DeviceKind::Tv)
    }

    pub fn effective_remote(&self) -> RemoteKind {
        self.remote.unwrap_or(RemoteKind::Basic)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        // Scenario files carry their own device/remote/commands and are
        // validated after loading.
        if self.scenario.is_some() {
            return Ok(());
        }
        if self.commands.is_empty() {
            // No commands at all means the built-in demo sequence.
            return Ok(());
        }
        validate_commands("commands", &self.commands, self.effective_remote())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_mode_passes_validation() {
        let config = CliConfig::parse_from(["zapper"]);
        assert!(config.validate().is_ok());
        assert_eq!(config.effective_device(), DeviceKind::Tv);
        assert_eq!(config.effective_remote(), RemoteKind::Basic);
    }

    #[test]
    fn command_list_parses_from_comma_separated_flag() {
        let config = CliConfig::parse_from([
            "zapper",
            "--device",
            "radio",
            "--remote",
            "advanced",
            "--commands",
            "toggle-power,mute",
        ]);
        assert_eq!(config.effective_device(), DeviceKind::Radio);
        assert_eq!(
            config.commands,
            vec![Command::TogglePower, Command::Mute]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn mute_on_basic_remote_fails_validation() {
        let config = CliConfig::parse_from(["zapper", "--commands", "mute"]);
        assert!(config.validate().is_err());
    }
}
