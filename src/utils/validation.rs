use crate::domain::model::{Command, RemoteKind};
use crate::utils::error::{Result, ZapperError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ZapperError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty".to_string(),
        });
    }
    Ok(())
}

/// The command list must be non-empty and fit the capability set of the
/// chosen remote.
pub fn validate_commands(
    field_name: &str,
    commands: &[Command],
    remote: RemoteKind,
) -> Result<()> {
    if commands.is_empty() {
        return Err(ZapperError::InvalidConfigValue {
            field: field_name.to_string(),
            value: String::new(),
            reason: "At least one command is required".to_string(),
        });
    }

    if remote == RemoteKind::Basic {
        if let Some(command) = commands.iter().find(|c| c.requires_advanced()) {
            return Err(ZapperError::InvalidConfigValue {
                field: field_name.to_string(),
                value: command.to_string(),
                reason: format!(
                    "Command '{}' needs the advanced remote (use --remote advanced)",
                    command
                ),
            });
        }
    }

    Ok(())
}
