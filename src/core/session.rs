use crate::core::remote::{AdvancedRemote, RemoteControl};
use crate::core::{Command, Device, RemoteKind, Result};
use crate::utils::error::ZapperError;

/// Owns one device and drives a command sequence through the chosen remote,
/// logging each step and the resulting state.
pub struct Session<D: Device> {
    device: D,
    remote: RemoteKind,
}

impl<D: Device> Session<D> {
    pub fn new(device: D, remote: RemoteKind) -> Self {
        Self { device, remote }
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn run(&mut self, commands: &[Command]) -> Result<()> {
        tracing::info!(
            "Running {} command(s) through the {} remote",
            commands.len(),
            self.remote
        );

        for (step, command) in commands.iter().enumerate() {
            tracing::info!("Step {}: {}", step + 1, command);
            self.apply(*command)?;
            tracing::debug!(
                enabled = self.device.is_enabled(),
                volume = self.device.volume(),
                channel = self.device.channel(),
                "State after {}",
                command
            );
        }

        tracing::info!(
            enabled = self.device.is_enabled(),
            volume = self.device.volume(),
            channel = self.device.channel(),
            "Final device state"
        );
        Ok(())
    }

    fn apply(&mut self, command: Command) -> Result<()> {
        match self.remote {
            RemoteKind::Basic if command.requires_advanced() => {
                Err(ZapperError::UnsupportedCommand {
                    command: command.to_string(),
                    remote: self.remote.to_string(),
                })
            }
            RemoteKind::Basic => {
                let mut remote = RemoteControl::new(&mut self.device);
                Self::dispatch_basic(&mut remote, command);
                Ok(())
            }
            RemoteKind::Advanced => {
                let mut remote = AdvancedRemote::new(&mut self.device);
                match command {
                    Command::Mute => remote.mute(),
                    other => Self::dispatch_basic(&mut remote, other),
                }
                Ok(())
            }
        }
    }

    fn dispatch_basic(remote: &mut RemoteControl<'_, D>, command: Command) {
        match command {
            Command::TogglePower => remote.toggle_power(),
            Command::VolumeUp => remote.volume_up(),
            Command::VolumeDown => remote.volume_down(),
            Command::ChannelUp => remote.channel_up(),
            Command::ChannelDown => remote.channel_down(),
            // both dispatch sites check requires_advanced() first
            Command::Mute => {}
        }
    }
}
