use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Device variant. Variants differ only in their constructor defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceKind {
    Tv,
    Radio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RemoteKind {
    Basic,
    Advanced,
}

/// A single user intent, dispatched to a remote by the session runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Command {
    TogglePower,
    VolumeUp,
    VolumeDown,
    ChannelUp,
    ChannelDown,
    Mute,
}

impl Command {
    /// Commands outside the basic capability set need the advanced remote.
    pub fn requires_advanced(&self) -> bool {
        matches!(self, Command::Mute)
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Command::TogglePower => "toggle-power",
            Command::VolumeUp => "volume-up",
            Command::VolumeDown => "volume-down",
            Command::ChannelUp => "channel-up",
            Command::ChannelDown => "channel-down",
            Command::Mute => "mute",
        };
        write!(f, "{}", name)
    }
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceKind::Tv => write!(f, "tv"),
            DeviceKind::Radio => write!(f, "radio"),
        }
    }
}

impl std::fmt::Display for RemoteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemoteKind::Basic => write!(f, "basic"),
            RemoteKind::Advanced => write!(f, "advanced"),
        }
    }
}
