pub mod config;
pub mod core;
pub mod devices;
pub mod domain;
pub mod utils;

pub use crate::config::{scenario::ScenarioConfig, CliConfig};
pub use crate::core::{
    remote::{AdvancedRemote, RemoteControl},
    session::Session,
};
pub use crate::devices::{Radio, Tv};
pub use crate::domain::model::{Command, DeviceKind, RemoteKind};
pub use crate::domain::ports::Device;
pub use crate::utils::error::{Result, ZapperError};
