pub mod remote;
pub mod session;

pub use crate::domain::model::{Command, DeviceKind, RemoteKind};
pub use crate::domain::ports::Device;
pub use crate::utils::error::Result;
