// Domain layer: command/device vocabulary and the device port. No external
// dependencies beyond serde and clap derives.

pub mod model;
pub mod ports;
