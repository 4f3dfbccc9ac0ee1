// Devices layer: concrete implementations of the Device capability set.

pub mod radio;
pub mod tv;

pub use radio::Radio;
pub use tv::Tv;
