/// Capability set every controllable device exposes. Remotes are written
/// against this trait only, so device variants and remote variants can grow
/// independently.
///
/// Setters store their argument verbatim. There is deliberately no clamping
/// or range validation anywhere in the contract: volume and channel are
/// unconstrained integers and every operation is total.
pub trait Device {
    /// Current power state.
    fn is_enabled(&self) -> bool;

    /// Power on. Idempotent.
    fn enable(&mut self);

    /// Power off. Idempotent.
    fn disable(&mut self);

    fn volume(&self) -> i32;

    /// Stores `percent` as-is, including negative or >100 values.
    fn set_volume(&mut self, percent: i32);

    fn channel(&self) -> i32;

    /// Stores `channel` as-is, unchecked.
    fn set_channel(&mut self, channel: i32);
}
