use crate::core::Device;

/// Basic remote: translates coarse user intents into Device operations.
///
/// Borrows the device for its own lifetime and never reassigns it; the bound
/// `D: Device + ?Sized` lets the same remote drive a concrete device or a
/// `dyn Device` behind a reference.
pub struct RemoteControl<'a, D: Device + ?Sized> {
    device: &'a mut D,
}

impl<'a, D: Device + ?Sized> RemoteControl<'a, D> {
    pub fn new(device: &'a mut D) -> Self {
        Self { device }
    }

    pub fn toggle_power(&mut self) {
        if self.device.is_enabled() {
            self.device.disable();
        } else {
            self.device.enable();
        }
    }

    /// Drops volume by 10. No floor, so repeated calls can drive it negative.
    pub fn volume_down(&mut self) {
        self.device.set_volume(self.device.volume() - 10);
    }

    /// Raises volume by 10. No ceiling.
    pub fn volume_up(&mut self) {
        self.device.set_volume(self.device.volume() + 10);
    }

    pub fn channel_down(&mut self) {
        self.device.set_channel(self.device.channel() - 1);
    }

    pub fn channel_up(&mut self) {
        self.device.set_channel(self.device.channel() + 1);
    }
}

/// Advanced remote: everything the basic remote does, plus mute.
pub struct AdvancedRemote<'a, D: Device + ?Sized> {
    remote: RemoteControl<'a, D>,
}

impl<'a, D: Device + ?Sized> AdvancedRemote<'a, D> {
    pub fn new(device: &'a mut D) -> Self {
        Self {
            remote: RemoteControl::new(device),
        }
    }

    /// Sets volume to exactly 0. Power and channel stay untouched, and the
    /// prior volume is not remembered (there is no unmute).
    pub fn mute(&mut self) {
        self.remote.device.set_volume(0);
    }
}

impl<'a, D: Device + ?Sized> std::ops::Deref for AdvancedRemote<'a, D> {
    type Target = RemoteControl<'a, D>;

    fn deref(&self) -> &Self::Target {
        &self.remote
    }
}

impl<'a, D: Device + ?Sized> std::ops::DerefMut for AdvancedRemote<'a, D> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.remote
    }
}
