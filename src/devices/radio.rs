use crate::domain::ports::Device;

/// Radio-like device. Starts powered off at volume 30, channel 100.
#[derive(Debug, Clone)]
pub struct Radio {
    enabled: bool,
    volume: i32,
    channel: i32,
}

impl Radio {
    pub fn new() -> Self {
        Self {
            enabled: false,
            volume: 30,
            channel: 100,
        }
    }
}

impl Default for Radio {
    fn default() -> Self {
        Self::new()
    }
}

impl Device for Radio {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn enable(&mut self) {
        self.enabled = true;
    }

    fn disable(&mut self) {
        self.enabled = false;
    }

    fn volume(&self) -> i32 {
        self.volume
    }

    fn set_volume(&mut self, percent: i32) {
        self.volume = percent;
    }

    fn channel(&self) -> i32 {
        self.channel
    }

    fn set_channel(&mut self, channel: i32) {
        self.channel = channel;
    }
}
