use crate::domain::ports::Device;

/// TV-like device. Starts powered off at volume 50, channel 1.
#[derive(Debug, Clone)]
pub struct Tv {
    enabled: bool,
    volume: i32,
    channel: i32,
}

impl Tv {
    pub fn new() -> Self {
        Self {
            enabled: false,
            volume: 50,
            channel: 1,
        }
    }
}

impl Default for Tv {
    fn default() -> Self {
        Self::new()
    }
}

impl Device for Tv {
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
