use audio_file::Sample;

/// What one run moved. Counts actual frames, so a short final block is not overstated.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Stats {
    pub blocks: u64,
    pub frames: u64,
    pub channels: u16,
    /// Bytes per output sample.
    pub sample_width: usize,
    /// Largest absolute sample written.
    pub peak: Sample,
}

impl Stats {
    pub fn new(channels: u16, sample_width: usize) -> Self {
        Stats {
            channels,
            sample_width,
            ..Default::default()
        }
    }

    pub fn record(&mut self, frames: usize, peak: Sample) {
        self.blocks += 1;
        self.frames += frames as u64;
        self.peak = self.peak.max(peak);
    }

    pub fn samples(&self) -> u64 {
        self.frames * self.channels as u64
    }

    pub fn bytes(&self) -> u64 {
        self.samples() * self.sample_width as u64
    }

    pub fn clipped(&self) -> bool {
        self.peak > 1.0
    }
}
