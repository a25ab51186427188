//! # Frame buffer
//!
//! Flat interleaved scratch space reused for every block of one run.

use crate::error::Error;
use audio_file::Sample;

pub struct FrameBuffer {
    data: Vec<Sample>,
    channels: usize,
}

impl FrameBuffer {
    pub fn new(capacity: usize, channels: usize) -> Result<Self, Error> {
        let allocation = Error::Allocation {
            frames: capacity,
            channels,
        };
        let len = match capacity.checked_mul(channels) {
            Some(len) if len > 0 => len,
            _ => return Err(allocation),
        };
        let mut data = Vec::new();
        if data.try_reserve_exact(len).is_err() {
            return Err(allocation);
        }
        data.resize(len, 0.0);
        Ok(FrameBuffer { data, channels })
    }

    /// Whole buffer, for a source to fill.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Sample] {
        &mut self.data
    }

    /// First `frames` frames.
    #[inline]
    pub fn frames(&self, frames: usize) -> &[Sample] {
        &self.data[..frames * self.channels]
    }

    #[inline]
    pub fn frames_mut(&mut self, frames: usize) -> &mut [Sample] {
        &mut self.data[..frames * self.channels]
    }
}
