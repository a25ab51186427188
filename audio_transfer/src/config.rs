use crate::{error::Error, gain::Gain};

/// Upper bound on frames per block. Under memory overcommit a huge reservation succeeds
/// and only fails once the buffer is zeroed.
pub const MAX_BLOCK_SIZE: usize = 1 << 20;

/// Fixed for one run; built once from the command line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransferConfig {
    block_size: usize,
    gain: Gain,
}

impl TransferConfig {
    pub fn new(block_size: usize, gain: Gain) -> Result<Self, Error> {
        if block_size == 0 || block_size > MAX_BLOCK_SIZE {
            return Err(Error::BlockSize {
                frames: block_size,
                max: MAX_BLOCK_SIZE,
            });
        }
        Ok(TransferConfig { block_size, gain })
    }

    /// Frames per read/write call.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn gain(&self) -> Gain {
        self.gain
    }
}
