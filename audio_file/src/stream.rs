use crate::{error::Result, properties::Properties, Sample};
use std::path::Path;

/// Anything frames can be pulled from in fixed-size blocks.
pub trait FrameSource {
    fn path(&self) -> &Path;

    fn properties(&self) -> &Properties;

    /// Fill `buf` with up to `buf.len() / channels` interleaved frames.
    /// Returns the number of frames read; zero means end of stream.
    fn read_frames(&mut self, buf: &mut [Sample]) -> Result<usize>;

    fn close(self) -> Result<()>
    where
        Self: Sized;
}

/// Anything frames can be pushed to.
pub trait FrameSink {
    fn path(&self) -> &Path;

    fn properties(&self) -> &Properties;

    /// Write every whole frame in `buf`, returning how many frames were accepted.
    fn write_frames(&mut self, buf: &[Sample]) -> Result<usize>;

    fn close(self) -> Result<()>
    where
        Self: Sized;
}
