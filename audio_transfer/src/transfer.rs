//! # Transfer loop
//!
//! read block → apply gain → write block, until the source reports zero frames.
//! Any error ends the loop at once; nothing is retried.

use crate::{
    buffer::FrameBuffer,
    config::TransferConfig,
    error::Error,
    gain::peak,
    stats::Stats,
};
use audio_file::{FrameSink, FrameSource};

pub fn transfer<S, K>(source: &mut S, sink: &mut K, config: &TransferConfig) -> Result<Stats, Error>
where
    S: FrameSource,
    K: FrameSink,
{
    let channels = source.properties().channels;
    if sink.properties().channels != channels {
        return Err(Error::ChannelMismatch {
            source_path: source.path().to_path_buf(),
            source_channels: channels,
            sink_path: sink.path().to_path_buf(),
            sink_channels: sink.properties().channels,
        });
    }

    let mut buffer = FrameBuffer::new(config.block_size(), channels as usize)?;
    let mut stats = Stats::new(channels, sink.properties().sample_type.width());
    let gain = config.gain();

    loop {
        let read = source.read_frames(buffer.as_mut_slice())?;
        if read == 0 {
            break;
        }

        gain.apply(buffer.frames_mut(read));

        let block = buffer.frames(read);
        let written = sink.write_frames(block)?;
        if written < read {
            return Err(Error::ShortWrite {
                path: sink.path().to_path_buf(),
                written,
                expected: read,
            });
        }
        stats.record(read, peak(block));
    }

    log::debug!(
        "Transferred {} frames in {} blocks from {} to {}",
        stats.frames,
        stats.blocks,
        source.path().display(),
        sink.path().display()
    );
    Ok(stats)
}

/// Read `source` to the end and return its largest absolute sample.
pub fn scan_peak<S: FrameSource>(source: &mut S, block_size: usize) -> Result<f32, Error> {
    let mut buffer = FrameBuffer::new(block_size, source.properties().channels as usize)?;
    let mut max: f32 = 0.0;
    loop {
        let read = source.read_frames(buffer.as_mut_slice())?;
        if read == 0 {
            return Ok(max);
        }
        max = max.max(peak(buffer.frames(read)));
    }
}
