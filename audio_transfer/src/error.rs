use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    File(#[from] audio_file::Error),
    #[error(
        "Error writing to file: {} ({written} of {expected} frames written)",
        .path.display()
    )]
    ShortWrite {
        path: PathBuf,
        written: usize,
        expected: usize,
    },
    #[error("Cannot allocate a buffer of {frames} frames x {channels} channels")]
    Allocation { frames: usize, channels: usize },
    #[error(
        "Channel mismatch: {} has {source_channels}, {} has {sink_channels}",
        .source_path.display(),
        .sink_path.display()
    )]
    ChannelMismatch {
        source_path: PathBuf,
        source_channels: u16,
        sink_path: PathBuf,
        sink_channels: u16,
    },
    #[error("Block size must be between 1 and {max} frames, got {frames}")]
    BlockSize { frames: usize, max: usize },
}

impl Error {
    /// Whether the destination may already hold frames when this error ends a transfer.
    pub fn may_leave_partial_output(&self) -> bool {
        matches!(
            self,
            Error::ShortWrite { .. }
                | Error::File(audio_file::Error::Write { .. })
                | Error::File(audio_file::Error::Read { .. })
        )
    }
}
