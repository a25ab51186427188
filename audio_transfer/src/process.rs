//! # Process
//!
//! Owns both handles for one run and closes each exactly once, whatever ended the transfer.
//! Source closes first; the destination is closed even when that fails. The first error
//! detected is the one returned, later ones are logged.
//!
//! A destination left behind by a failed transfer stays on disk with whatever was written
//! before the failure.

use crate::{config::TransferConfig, error::Error, stats::Stats, transfer::transfer};
use audio_file::{FrameSink, FrameSource};

pub fn process<S, K>(mut source: S, mut sink: K, config: &TransferConfig) -> Result<Stats, Error>
where
    S: FrameSource,
    K: FrameSink,
{
    let outcome = transfer(&mut source, &mut sink, config);
    if let Err(e) = &outcome {
        if e.may_leave_partial_output() {
            log::warn!("Leaving partial output in {}", sink.path().display());
        }
    }
    let closed = close(source, sink);
    match (outcome, closed) {
        (Ok(stats), Ok(())) => Ok(stats),
        (Ok(_), Err(e)) => Err(e),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(secondary)) => {
            log::error!("{}", secondary);
            Err(e)
        }
    }
}

/// Close `source`, then `sink`, reporting the first failure.
pub fn close<S, K>(source: S, sink: K) -> Result<(), Error>
where
    S: FrameSource,
    K: FrameSink,
{
    let input = source.close();
    let output = sink.close();
    match (input, output) {
        (Ok(()), Ok(())) => Ok(()),
        (Err(e), Ok(())) | (Ok(()), Err(e)) => Err(e.into()),
        (Err(e), Err(secondary)) => {
            log::error!("{}", secondary);
            Err(e.into())
        }
    }
}
