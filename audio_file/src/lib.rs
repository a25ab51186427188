//! Sound file handles backed by hound.
//!
//! A [`Codec`] brackets every other operation: handles are opened and created through it and
//! must all be closed before [`Codec::finish`] succeeds.

pub mod codec;
pub mod container;
pub mod error;
pub mod input;
pub mod output;
pub mod properties;
pub mod stream;

pub use self::{
    codec::Codec,
    container::Container,
    error::{Error, Result, Role},
    input::InputFile,
    output::OutputFile,
    properties::{Properties, Sample, SampleType},
    stream::{FrameSink, FrameSource},
};
