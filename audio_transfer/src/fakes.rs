//! In-memory sources and sinks for exercising the loop without a file system.

use audio_file::{Error, FrameSink, FrameSource, Properties, Result, SampleType};
use std::{
    cell::Cell,
    path::{Path, PathBuf},
    rc::Rc,
};

fn properties(channels: u16) -> Properties {
    Properties {
        sample_rate: 48000,
        channels,
        sample_type: SampleType::Float(32),
    }
}

pub struct MemorySource {
    pub path: PathBuf,
    properties: Properties,
    samples: Vec<f32>,
    cursor: usize,
    fail_after: Option<usize>,
    fail_close: bool,
    closed: Rc<Cell<bool>>,
    pub reads: usize,
}

impl MemorySource {
    pub fn new(channels: u16, samples: Vec<f32>) -> Self {
        MemorySource {
            path: PathBuf::from("memory-in.wav"),
            properties: properties(channels),
            samples,
            cursor: 0,
            fail_after: None,
            fail_close: false,
            closed: Rc::new(Cell::new(false)),
            reads: 0,
        }
    }

    /// Set once `close` has run, success or not.
    pub fn closed(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.closed)
    }

    /// Every read after the first `reads` fails.
    pub fn failing_after(mut self, reads: usize) -> Self {
        self.fail_after = Some(reads);
        self
    }

    pub fn failing_close(mut self) -> Self {
        self.fail_close = true;
        self
    }
}

impl FrameSource for MemorySource {
    fn path(&self) -> &Path {
        &self.path
    }

    fn properties(&self) -> &Properties {
        &self.properties
    }

    fn read_frames(&mut self, buf: &mut [f32]) -> Result<usize> {
        self.reads += 1;
        if matches!(self.fail_after, Some(n) if self.reads > n) {
            return Err(Error::Read {
                path: self.path.clone(),
                source: hound::Error::FormatError("injected read failure"),
            });
        }
        let channels = self.properties.channels as usize;
        let available = self.samples.len() - self.cursor;
        let n = (buf.len() / channels).min(available / channels) * channels;
        buf[..n].copy_from_slice(&self.samples[self.cursor..self.cursor + n]);
        self.cursor += n;
        Ok(n / channels)
    }

    fn close(self) -> Result<()> {
        self.closed.set(true);
        if self.fail_close {
            return Err(Error::Close {
                role: audio_file::Role::Source,
                path: self.path,
                source: hound::Error::FormatError("injected close failure"),
            });
        }
        Ok(())
    }
}

pub struct MemorySink {
    pub path: PathBuf,
    properties: Properties,
    pub samples: Vec<f32>,
    capacity: Option<usize>,
    fail_close: bool,
    closed: Rc<Cell<bool>>,
}

impl MemorySink {
    pub fn new(channels: u16) -> Self {
        MemorySink {
            path: PathBuf::from("memory-out.wav"),
            properties: properties(channels),
            samples: Vec::new(),
            capacity: None,
            fail_close: false,
            closed: Rc::new(Cell::new(false)),
        }
    }

    pub fn closed(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.closed)
    }

    /// Accept at most `frames` frames in total, like a disk that fills up.
    pub fn accepting(mut self, frames: usize) -> Self {
        self.capacity = Some(frames * self.properties.channels as usize);
        self
    }

    pub fn failing_close(mut self) -> Self {
        self.fail_close = true;
        self
    }
}

impl FrameSink for MemorySink {
    fn path(&self) -> &Path {
        &self.path
    }

    fn properties(&self) -> &Properties {
        &self.properties
    }

    fn write_frames(&mut self, buf: &[f32]) -> Result<usize> {
        let channels = self.properties.channels as usize;
        let room = match self.capacity {
            Some(capacity) => capacity - self.samples.len(),
            None => buf.len(),
        };
        let n = buf.len().min(room) / channels * channels;
        self.samples.extend_from_slice(&buf[..n]);
        Ok(n / channels)
    }

    fn close(self) -> Result<()> {
        self.closed.set(true);
        if self.fail_close {
            return Err(Error::Close {
                role: audio_file::Role::Destination,
                path: self.path,
                source: hound::Error::FormatError("injected close failure"),
            });
        }
        Ok(())
    }
}
