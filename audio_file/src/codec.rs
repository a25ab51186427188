//! # Codec
//!
//! Process-wide bracket around every handle. `init` comes before the first open, `finish`
//! after the last close. Each handle holds a [`Lease`] on the codec's open-handle counter, so
//! a handle that outlives `finish` is reported instead of leaking silently.

use crate::{
    container::Container,
    error::{Error, Result},
    input::InputFile,
    output::OutputFile,
    properties::Properties,
};
use std::{cell::Cell, path::Path, rc::Rc};

pub struct Codec {
    open: Rc<Cell<usize>>,
}

impl Codec {
    pub fn init() -> Self {
        log::debug!("Codec initialised");
        Codec {
            open: Rc::new(Cell::new(0)),
        }
    }

    /// Open an existing sound file for reading.
    pub fn open<P: AsRef<Path>>(&self, path: P) -> Result<InputFile> {
        InputFile::open(path.as_ref(), self.lease())
    }

    /// Create `path` with the rate and channel layout of `source`, stored as floats.
    /// The extension is checked before anything touches the file system.
    pub fn create<P: AsRef<Path>>(&self, source: &Properties, path: P) -> Result<OutputFile> {
        let path = path.as_ref();
        let container = Container::from_path(path).ok_or_else(|| Error::UnsupportedExtension {
            path: path.to_path_buf(),
        })?;
        OutputFile::create(path, container, source.to_float(), self.lease())
    }

    pub fn open_handles(&self) -> usize {
        self.open.get()
    }

    pub fn finish(self) -> Result<()> {
        match self.open.get() {
            0 => {
                log::debug!("Codec finished");
                Ok(())
            }
            open => Err(Error::Teardown { open }),
        }
    }

    fn lease(&self) -> Lease {
        self.open.set(self.open.get() + 1);
        Lease(Rc::clone(&self.open))
    }
}

/// Counts as one open handle until dropped.
pub(crate) struct Lease(Rc<Cell<usize>>);

impl Drop for Lease {
    fn drop(&mut self) {
        self.0.set(self.0.get() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FrameSink, FrameSource, SampleType};
    use hound::{SampleFormat, WavSpec, WavWriter};

    fn write_fixture(path: &Path) {
        let spec = WavSpec {
            channels: 1,
            sample_rate: 8000,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut writer = WavWriter::create(path, spec).unwrap();
        for x in &[0i16, 1000, -1000] {
            writer.write_sample(*x).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn counts_open_handles() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("in.wav");
        write_fixture(&src);

        let codec = Codec::init();
        let input = codec.open(&src).unwrap();
        let output = codec
            .create(input.properties(), dir.path().join("out.wav"))
            .unwrap();
        assert_eq!(codec.open_handles(), 2);
        input.close().unwrap();
        assert_eq!(codec.open_handles(), 1);
        output.close().unwrap();
        assert_eq!(codec.open_handles(), 0);
        codec.finish().unwrap();
    }

    #[test]
    fn finish_reports_live_handles() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("in.wav");
        write_fixture(&src);

        let codec = Codec::init();
        let input = codec.open(&src).unwrap();
        match codec.finish() {
            Err(Error::Teardown { open }) => assert_eq!(open, 1),
            other => panic!("unexpected {:?}", other),
        }
        drop(input);
    }

    #[test]
    fn failed_open_holds_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let codec = Codec::init();
        let missing = dir.path().join("missing.wav");
        match codec.open(&missing) {
            Err(Error::Open { path, .. }) => assert_eq!(path, missing),
            Err(e) => panic!("unexpected {}", e),
            Ok(_) => panic!("opened a missing file"),
        }
        assert_eq!(codec.open_handles(), 0);
        codec.finish().unwrap();
    }

    #[test]
    fn rejects_extension_before_creating() {
        let dir = tempfile::tempdir().unwrap();
        let codec = Codec::init();
        let dest = dir.path().join("out.xyz");
        let props = Properties {
            sample_rate: 48000,
            channels: 2,
            sample_type: SampleType::Int(16),
        };
        match codec.create(&props, &dest) {
            Err(Error::UnsupportedExtension { path }) => assert_eq!(path, dest),
            Err(e) => panic!("unexpected {}", e),
            Ok(_) => panic!("created {}", dest.display()),
        }
        assert!(!dest.exists());
        assert_eq!(codec.open_handles(), 0);
    }

    #[test]
    fn create_failure_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let codec = Codec::init();
        let dest = dir.path().join("no/such/dir/out.wav");
        let props = Properties {
            sample_rate: 48000,
            channels: 2,
            sample_type: SampleType::Float(32),
        };
        match codec.create(&props, &dest) {
            Err(Error::Create { path, .. }) => assert_eq!(path, dest),
            Err(e) => panic!("unexpected {}", e),
            Ok(_) => panic!("created {}", dest.display()),
        }
        assert_eq!(codec.open_handles(), 0);
    }

    #[test]
    fn output_is_float_with_source_layout() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("in.wav");
        write_fixture(&src);

        let codec = Codec::init();
        let input = codec.open(&src).unwrap();
        let mut output = codec
            .create(input.properties(), dir.path().join("out.wav"))
            .unwrap();
        assert_eq!(output.properties().channels, 1);
        assert_eq!(output.properties().sample_rate, 8000);
        assert_eq!(output.properties().sample_type, SampleType::Float(32));
        assert_eq!(output.write_frames(&[0.5, -0.5]).unwrap(), 2);
        input.close().unwrap();
        output.close().unwrap();

        let reader = hound::WavReader::open(dir.path().join("out.wav")).unwrap();
        assert_eq!(reader.spec().sample_format, SampleFormat::Float);
        assert_eq!(reader.spec().bits_per_sample, 32);
        assert_eq!(reader.len(), 2);
    }
}
