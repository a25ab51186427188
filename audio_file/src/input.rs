use crate::{
    codec::Lease,
    error::{Error, Result, Role},
    properties::{Properties, Sample, SampleType},
    stream::FrameSource,
};
use hound::WavReader;
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

pub struct InputFile {
    path: PathBuf,
    properties: Properties,
    reader: WavReader<BufReader<File>>,
    _lease: Lease,
}

impl InputFile {
    pub(crate) fn open(path: &Path, lease: Lease) -> Result<Self> {
        let open_error = |source| Error::Open {
            path: path.to_path_buf(),
            source,
        };
        let reader = WavReader::open(path).map_err(open_error)?;
        let properties = Properties::from_spec(reader.spec());
        if properties.channels == 0 {
            return Err(open_error(hound::Error::FormatError("no channels")));
        }
        log::debug!(
            "Opened {} ({} Hz, {} channels, {})",
            path.display(),
            properties.sample_rate,
            properties.channels,
            properties.sample_type
        );
        Ok(InputFile {
            path: path.to_path_buf(),
            properties,
            reader,
            _lease: lease,
        })
    }

    /// Total frames in the file as declared by its header.
    pub fn frames(&self) -> u32 {
        self.reader.duration()
    }
}

impl FrameSource for InputFile {
    fn path(&self) -> &Path {
        &self.path
    }

    fn properties(&self) -> &Properties {
        &self.properties
    }

    fn read_frames(&mut self, buf: &mut [Sample]) -> Result<usize> {
        let channels = self.properties.channels as usize;
        let wanted = buf.len() / channels * channels;
        let path = &self.path;
        let read_error = |source| Error::Read {
            path: path.clone(),
            source,
        };

        let mut n = 0;
        match self.properties.sample_type {
            SampleType::Float(_) => {
                for (y, x) in buf[..wanted].iter_mut().zip(self.reader.samples::<f32>()) {
                    *y = x.map_err(read_error)?;
                    n += 1;
                }
            }
            SampleType::Int(bits) => {
                let scale = (1i64 << (bits - 1)) as Sample;
                for (y, x) in buf[..wanted].iter_mut().zip(self.reader.samples::<i32>()) {
                    *y = x.map_err(read_error)? as Sample / scale;
                    n += 1;
                }
            }
        }

        if n % channels != 0 {
            return Err(read_error(hound::Error::FormatError(
                "stream ends inside a frame",
            )));
        }
        Ok(n / channels)
    }

    fn close(self) -> Result<()> {
        log::debug!("Closed {} ({})", self.path.display(), Role::Source);
        Ok(())
    }
}
