use crate::{
    codec::Lease,
    container::Container,
    error::{Error, Result, Role},
    properties::{Properties, Sample},
    stream::FrameSink,
};
use hound::WavWriter;
use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

pub struct OutputFile {
    path: PathBuf,
    properties: Properties,
    writer: WavWriter<BufWriter<File>>,
    _lease: Lease,
}

impl OutputFile {
    pub(crate) fn create(
        path: &Path,
        container: Container,
        properties: Properties,
        lease: Lease,
    ) -> Result<Self> {
        let writer = match container {
            Container::Wav => WavWriter::create(path, properties.to_spec()),
        }
        .map_err(|source| Error::Create {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!(
            "Created {} ({:?}, {} Hz, {} channels, {})",
            path.display(),
            container,
            properties.sample_rate,
            properties.channels,
            properties.sample_type
        );
        Ok(OutputFile {
            path: path.to_path_buf(),
            properties,
            writer,
            _lease: lease,
        })
    }
}

impl FrameSink for OutputFile {
    fn path(&self) -> &Path {
        &self.path
    }

    fn properties(&self) -> &Properties {
        &self.properties
    }

    fn write_frames(&mut self, buf: &[Sample]) -> Result<usize> {
        let channels = self.properties.channels as usize;
        let frames = buf.len() / channels;
        for &x in &buf[..frames * channels] {
            if let Err(source) = self.writer.write_sample(x) {
                return Err(Error::Write {
                    path: self.path.clone(),
                    source,
                });
            }
        }
        Ok(frames)
    }

    /// Flushes buffered samples and patches the header with the final length.
    fn close(self) -> Result<()> {
        let OutputFile { path, writer, .. } = self;
        match writer.finalize() {
            Ok(()) => {
                log::debug!("Closed {} ({})", path.display(), Role::Destination);
                Ok(())
            }
            Err(source) => Err(Error::Close {
                role: Role::Destination,
                path,
                source,
            }),
        }
    }
}
