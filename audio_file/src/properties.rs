/// Samples travel between handles as 32-bit floats normalised to [-1, 1].
/// Integer sources are scaled on read, so gain and the float output never see raw integers.
pub type Sample = f32;

/// On-disk representation of one sample, with its width in bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleType {
    Int(u16),
    Float(u16),
}

impl SampleType {
    pub fn bits(self) -> u16 {
        match self {
            SampleType::Int(bits) | SampleType::Float(bits) => bits,
        }
    }

    /// Width of one sample in bytes, rounded up.
    pub fn width(self) -> usize {
        (self.bits() as usize + 7) / 8
    }

    pub fn is_float(self) -> bool {
        matches!(self, SampleType::Float(_))
    }
}

impl std::fmt::Display for SampleType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SampleType::Int(bits) => write!(f, "{}-bit integer", bits),
            SampleType::Float(bits) => write!(f, "{}-bit float", bits),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Properties {
    pub sample_rate: u32,
    pub channels: u16,
    pub sample_type: SampleType,
}

impl Properties {
    /// Same rate and channel layout, stored as 32-bit floats.
    pub fn to_float(&self) -> Self {
        Properties {
            sample_type: SampleType::Float(32),
            ..*self
        }
    }

    pub(crate) fn from_spec(spec: hound::WavSpec) -> Self {
        let sample_type = match spec.sample_format {
            hound::SampleFormat::Int => SampleType::Int(spec.bits_per_sample),
            hound::SampleFormat::Float => SampleType::Float(spec.bits_per_sample),
        };
        Properties {
            sample_rate: spec.sample_rate,
            channels: spec.channels,
            sample_type,
        }
    }

    pub(crate) fn to_spec(&self) -> hound::WavSpec {
        let sample_format = if self.sample_type.is_float() {
            hound::SampleFormat::Float
        } else {
            hound::SampleFormat::Int
        };
        hound::WavSpec {
            channels: self.channels,
            sample_rate: self.sample_rate,
            bits_per_sample: self.sample_type.bits(),
            sample_format,
        }
    }
}
