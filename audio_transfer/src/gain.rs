use audio_file::Sample;

/// Scalar applied to every sample independently.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gain(pub Sample);

impl Gain {
    pub const UNITY: Gain = Gain(1.0);

    /// Plain IEEE multiply in place. No clamping: results may leave [-1, 1].
    #[inline]
    pub fn apply(self, samples: &mut [Sample]) {
        for x in samples.iter_mut() {
            *x *= self.0;
        }
    }

    /// Largest gain that keeps a signal with the given peak inside [-1, 1].
    pub fn max_for_peak(peak: Sample) -> Gain {
        if peak > 0.0 {
            Gain(1.0 / peak)
        } else {
            Gain(Sample::INFINITY)
        }
    }
}

impl Default for Gain {
    fn default() -> Self {
        Gain::UNITY
    }
}

/// Largest absolute sample value, NaN ignored.
pub fn peak(samples: &[Sample]) -> Sample {
    samples.iter().fold(0.0, |m: Sample, x| m.max(x.abs()))
}
