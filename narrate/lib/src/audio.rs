//! Audio buffers and WAV I/O.

use std::io::BufWriter;
use std::path::{Path, PathBuf};

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use tracing::{debug, info};

use crate::error::WriteError;
use crate::types::SynthesisSegment;

/// Mono waveform with its sample rate.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    /// Mono audio samples in [-1.0, 1.0] range
    pub samples: Vec<f32>,
    /// Sample rate in Hz
    pub sample_rate: u32,
}

impl AudioBuffer {
    /// Create a new audio buffer
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Duration in seconds
    pub fn duration(&self) -> f32 {
        self.samples.len() as f32 / self.sample_rate as f32
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Accumulates segment samples in the order they are pushed.
#[derive(Debug, Clone, Default)]
pub struct CombinedAudio {
    samples: Vec<f32>,
    segments: usize,
}

impl CombinedAudio {
    /// An empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a segment's samples after everything pushed so far.
    pub fn push(&mut self, segment: SynthesisSegment) {
        self.samples.extend(segment.samples);
        self.segments += 1;
    }

    /// Number of segments appended.
    pub fn segment_count(&self) -> usize {
        self.segments
    }

    /// The concatenated samples.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Attach a sample rate.
    pub fn into_buffer(self, sample_rate: u32) -> AudioBuffer {
        AudioBuffer::new(self.samples, sample_rate)
    }
}

/// Load a WAV file as mono `f32` samples.
///
/// Integer PCM is scaled to [-1.0, 1.0]; multi-channel audio is averaged
/// down to one channel.
pub fn read_wav(path: impl AsRef<Path>) -> Result<AudioBuffer, hound::Error> {
    let mut reader = WavReader::open(path)?;
    let spec = reader.spec();

    let interleaved: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader.samples::<f32>().collect::<Result<_, _>>()?,
        SampleFormat::Int => {
            let scale = (1u64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<Result<_, _>>()?
        }
    };

    let channels = usize::from(spec.channels.max(1));
    let samples = if channels == 1 {
        interleaved
    } else {
        interleaved
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
            .collect()
    };

    Ok(AudioBuffer::new(samples, spec.sample_rate))
}

/// Write `audio` as 16-bit mono PCM to `dir/<name>.wav`.
///
/// The directory is created if missing. Data goes to a temp file in `dir`
/// first and is renamed into place, so a failed write never leaves a
/// partial `<name>.wav` behind.
pub fn write_wav(dir: &Path, name: &str, audio: &AudioBuffer) -> Result<PathBuf, WriteError> {
    std::fs::create_dir_all(dir).map_err(|source| WriteError::CreateDir {
        dir: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(format!("{name}.wav"));
    let persist_err = |source: std::io::Error| WriteError::Persist {
        path: path.clone(),
        source,
    };

    let mut tmp = tempfile::Builder::new()
        .prefix(".narrate-")
        .suffix(".wav.part")
        .tempfile_in(dir)
        .map_err(persist_err)?;

    let spec = WavSpec {
        channels: 1,
        sample_rate: audio.sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::new(BufWriter::new(tmp.as_file_mut()), spec)?;
    for &sample in &audio.samples {
        writer.write_sample(to_pcm16(sample))?;
    }
    writer.finalize()?;

    debug!(tmp = %tmp.path().display(), "Encoded WAV data");
    tmp.persist(&path).map_err(|e| persist_err(e.error))?;

    info!(
        path = %path.display(),
        samples = audio.len(),
        seconds = audio.duration(),
        "Wrote WAV file"
    );
    Ok(path)
}

fn to_pcm16(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * f32::from(i16::MAX)).round() as i16
}
