//! HLS segment and storage estimation

/// Estimate result types
pub mod result;

pub use result::{EstimationResult, TierEstimate};

use crate::core::{
    Quality, BITS_PER_GB, PLAYLIST_OVERHEAD_GB, REFERENCE_BITRATE_BPS, SEGMENT_DURATION_SECS,
};
use crate::error::{ensure_positive, EstimateError, EstimateResult};
use crate::report;
use log::debug;
use std::io::Write;

/// Estimates HLS segment counts and storage for a source file
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentEstimator {
    file_size_gb: f64,
    duration_minutes: Option<f64>,
}

impl SegmentEstimator {
    /// Create an estimator for a source file of `file_size_gb` gigabytes
    pub fn new(file_size_gb: f64) -> EstimateResult<Self> {
        Ok(SegmentEstimator {
            file_size_gb: ensure_positive("file_size_gb", file_size_gb)?,
            duration_minutes: None,
        })
    }

    /// Use a known duration instead of deriving one from the file size
    pub fn with_duration(mut self, minutes: f64) -> EstimateResult<Self> {
        self.duration_minutes = Some(ensure_positive("video_duration_minutes", minutes)?);
        Ok(self)
    }

    /// Apply a duration if one is known
    pub fn with_optional_duration(self, minutes: Option<f64>) -> EstimateResult<Self> {
        match minutes {
            Some(m) => self.with_duration(m),
            None => Ok(self),
        }
    }

    /// Source file size in GB
    pub fn file_size_gb(&self) -> f64 {
        self.file_size_gb
    }

    /// Supplied duration, or one derived from the 8 Mbps reference bitrate
    pub fn duration_minutes(&self) -> f64 {
        self.duration_minutes
            .unwrap_or_else(|| derive_duration_minutes(self.file_size_gb))
    }

    /// Run the estimate
    pub fn estimate(&self) -> EstimateResult<EstimationResult> {
        let duration_minutes = self.duration_minutes();
        let duration_seconds = duration_minutes * 60.0;
        if self.duration_minutes.is_none() {
            debug!(
                "Derived duration {:.2} min from {} GB at reference bitrate",
                duration_minutes, self.file_size_gb
            );
        }

        let per_quality = Quality::LADDER
            .iter()
            .map(|&quality| estimate_tier(quality, duration_seconds))
            .collect::<EstimateResult<Vec<TierEstimate>>>()?;

        let total_segments = per_quality
            .iter()
            .try_fold(0u64, |acc, t| acc.checked_add(t.segments))
            .ok_or(EstimateError::OutOfRange { duration_seconds })?;
        let total_size_gb = per_quality.iter().map(|t| t.size_gb).sum();

        Ok(EstimationResult {
            total_segments,
            total_size_gb,
            duration_minutes,
            per_quality,
        })
    }
}

/// Duration in minutes a file of this size would play for at 8 Mbps
pub fn derive_duration_minutes(file_size_gb: f64) -> f64 {
    file_size_gb * BITS_PER_GB / (REFERENCE_BITRATE_BPS * 60.0)
}

/// Number of 6 second segments covering the duration (one extra for the partial tail)
pub fn segment_count(duration_seconds: f64) -> EstimateResult<u64> {
    let whole = (duration_seconds / SEGMENT_DURATION_SECS).floor();
    // u64::MAX as f64 rounds up to 2^64, so this bound keeps the cast exact
    if !whole.is_finite() || whole < 0.0 || whole >= u64::MAX as f64 {
        return Err(EstimateError::OutOfRange { duration_seconds });
    }
    (whole as u64)
        .checked_add(1)
        .ok_or(EstimateError::OutOfRange { duration_seconds })
}

fn estimate_tier(quality: Quality, duration_seconds: f64) -> EstimateResult<TierEstimate> {
    let bitrate_kbps = quality.bitrate_kbps();
    let gb_per_second = bitrate_kbps as f64 / (8.0 * 1024.0);
    let segments = segment_count(duration_seconds)?;
    let size_gb = duration_seconds * gb_per_second + PLAYLIST_OVERHEAD_GB;
    debug!("{}: {} segments, {:.3} GB", quality, segments, size_gb);

    Ok(TierEstimate {
        quality,
        bitrate_kbps,
        segments,
        size_gb,
    })
}

/// Estimate for `file_size_gb` with an optional known duration in minutes
pub fn estimate_segments(
    file_size_gb: f64,
    video_duration_minutes: Option<f64>,
) -> EstimateResult<EstimationResult> {
    let estimator =
        SegmentEstimator::new(file_size_gb)?.with_optional_duration(video_duration_minutes)?;
    estimator.estimate()
}

/// Estimate and write the report table to `out`
pub fn calculate_hls_segments<W: Write>(
    file_size_gb: f64,
    video_duration_minutes: Option<f64>,
    out: &mut W,
) -> EstimateResult<EstimationResult> {
    let result = estimate_segments(file_size_gb, video_duration_minutes)?;
    report::write_table(&result, out)?;
    Ok(result)
}
