use crate::core::Quality;
use serde::{Serialize, Serializer};

/// Segment count and storage estimate for one quality tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierEstimate {
    /// The tier this estimate belongs to
    #[serde(skip)]
    pub quality: Quality,
    /// Tier bitrate in kbps
    pub bitrate_kbps: u32,
    /// Number of HLS segments
    pub segments: u64,
    /// Approximate storage in GB, playlist allowance included
    pub size_gb: f64,
}

/// Outcome of a single estimation call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimationResult {
    /// Segments summed over every tier
    pub total_segments: u64,
    /// Storage summed over every tier, in GB
    pub total_size_gb: f64,
    /// Duration used for the estimate, supplied or derived
    pub duration_minutes: f64,
    /// Per-tier estimates in ladder order, keyed by tier name when serialized
    #[serde(serialize_with = "serialize_per_quality")]
    pub per_quality: Vec<TierEstimate>,
}

impl EstimationResult {
    /// Duration used for the estimate, in seconds
    pub fn duration_seconds(&self) -> f64 {
        self.duration_minutes * 60.0
    }

    /// Look up the estimate for a tier
    pub fn tier(&self, quality: Quality) -> Option<&TierEstimate> {
        self.per_quality.iter().find(|t| t.quality == quality)
    }

    /// Look up the estimate for a tier by its name ("1080p", ...)
    pub fn tier_by_name(&self, name: &str) -> Option<&TierEstimate> {
        let quality = name.parse::<Quality>().ok()?;
        self.tier(quality)
    }

    /// Segment count of a single tier; equal across the ladder
    pub fn segments_per_tier(&self) -> u64 {
        self.per_quality.first().map(|t| t.segments).unwrap_or(0)
    }
}

fn serialize_per_quality<S: Serializer>(
    tiers: &[TierEstimate],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(tiers.iter().map(|t| (t.quality.name(), t)))
}
