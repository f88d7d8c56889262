use crate::error::EstimateError;
use std::fmt;
use std::str::FromStr;

/// Resolution/bitrate variant of the adaptive stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quality {
    /// 3840x2160 at 8 Mbps
    P2160,
    /// 1920x1080 at 4 Mbps
    P1080,
    /// 1280x720 at 2.5 Mbps
    P720,
    /// 854x480 at 1 Mbps
    P480,
}

impl Quality {
    /// Every tier, highest bitrate first
    pub const LADDER: [Quality; 4] = [
        Quality::P2160,
        Quality::P1080,
        Quality::P720,
        Quality::P480,
    ];

    /// Tier name as shown in reports
    pub fn name(&self) -> &'static str {
        match self {
            Quality::P2160 => "2160p",
            Quality::P1080 => "1080p",
            Quality::P720 => "720p",
            Quality::P480 => "480p",
        }
    }

    /// Target video bitrate in kbps
    pub fn bitrate_kbps(&self) -> u32 {
        match self {
            Quality::P2160 => 8000,
            Quality::P1080 => 4000,
            Quality::P720 => 2500,
            Quality::P480 => 1000,
        }
    }

    /// Name/bitrate pair for this tier
    pub fn profile(&self) -> QualityProfile {
        QualityProfile {
            name: self.name(),
            bitrate_kbps: self.bitrate_kbps(),
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Quality {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "2160p" | "4k" => Ok(Quality::P2160),
            "1080p" => Ok(Quality::P1080),
            "720p" => Ok(Quality::P720),
            "480p" => Ok(Quality::P480),
            _ => Err(EstimateError::UnknownQuality(s.to_string())),
        }
    }
}

/// A named tier with its constant bitrate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityProfile {
    /// One of "2160p", "1080p", "720p", "480p"
    pub name: &'static str,
    /// Bitrate in kbps
    pub bitrate_kbps: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder_order_descending_bitrate() {
        let rates: Vec<u32> = Quality::LADDER.iter().map(Quality::bitrate_kbps).collect();
        assert_eq!(rates, vec![8000, 4000, 2500, 1000]);
    }

    #[test]
    fn test_quality_from_str() {
        assert_eq!("1080p".parse::<Quality>().unwrap(), Quality::P1080);
        assert_eq!("720P".parse::<Quality>().unwrap(), Quality::P720);
        assert_eq!("4k".parse::<Quality>().unwrap(), Quality::P2160);
        assert!("360p".parse::<Quality>().is_err());
    }

    #[test]
    fn test_quality_display_matches_name() {
        for quality in Quality::LADDER {
            assert_eq!(quality.to_string(), quality.name());
            assert_eq!(quality.name().parse::<Quality>().unwrap(), quality);
        }
    }

    #[test]
    fn test_profile() {
        let profile = Quality::P480.profile();
        assert_eq!(profile.name, "480p");
        assert_eq!(profile.bitrate_kbps, 1000);
    }
}
