//! Core streaming types and fixed estimation constants

/// Quality tiers of the HLS ladder
pub mod quality;

pub use quality::{Quality, QualityProfile};

/// Length of every HLS segment, in seconds
pub const SEGMENT_DURATION_SECS: f64 = 6.0;

/// Bitrate assumed when deriving duration from file size (8 Mbps, in bits per second)
pub const REFERENCE_BITRATE_BPS: f64 = 8.0 * 1024.0 * 1024.0;

/// Bits in one gigabyte of source file
pub const BITS_PER_GB: f64 = 8.0 * 1024.0 * 1024.0 * 1024.0;

/// Allowance added to every tier for its playlist files (about 1 MB)
pub const PLAYLIST_OVERHEAD_GB: f64 = 0.001;
