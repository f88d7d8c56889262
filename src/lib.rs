#![warn(missing_docs)]

//! # hls-estimate: HLS Segment and Storage Estimator
//!
//! Estimates how many HLS segments and how much storage a four-tier adaptive
//! ladder needs for a source file, given its size and optionally its duration.
//!
//! ## Features
//!
//! - **Ladder** - 2160p, 1080p, 720p and 480p at fixed bitrates
//! - **Estimate** - 6 second segments, duration derived at 8 Mbps when unknown
//! - **Report** - Fixed-width console table or JSON
//!
//! ## Quick Start
//!
//! ```
//! use hls_estimate::{Quality, SegmentEstimator};
//!
//! let result = SegmentEstimator::new(4.0)?.with_duration(10.0)?.estimate()?;
//! assert_eq!(result.tier(Quality::P1080).unwrap().segments, 101);
//! # Ok::<(), hls_estimate::EstimateError>(())
//! ```

/// Quality ladder and estimation constants
pub mod core;
/// Error types for estimation
pub mod error;
/// Segment and storage estimation
pub mod estimator;
/// Table and JSON reports
pub mod report;

pub use crate::core::{Quality, QualityProfile};
pub use error::{EstimateError, EstimateResult};
pub use estimator::{
    calculate_hls_segments, estimate_segments, EstimationResult, SegmentEstimator, TierEstimate,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
