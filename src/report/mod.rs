//! Console table and JSON renderings of an estimate

use crate::error::EstimateResult;
use crate::estimator::EstimationResult;
use std::io::Write;

const RULE_WIDTH: usize = 35;

/// Write the fixed-width estimate table
pub fn write_table<W: Write>(result: &EstimationResult, out: &mut W) -> EstimateResult<()> {
    let rule = "-".repeat(RULE_WIDTH);

    writeln!(
        out,
        "\nEstimated calculations for {:.1} seconds of video:",
        result.duration_seconds()
    )?;
    writeln!(out, "\nQuality  Segments  Approx Size")?;
    writeln!(out, "{}", rule)?;
    for tier in &result.per_quality {
        let row = format_row(tier.quality.name(), tier.segments, tier.size_gb);
        writeln!(out, "{}", row)?;
    }
    writeln!(out, "{}", rule)?;
    let total = format_row("Total", result.total_segments, result.total_size_gb);
    writeln!(out, "{}", total)?;
    Ok(())
}

/// Render the table to a string
pub fn table_string(result: &EstimationResult) -> EstimateResult<String> {
    let mut buf = Vec::new();
    write_table(result, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Pretty-printed JSON form of the estimate
pub fn to_json(result: &EstimationResult) -> EstimateResult<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

fn format_row(label: &str, segments: u64, size_gb: f64) -> String {
    format!("{:<8} {:>8}  {:>8.2} GB", label, segments, size_gb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::estimate_segments;

    #[test]
    fn test_table_layout_for_4gb() {
        let result = estimate_segments(4.0, None).unwrap();
        let text = table_string(&result).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "Estimated calculations for 4096.0 seconds of video:");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Quality  Segments  Approx Size");
        assert_eq!(lines[4], "-".repeat(35));
        assert_eq!(lines[5], "2160p         683   4000.00 GB");
        assert_eq!(lines[6], "1080p         683   2000.00 GB");
        assert_eq!(lines[7], "720p          683   1250.00 GB");
        assert_eq!(lines[8], "480p          683    500.00 GB");
        assert_eq!(lines[9], "-".repeat(35));
        assert_eq!(lines[10], "Total        2732   7750.00 GB");
        assert_eq!(lines.len(), 11);
    }

    #[test]
    fn test_format_row_widths() {
        assert_eq!(format_row("720p", 5, 0.5), "720p            5      0.50 GB");
    }

    #[test]
    fn test_json_keys() {
        let result = estimate_segments(1.0, Some(1.0)).unwrap();
        let json = to_json(&result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["total_segments"], 44);
        assert_eq!(value["duration_minutes"], 1.0);
        assert_eq!(value["per_quality"]["1080p"]["segments"], 11);
        assert_eq!(value["per_quality"]["480p"]["bitrate_kbps"], 1000);
        assert!(value["per_quality"]["2160p"].get("quality").is_none());

        // tiers appear in ladder order in the text
        let uhd = json.find("\"2160p\"").unwrap();
        let sd = json.find("\"480p\"").unwrap();
        assert!(uhd < sd);
    }
}
