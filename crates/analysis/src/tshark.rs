// crates/analysis/src/tshark.rs
//! tshark command construction and output shaping.

use std::path::Path;
use std::time::Duration;

/// Hard bound on a tshark run; analysis is expected to be fast.
pub const TSHARK_TIMEOUT: Duration = Duration::from_secs(60);

/// Maximum packet records returned by `/analyze`.
pub const MAX_PACKETS: usize = 1000;

/// `tshark -r {file} -T json -c {limit} [-Y {filter}]`
///
/// `limit` is clamped to [`MAX_PACKETS`] before it reaches the tool.
pub fn build_analyze_command(file: &Path, filters: &str, limit: usize) -> Vec<String> {
    let limit = limit.min(MAX_PACKETS);
    let mut args = vec![
        "-r".to_string(),
        file.display().to_string(),
        "-T".to_string(),
        "json".to_string(),
        "-c".to_string(),
        limit.to_string(),
    ];
    if !filters.is_empty() {
        args.push("-Y".to_string());
        args.push(filters.to_string());
    }
    args
}

/// `tshark -r {file} -q -z conv,tcp -z conv,udp`
pub fn build_statistics_command(file: &Path) -> Vec<String> {
    vec![
        "-r".to_string(),
        file.display().to_string(),
        "-q".to_string(),
        "-z".to_string(),
        "conv,tcp".to_string(),
        "-z".to_string(),
        "conv,udp".to_string(),
    ]
}

/// `tshark -r {file} -q -z io,phs`
pub fn build_protocols_command(file: &Path) -> Vec<String> {
    vec![
        "-r".to_string(),
        file.display().to_string(),
        "-q".to_string(),
        "-z".to_string(),
        "io,phs".to_string(),
    ]
}

/// Parse tshark's `-T json` stdout into packet records.
///
/// Malformed or empty output degrades to an empty set rather than
/// failing the request.
pub fn parse_packets(stdout: &str) -> Vec<serde_json::Value> {
    if stdout.trim().is_empty() {
        return Vec::new();
    }
    match serde_json::from_str(stdout) {
        Ok(serde_json::Value::Array(packets)) => packets,
        Ok(_) | Err(_) => {
            tracing::warn!(stdout_len = stdout.len(), "tshark produced malformed JSON");
            Vec::new()
        }
    }
}
