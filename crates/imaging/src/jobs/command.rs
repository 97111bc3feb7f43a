// crates/imaging/src/jobs/command.rs
//! Command construction for the imaging tools.

use std::path::Path;
use std::time::Duration;

use super::types::ImagingMethod;

/// Hard wall-clock bound on an imaging run.
pub const IMAGING_TIMEOUT: Duration = Duration::from_secs(7200);

/// Build the argument vector for an imaging run.
///
/// The table is policy: each method maps to one fixed invocation, with
/// only the source and destination substituted in.
pub fn build_command(method: ImagingMethod, source: &str, destination: &Path) -> (&'static str, Vec<String>) {
    match method {
        // Error-tolerant raw copy. dcfldd also writes its own rolling
        // hash log; that log is never read back — the tracker's digest
        // pass over the destination is authoritative.
        ImagingMethod::Dcfldd => (
            "dcfldd",
            vec![
                format!("if={source}"),
                format!("of={}", destination.display()),
                "hash=sha256".to_string(),
                "hashwindow=1G".to_string(),
                "hashlog=/tmp/hash.log".to_string(),
                "bs=4M".to_string(),
                "conv=noerror,sync".to_string(),
                "status=on".to_string(),
            ],
        ),
        // Unattended EnCase-format acquisition with fixed case metadata.
        ImagingMethod::Ewf => (
            "ewfacquire",
            vec![
                "-t".to_string(),
                destination.display().to_string(),
                "-u".to_string(),
                "-C".to_string(),
                "case".to_string(),
                "-D".to_string(),
                "description".to_string(),
                "-E".to_string(),
                "evidence".to_string(),
                "-e".to_string(),
                "examiner".to_string(),
                "-m".to_string(),
                "fixed".to_string(),
                "-M".to_string(),
                "logical".to_string(),
                "-N".to_string(),
                "notes".to_string(),
                "-c".to_string(),
                "deflate".to_string(),
                "-f".to_string(),
                "encase6".to_string(),
                source.to_string(),
            ],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn test_dcfldd_command() {
        let dest = PathBuf::from("/output/disk.dd");
        let (program, args) = build_command(ImagingMethod::Dcfldd, "/dev/sdb", &dest);
        assert_eq!(program, "dcfldd");
        assert_eq!(
            args,
            vec![
                "if=/dev/sdb",
                "of=/output/disk.dd",
                "hash=sha256",
                "hashwindow=1G",
                "hashlog=/tmp/hash.log",
                "bs=4M",
                "conv=noerror,sync",
                "status=on",
            ]
        );
    }

    #[test]
    fn test_ewf_command() {
        let dest = PathBuf::from("/output/disk");
        let (program, args) = build_command(ImagingMethod::Ewf, "/dev/sdb", &dest);
        assert_eq!(program, "ewfacquire");
        // Unattended flag must be present so the tool never prompts.
        assert!(args.contains(&"-u".to_string()));
        // Source is the trailing positional argument.
        assert_eq!(args.last().map(String::as_str), Some("/dev/sdb"));
        assert_eq!(args[0], "-t");
        assert_eq!(args[1], "/output/disk");
        assert_eq!(
            args[args.len() - 3..args.len() - 1],
            ["-f".to_string(), "encase6".to_string()]
        );
    }

    #[test]
    fn test_imaging_timeout_is_two_hours() {
        assert_eq!(IMAGING_TIMEOUT, Duration::from_secs(2 * 60 * 60));
    }
}
