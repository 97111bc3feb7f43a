// crates/imaging/src/jobs/types.rs
//! Types for the imaging job tracker.

use serde::Serialize;
use uuid::Uuid;

/// Which external tool performs the acquisition.
///
/// Closed enumeration: the command table is checked exhaustively at
/// compile time, and unknown method strings are rejected at submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
#[serde(rename_all = "lowercase")]
pub enum ImagingMethod {
    /// Raw block copy with error-tolerant reads (zero-fills short reads).
    Dcfldd,
    /// EWF/E01 forensic-container acquisition, run unattended.
    Ewf,
}

impl ImagingMethod {
    /// Parse a client-supplied method string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dcfldd" => Some(Self::Dcfldd),
            "ewf" => Some(Self::Ewf),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dcfldd => "dcfldd",
            Self::Ewf => "ewf",
        }
    }
}

/// Status of an imaging job.
///
/// `pending -> running -> (completed | failed)`; both end states are
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending = 0,
    Running = 1,
    Completed = 2,
    Failed = 3,
}

impl JobStatus {
    pub(crate) fn from_u8(v: u8) -> Self {
        match v {
            0 => Self::Pending,
            1 => Self::Running,
            2 => Self::Completed,
            _ => Self::Failed,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// Point-in-time copy of a job's fields, serialized for API responses.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct JobSnapshot {
    pub job_id: Uuid,
    pub source: String,
    pub destination: String,
    pub method: ImagingMethod,
    pub status: JobStatus,
    pub progress: u8,
    pub error: Option<String>,
    pub started_at: Option<String>,
    pub completed_at: Option<String>,
    pub hash: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parse_round_trip() {
        assert_eq!(ImagingMethod::parse("dcfldd"), Some(ImagingMethod::Dcfldd));
        assert_eq!(ImagingMethod::parse("ewf"), Some(ImagingMethod::Ewf));
        assert_eq!(ImagingMethod::parse("dd"), None);
        assert_eq!(ImagingMethod::parse(""), None);
        assert_eq!(ImagingMethod::parse("DCFLDD"), None);
    }

    #[test]
    fn test_method_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ImagingMethod::Dcfldd).unwrap(), "\"dcfldd\"");
        assert_eq!(serde_json::to_string(&ImagingMethod::Ewf).unwrap(), "\"ewf\"");
    }

    #[test]
    fn test_status_discriminants() {
        assert_eq!(JobStatus::from_u8(JobStatus::Pending as u8), JobStatus::Pending);
        assert_eq!(JobStatus::from_u8(JobStatus::Running as u8), JobStatus::Running);
        assert_eq!(JobStatus::from_u8(JobStatus::Completed as u8), JobStatus::Completed);
        assert_eq!(JobStatus::from_u8(JobStatus::Failed as u8), JobStatus::Failed);
    }

    #[test]
    fn test_status_terminality() {
        assert!(!JobStatus::Pending.is_terminal());
        assert!(!JobStatus::Running.is_terminal());
        assert!(JobStatus::Completed.is_terminal());
        assert!(JobStatus::Failed.is_terminal());
    }

    #[test]
    fn test_snapshot_serializes_original_field_names() {
        let snap = JobSnapshot {
            job_id: Uuid::nil(),
            source: "/dev/null".into(),
            destination: "/output/img.dd".into(),
            method: ImagingMethod::Dcfldd,
            status: JobStatus::Pending,
            progress: 0,
            error: None,
            started_at: None,
            completed_at: None,
            hash: None,
        };
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["job_id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["method"], "dcfldd");
        assert_eq!(json["status"], "pending");
        assert_eq!(json["progress"], 0);
        assert!(json["hash"].is_null());
    }
}
