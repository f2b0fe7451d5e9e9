//! Job definitions for the asynchronous media-job lifecycle.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of media job. Fixed at creation, never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobKind {
    /// Fetch a YouTube video in a chosen format
    Download,
    /// Convert an uploaded video to another container
    Convert,
    /// Cut a time range out of an uploaded video
    Trim,
    /// Extract a single frame as an image
    Screenshot,
    /// Re-encode an uploaded video at a smaller size
    Compress,
}

impl JobKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobKind::Download => "download",
            JobKind::Convert => "convert",
            JobKind::Trim => "trim",
            JobKind::Screenshot => "screenshot",
            JobKind::Compress => "compress",
        }
    }
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Job status as reported by the backend.
///
/// `Downloading` is reachable only for [`JobKind::Download`], between
/// `Pending` and `Processing`. `Completed` and `Error` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Job accepted, waiting to be picked up
    #[default]
    Pending,
    /// Source video is being fetched (download kind only)
    Downloading,
    /// Media work is in progress
    Processing,
    /// Job finished and produced an artifact
    Completed,
    /// Job failed with a backend-reported message
    Error,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::Downloading => "downloading",
            JobStatus::Processing => "processing",
            JobStatus::Completed => "completed",
            JobStatus::Error => "error",
        }
    }

    /// Check if this is a terminal state (no more updates expected).
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Error)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One job state snapshot as it appears on the wire.
///
/// Returned by both the submission endpoints and the status endpoints.
/// The backend assigns the id; everything else is untrusted and replaced
/// wholesale on every poll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSnapshot {
    /// Opaque backend-assigned job handle
    pub id: String,
    /// Current status
    #[serde(default)]
    pub status: JobStatus,
    /// Progress percentage (0-100, backend-reported)
    #[serde(default)]
    pub progress: u8,
    /// Error message, present only when status is `error`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Backend-relative artifact reference, present only on completion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
    /// Byte count of the produced artifact (compression only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_size: Option<u64>,
}

/// A tracked job: the latest snapshot plus the client-side kind.
///
/// Created from the submission response and mutated only by applying later
/// poll snapshots; the client never speculatively advances the status.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    pub kind: JobKind,
    pub id: String,
    pub status: JobStatus,
    pub progress: u8,
    pub error: Option<String>,
    pub output_path: Option<String>,
    pub output_size: Option<u64>,
}

impl Job {
    pub fn from_snapshot(kind: JobKind, snapshot: JobSnapshot) -> Self {
        Self {
            kind,
            id: snapshot.id,
            status: snapshot.status,
            progress: snapshot.progress,
            error: snapshot.error,
            output_path: snapshot.output_path,
            output_size: snapshot.output_size,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Artifact reference, guarded by the terminal state.
    ///
    /// `Some` only for a completed job that actually carries an output path;
    /// a download reference must never be fabricated from partial state.
    pub fn completed_output(&self) -> Option<&str> {
        match self.status {
            JobStatus::Completed => self.output_path.as_deref(),
            _ => None,
        }
    }

    /// Terminal failure message, `Some` only when the status is `error`.
    pub fn error_message(&self) -> Option<&str> {
        match self.status {
            JobStatus::Error => self.error.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_terminality() {
        assert!(!JobStatus::Pending.is_terminal());
        assert!(!JobStatus::Downloading.is_terminal());
        assert!(!JobStatus::Processing.is_terminal());
        assert!(JobStatus::Completed.is_terminal());
        assert!(JobStatus::Error.is_terminal());
    }

    #[test]
    fn snapshot_deserializes_wire_shape() {
        let snap: JobSnapshot = serde_json::from_str(
            r#"{"id":"t1","status":"completed","progress":100,"outputPath":"out/t1.mp4"}"#,
        )
        .unwrap();
        assert_eq!(snap.id, "t1");
        assert_eq!(snap.status, JobStatus::Completed);
        assert_eq!(snap.progress, 100);
        assert_eq!(snap.output_path.as_deref(), Some("out/t1.mp4"));
        assert_eq!(snap.error, None);
        assert_eq!(snap.output_size, None);
    }

    #[test]
    fn snapshot_defaults_missing_fields() {
        let snap: JobSnapshot = serde_json::from_str(r#"{"id":"d1"}"#).unwrap();
        assert_eq!(snap.status, JobStatus::Pending);
        assert_eq!(snap.progress, 0);
    }

    #[test]
    fn completed_output_requires_terminal_success() {
        let mut job = Job::from_snapshot(
            JobKind::Trim,
            JobSnapshot {
                id: "t1".into(),
                status: JobStatus::Processing,
                progress: 40,
                error: None,
                // A buggy backend could leak a path early; the accessor
                // still refuses to expose it before completion.
                output_path: Some("out/t1.mp4".into()),
                output_size: None,
            },
        );
        assert_eq!(job.completed_output(), None);

        job.status = JobStatus::Completed;
        assert_eq!(job.completed_output(), Some("out/t1.mp4"));
        assert_eq!(job.error_message(), None);
    }

    #[test]
    fn error_message_requires_error_status() {
        let job = Job::from_snapshot(
            JobKind::Compress,
            JobSnapshot {
                id: "c1".into(),
                status: JobStatus::Error,
                progress: 0,
                error: Some("unsupported codec".into()),
                output_path: None,
                output_size: None,
            },
        );
        assert_eq!(job.error_message(), Some("unsupported codec"));
        assert_eq!(job.completed_output(), None);
    }
}
