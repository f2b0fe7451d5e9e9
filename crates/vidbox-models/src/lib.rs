//! Shared data models for the VidBox backend client.
//!
//! This crate provides Serde-serializable types for:
//! - Jobs, job kinds, and the status state machine
//! - Per-kind submission parameters and upload files
//! - The `{success, data, error}` API response envelope
//! - YouTube video metadata and format selection
//! - Local, pre-network validation with a fixed message table

pub mod envelope;
pub mod job;
pub mod params;
pub mod utils;
pub mod validate;
pub mod video;

// Re-export common types
pub use envelope::ApiEnvelope;
pub use job::{Job, JobKind, JobSnapshot, JobStatus};
pub use params::{
    estimate_compressed_size, CompressionLevel, ImageFormat, ImageQuality, SubmissionParams,
    TargetResolution, UploadFile,
};
pub use utils::{extract_youtube_id, file_extension, format_bytes, format_duration};
pub use validate::{ValidationError, MAX_UPLOAD_BYTES, MIN_TRIM_RANGE_SECS};
pub use video::{VideoFormat, VideoInfo};
