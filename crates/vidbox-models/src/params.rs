//! Per-kind submission parameters.
//!
//! Parameters are validated locally before any network call and otherwise
//! passed through to the backend opaquely.

use crate::job::JobKind;
use crate::utils::file_extension;
use crate::validate::{self, ValidationError};

/// A file the user picked for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    /// Original file name, used for extension checks and the multipart part
    pub name: String,
    /// Raw file contents
    pub data: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    /// Lowercased file extension, if any.
    pub fn extension(&self) -> Option<String> {
        file_extension(&self.name)
    }
}

/// Screenshot output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpg,
    Png,
}

impl ImageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Jpg => "jpg",
            ImageFormat::Png => "png",
        }
    }
}

/// Screenshot output quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageQuality {
    Low,
    Medium,
    High,
}

impl ImageQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageQuality::Low => "low",
            ImageQuality::Medium => "medium",
            ImageQuality::High => "high",
        }
    }
}

/// How aggressively to compress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionLevel {
    Light,
    Medium,
    High,
}

impl CompressionLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompressionLevel::Light => "light",
            CompressionLevel::Medium => "medium",
            CompressionLevel::High => "high",
        }
    }

    /// Expected size reduction for this level.
    pub fn size_factor(&self) -> f64 {
        match self {
            CompressionLevel::Light => 0.85,
            CompressionLevel::Medium => 0.7,
            CompressionLevel::High => 0.4,
        }
    }
}

/// Target output resolution for compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetResolution {
    Original,
    P1080,
    P720,
    P480,
}

impl TargetResolution {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetResolution::Original => "original",
            TargetResolution::P1080 => "1080p",
            TargetResolution::P720 => "720p",
            TargetResolution::P480 => "480p",
        }
    }

    /// Expected size reduction from downscaling alone.
    pub fn size_factor(&self) -> f64 {
        match self {
            TargetResolution::Original => 1.0,
            TargetResolution::P1080 => 0.9,
            TargetResolution::P720 => 0.6,
            TargetResolution::P480 => 0.3,
        }
    }
}

/// Rough output-size estimate shown to the user before compressing.
pub fn estimate_compressed_size(
    original_size: u64,
    level: CompressionLevel,
    resolution: TargetResolution,
) -> u64 {
    (original_size as f64 * level.size_factor() * resolution.size_factor()).floor() as u64
}

/// Parameters for one job submission, keyed by job kind.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionParams {
    Download {
        /// YouTube video URL
        url: String,
        /// Backend format identifier chosen from the video's format list
        itag: u32,
    },
    Convert {
        file: UploadFile,
        /// Requested container, e.g. "webm"
        output_format: String,
    },
    Trim {
        file: UploadFile,
        /// Range start in seconds
        start_time: f64,
        /// Range end in seconds
        end_time: f64,
        output_format: String,
        /// Locally known media duration; used only for validation,
        /// never transmitted
        duration: Option<f64>,
    },
    Screenshot {
        file: UploadFile,
        /// Frame position in seconds
        timestamp: f64,
        format: ImageFormat,
        quality: ImageQuality,
        /// Locally known media duration; validation only
        duration: Option<f64>,
    },
    Compress {
        file: UploadFile,
        level: CompressionLevel,
        resolution: TargetResolution,
    },
}

impl SubmissionParams {
    pub fn kind(&self) -> JobKind {
        match self {
            SubmissionParams::Download { .. } => JobKind::Download,
            SubmissionParams::Convert { .. } => JobKind::Convert,
            SubmissionParams::Trim { .. } => JobKind::Trim,
            SubmissionParams::Screenshot { .. } => JobKind::Screenshot,
            SubmissionParams::Compress { .. } => JobKind::Compress,
        }
    }

    /// Run the kind-specific local checks. Pure; no network access.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            SubmissionParams::Download { url, .. } => validate::validate_download_url(url),
            SubmissionParams::Convert {
                file,
                output_format,
            } => validate::validate_conversion(file, output_format),
            SubmissionParams::Trim {
                file,
                start_time,
                end_time,
                duration,
                ..
            } => {
                validate::validate_upload(file, validate::VIDEO_EXTENSIONS)?;
                validate::validate_trim_range(*start_time, *end_time, *duration)
            }
            SubmissionParams::Screenshot {
                file,
                timestamp,
                duration,
                ..
            } => {
                validate::validate_upload(file, validate::VIDEO_EXTENSIONS)?;
                validate::validate_screenshot_time(*timestamp, *duration)
            }
            SubmissionParams::Compress { file, .. } => {
                validate::validate_upload(file, validate::EXTENDED_VIDEO_EXTENSIONS)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_file_extension_is_lowercased() {
        let file = UploadFile::new("Holiday.MP4", vec![1, 2, 3]);
        assert_eq!(file.extension().as_deref(), Some("mp4"));
        assert_eq!(file.size(), 3);

        let no_ext = UploadFile::new("holiday", vec![]);
        assert_eq!(no_ext.extension(), None);
    }

    #[test]
    fn compression_estimate_matches_factor_table() {
        // medium level, 720p: 0.7 * 0.6
        assert_eq!(
            estimate_compressed_size(1_000_000, CompressionLevel::Medium, TargetResolution::P720),
            420_000
        );
        // light level, original resolution: 0.85
        assert_eq!(
            estimate_compressed_size(100, CompressionLevel::Light, TargetResolution::Original),
            85
        );
        // high level, 480p: 0.4 * 0.3
        assert_eq!(
            estimate_compressed_size(1_000, CompressionLevel::High, TargetResolution::P480),
            120
        );
    }

    #[test]
    fn params_report_their_kind() {
        let params = SubmissionParams::Compress {
            file: UploadFile::new("a.mp4", vec![0]),
            level: CompressionLevel::Medium,
            resolution: TargetResolution::Original,
        };
        assert_eq!(params.kind(), JobKind::Compress);
    }
}
