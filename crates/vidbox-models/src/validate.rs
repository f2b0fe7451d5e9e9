//! Local submission validation.
//!
//! Pure functions with no side effects and no network access. Every check
//! runs before a submission request is built, so invalid input never reaches
//! the backend. Failure messages come from the fixed table below, not from
//! interpolated backend text.

use thiserror::Error;

use crate::params::UploadFile;
use crate::utils::extract_youtube_id;

/// Maximum accepted upload size (500 MB).
pub const MAX_UPLOAD_BYTES: u64 = 500 * 1024 * 1024;

/// Minimum accepted trim range length in seconds.
pub const MIN_TRIM_RANGE_SECS: f64 = 0.5;

/// Containers accepted by trim and screenshot.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "mkv", "webm"];

/// Containers accepted by convert and compress.
pub const EXTENDED_VIDEO_EXTENSIONS: &[&str] =
    &["mp4", "mov", "avi", "mkv", "webm", "flv", "wmv"];

/// Conversion targets offered to the user.
pub const CONVERT_OUTPUT_FORMATS: &[&str] = &["mp4", "mov", "avi", "mkv", "webm", "gif"];

/// A rejected submission. Recoverable by the user changing input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("The file is too large. Choose a file no larger than 500MB.")]
    FileTooLarge,

    #[error("Unsupported file format. Choose a video file.")]
    UnsupportedFormat,

    #[error("The start time must be before the end time.")]
    StartNotBeforeEnd,

    #[error("The selected range is too short. Select at least 0.5 seconds.")]
    RangeTooShort,

    #[error("The selected range extends past the end of the video.")]
    RangeOutOfBounds,

    #[error("The file is already in {0} format. Choose a different format.")]
    NoOpConversion(String),

    #[error("The timestamp must be within the video.")]
    TimestampOutOfBounds,

    #[error("Enter a valid YouTube URL.")]
    InvalidVideoUrl,
}

/// Check extension and size against the per-kind allow-list.
pub fn validate_upload(file: &UploadFile, allowed: &[&str]) -> Result<(), ValidationError> {
    let extension = file.extension().ok_or(ValidationError::UnsupportedFormat)?;
    if !allowed.contains(&extension.as_str()) {
        return Err(ValidationError::UnsupportedFormat);
    }
    if file.size() > MAX_UPLOAD_BYTES {
        return Err(ValidationError::FileTooLarge);
    }
    Ok(())
}

/// Check a trim range: `0 <= start < end <= duration` and at least
/// [`MIN_TRIM_RANGE_SECS`] long. `duration` is checked only when known.
pub fn validate_trim_range(
    start: f64,
    end: f64,
    duration: Option<f64>,
) -> Result<(), ValidationError> {
    if start < 0.0 || start >= end {
        return Err(ValidationError::StartNotBeforeEnd);
    }
    if end - start < MIN_TRIM_RANGE_SECS {
        return Err(ValidationError::RangeTooShort);
    }
    if let Some(duration) = duration {
        if end > duration {
            return Err(ValidationError::RangeOutOfBounds);
        }
    }
    Ok(())
}

/// Reject a conversion that would be a no-op: the requested format equals
/// the detected source extension, case-insensitively.
pub fn validate_conversion(file: &UploadFile, output_format: &str) -> Result<(), ValidationError> {
    validate_upload(file, EXTENDED_VIDEO_EXTENSIONS)?;
    let requested = output_format.to_ascii_lowercase();
    if file.extension().as_deref() == Some(requested.as_str()) {
        return Err(ValidationError::NoOpConversion(requested));
    }
    Ok(())
}

/// Check a screenshot position: non-negative, and within the video when the
/// duration is known.
pub fn validate_screenshot_time(
    timestamp: f64,
    duration: Option<f64>,
) -> Result<(), ValidationError> {
    if timestamp < 0.0 {
        return Err(ValidationError::TimestampOutOfBounds);
    }
    if let Some(duration) = duration {
        if timestamp > duration {
            return Err(ValidationError::TimestampOutOfBounds);
        }
    }
    Ok(())
}

/// A download submission needs a URL that yields a YouTube video id.
pub fn validate_download_url(url: &str) -> Result<(), ValidationError> {
    extract_youtube_id(url)
        .map(|_| ())
        .ok_or(ValidationError::InvalidVideoUrl)
}
