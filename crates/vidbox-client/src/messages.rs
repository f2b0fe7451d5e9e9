//! Fixed table of user-facing fallback messages.
//!
//! Used when a request fails on the wire or the backend omits an error
//! message. Backend-provided messages always take precedence; these are the
//! only strings the client invents.

use vidbox_models::JobKind;

pub(crate) const VIDEO_INFO_FALLBACK: &str =
    "Failed to fetch video information. Check your network connection.";

pub(crate) const ARTIFACT_FALLBACK: &str = "Failed to download the processed file.";

pub(crate) const NO_ARTIFACT: &str = "The job has not produced a downloadable file.";

pub(crate) fn submit_fallback(kind: JobKind) -> &'static str {
    match kind {
        JobKind::Download => "Failed to start the download. Check your network connection.",
        JobKind::Convert => "Failed to start the conversion. Check the file size.",
        JobKind::Trim => "Failed to start trimming.",
        JobKind::Screenshot => "Failed to capture the screenshot.",
        JobKind::Compress => "Failed to start the compression. Check the file size.",
    }
}

pub(crate) fn status_fallback(kind: JobKind) -> &'static str {
    match kind {
        JobKind::Download => "Failed to fetch the download status.",
        JobKind::Convert => "Failed to fetch the conversion status.",
        JobKind::Trim => "Failed to fetch the trimming status.",
        JobKind::Screenshot => "Failed to fetch the screenshot status.",
        JobKind::Compress => "Failed to fetch the compression status.",
    }
}
