//! YouTube video metadata returned by the info endpoint.

use serde::{Deserialize, Serialize};

/// Metadata for one YouTube video, including the downloadable formats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoInfo {
    pub video_id: String,
    pub title: String,
    pub author: String,
    pub thumbnail_url: String,
    /// Duration in seconds
    pub duration: f64,
    pub formats: Vec<VideoFormat>,
}

impl VideoInfo {
    /// Pick the format preselected for the user: the highest-bitrate mp4
    /// that carries both video and audio. `None` when no such format exists.
    pub fn best_download_format(&self) -> Option<&VideoFormat> {
        self.formats
            .iter()
            .filter(|f| f.container == "mp4" && f.has_video && f.has_audio)
            .max_by_key(|f| f.bitrate)
    }
}

/// One downloadable rendition of a video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoFormat {
    /// Backend format identifier, passed back on download submission
    pub itag: u32,
    /// Human-readable quality label, e.g. "720p"
    pub quality: String,
    pub mime_type: String,
    pub container: String,
    pub has_video: bool,
    pub has_audio: bool,
    pub codecs: String,
    pub bitrate: u64,
    /// Byte count when the backend knows it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}
