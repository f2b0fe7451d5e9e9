//! URL parsing and formatting helpers shared across the client.

use url::Url;

/// Extract the 11-character video id from a YouTube URL.
///
/// Accepted shapes:
/// - `https://youtube.com/watch?v=VIDEO_ID`
/// - `https://youtu.be/VIDEO_ID`
/// - `https://youtube.com/embed/VIDEO_ID`
/// - `https://youtube.com/v/VIDEO_ID`
/// - `https://youtube.com/shorts/VIDEO_ID`
///
/// `www.` and `m.` subdomains, extra query parameters and fragments are all
/// tolerated. Returns `None` for anything that is not a YouTube video URL.
pub fn extract_youtube_id(raw: &str) -> Option<String> {
    let parsed = Url::parse(raw.trim()).ok()?;
    let host = parsed
        .host_str()?
        .trim_start_matches("www.")
        .to_ascii_lowercase();

    let candidate = if host == "youtu.be" {
        parsed.path_segments()?.next().map(str::to_owned)
    } else if host == "youtube.com" || host.ends_with(".youtube.com") {
        if parsed.path() == "/watch" {
            parsed
                .query_pairs()
                .find(|(key, _)| key == "v")
                .map(|(_, value)| value.into_owned())
        } else {
            let mut segments = parsed.path_segments()?;
            match segments.next()? {
                "embed" | "v" | "shorts" => segments.next().map(str::to_owned),
                _ => None,
            }
        }
    } else {
        None
    }?;

    is_youtube_id(&candidate).then_some(candidate)
}

/// YouTube video ids are exactly 11 characters of `[A-Za-z0-9_-]`.
fn is_youtube_id(id: &str) -> bool {
    id.len() == 11
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Lowercased file extension, `None` for dotless or dot-leading names.
pub fn file_extension(name: &str) -> Option<String> {
    let (stem, extension) = name.rsplit_once('.')?;
    if stem.is_empty() || extension.is_empty() {
        return None;
    }
    Some(extension.to_ascii_lowercase())
}

/// Human-readable byte count, e.g. `1536 -> "1.5 KB"`.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["Bytes", "KB", "MB", "GB", "TB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let exponent = ((bytes as f64).log2() / 10.0).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / f64::powi(1024.0, exponent as i32);
    let rendered = format!("{value:.2}");
    let rendered = rendered.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", rendered, UNITS[exponent])
}

/// Seconds to a `MM:SS` clock, switching to `HH:MM:SS` past an hour.
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn youtube_id_from_common_shapes() {
        for url in [
            "https://youtube.com/watch?v=dQw4w9WgXcQ",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://m.youtube.com/watch?v=dQw4w9WgXcQ&t=42s",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ?si=abc123",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://youtube.com/v/dQw4w9WgXcQ",
            "https://youtube.com/shorts/dQw4w9WgXcQ",
            "  https://youtube.com/watch?v=dQw4w9WgXcQ  ",
        ] {
            assert_eq!(
                extract_youtube_id(url).as_deref(),
                Some("dQw4w9WgXcQ"),
                "failed for {url}"
            );
        }
    }

    #[test]
    fn youtube_id_rejections() {
        for url in [
            "",
            "not a url",
            "https://example.com/watch?v=dQw4w9WgXcQ",
            "https://youtube.com/watch",
            "https://youtube.com/watch?v=tooshort",
            "https://youtube.com/playlist?list=PL123",
            "https://fakeyoutube.com/watch?v=dQw4w9WgXcQ",
        ] {
            assert_eq!(extract_youtube_id(url), None, "accepted {url}");
        }
    }

    #[test]
    fn file_extension_cases() {
        assert_eq!(file_extension("video.mp4").as_deref(), Some("mp4"));
        assert_eq!(file_extension("archive.tar.GZ").as_deref(), Some("gz"));
        assert_eq!(file_extension("noext"), None);
        assert_eq!(file_extension(".hidden"), None);
        assert_eq!(file_extension("trailing."), None);
    }

    #[test]
    fn bytes_formatting() {
        assert_eq!(format_bytes(0), "0 Bytes");
        assert_eq!(format_bytes(512), "512 Bytes");
        assert_eq!(format_bytes(1024), "1 KB");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5 MB");
    }

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration(0.0), "00:00");
        assert_eq!(format_duration(125.0), "02:05");
        assert_eq!(format_duration(3600.0), "01:00:00");
        assert_eq!(format_duration(3725.9), "01:02:05");
        assert_eq!(format_duration(-3.0), "00:00");
    }
}
