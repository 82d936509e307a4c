use crate::models::{HistoryEntry, VideoFormat};

// Matches the label the original UI showed: bytes / 1048576 to one decimal.
pub fn format_size_mb(bytes: u64) -> String {
    format!("{:.1}", bytes as f64 / 1_048_576.0)
}

pub fn format_option_label(format: &VideoFormat) -> String {
    format!("{} ({} MB)", format.resolution, format_size_mb(format.filesize))
}

// Recognizes the two watch-page URL shapes that carry a video id. Anything
// else has no embeddable preview.
pub fn extract_video_id(url: &str) -> Option<String> {
    if let Some((_, rest)) = url.split_once("shorts/") {
        return Some(rest.split('?').next().unwrap_or(rest).to_string());
    }
    if let Some((_, rest)) = url.split_once("v=") {
        return Some(rest.split('&').next().unwrap_or(rest).to_string());
    }
    None
}

pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{video_id}")
}

pub fn format_history_line(entry: &HistoryEntry) -> String {
    format!("{} → saved at {}", entry.title, entry.filepath)
}

pub fn format_history_date(date: &str) -> String {
    if let Ok(parsed) = chrono::NaiveDateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S") {
        parsed.format("%Y-%m-%d").to_string()
    } else {
        date.to_string()
    }
}

// Secondary line under a history entry, built from whatever optional fields
// the backend included.
pub fn format_history_meta(entry: &HistoryEntry) -> Option<String> {
    let mut parts = Vec::new();

    if let Some(date) = &entry.date {
        parts.push(format_history_date(date));
    }
    if let Some(size) = &entry.filesize_formatted {
        parts.push(size.clone());
    }
    if let Some(uploader) = &entry.uploader {
        parts.push(uploader.clone());
    }
    if entry.file_exists == Some(false) {
        parts.push("file missing".to_string());
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" · "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, filepath: &str) -> HistoryEntry {
        HistoryEntry {
            title: title.to_string(),
            filepath: filepath.to_string(),
            date: None,
            filesize_formatted: None,
            uploader: None,
            file_exists: None,
        }
    }

    #[test]
    fn size_label_has_one_decimal() {
        assert_eq!(format_size_mb(1_048_576), "1.0");
        assert_eq!(format_size_mb(1_572_864), "1.5");
        assert_eq!(format_size_mb(157_286_400), "150.0");
        assert_eq!(format_size_mb(0), "0.0");
    }

    #[test]
    fn option_label_combines_resolution_and_size() {
        let format = VideoFormat {
            format_id: "22".to_string(),
            resolution: "720p".to_string(),
            filesize: 10_485_760,
        };
        assert_eq!(format_option_label(&format), "720p (10.0 MB)");
    }

    #[test]
    fn video_id_from_shorts_url() {
        let id = extract_video_id("https://www.youtube.com/shorts/abc123?x=1");
        assert_eq!(id.as_deref(), Some("abc123"));
    }

    #[test]
    fn video_id_from_watch_url() {
        let id = extract_video_id("https://www.youtube.com/watch?v=abc123&t=5");
        assert_eq!(id.as_deref(), Some("abc123"));
    }

    #[test]
    fn video_id_without_trailing_parameters() {
        let shorts = extract_video_id("https://www.youtube.com/shorts/abc123");
        assert_eq!(shorts.as_deref(), Some("abc123"));

        let watch = extract_video_id("https://www.youtube.com/watch?v=abc123");
        assert_eq!(watch.as_deref(), Some("abc123"));
    }

    #[test]
    fn shorts_pattern_takes_precedence() {
        let id = extract_video_id("https://www.youtube.com/shorts/abc123?v=other");
        assert_eq!(id.as_deref(), Some("abc123"));
    }

    #[test]
    fn no_video_id_for_unrecognized_url() {
        assert_eq!(extract_video_id("https://example.com/video/42"), None);
    }

    #[test]
    fn embed_url_ends_with_the_id() {
        assert!(embed_url("abc123").ends_with("/embed/abc123"));
    }

    #[test]
    fn history_line_matches_display_format() {
        let entry = entry("clip", "/downloads/clip.mp4");
        assert_eq!(format_history_line(&entry), "clip → saved at /downloads/clip.mp4");
    }

    #[test]
    fn history_date_is_shortened_when_parseable() {
        assert_eq!(format_history_date("2025-06-01 14:30:00"), "2025-06-01");
    }

    #[test]
    fn history_date_falls_back_to_raw_text() {
        assert_eq!(format_history_date("yesterday"), "yesterday");
    }

    #[test]
    fn history_meta_joins_present_fields() {
        let mut e = entry("clip", "/downloads/clip.mp4");
        e.date = Some("2025-06-01 14:30:00".to_string());
        e.filesize_formatted = Some("12.3 MB".to_string());
        e.file_exists = Some(false);

        assert_eq!(
            format_history_meta(&e).as_deref(),
            Some("2025-06-01 · 12.3 MB · file missing")
        );
    }

    #[test]
    fn history_meta_is_empty_for_minimal_entries() {
        assert_eq!(format_history_meta(&entry("clip", "/x.mp4")), None);
    }
}
