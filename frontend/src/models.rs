use serde::{Deserialize, Serialize};

/// Metadata for the most recently fetched video. Replaced wholesale on every
/// successful info request; the preview and format list always render from
/// the single current instance.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VideoInfo {
    pub title: String,
    pub thumbnail: String,
    pub url: String,
    pub formats: Vec<VideoFormat>,
}

/// One selectable download option. The backend orders formats by preference,
/// so the list is rendered in response order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VideoFormat {
    pub format_id: String,
    pub resolution: String,
    #[serde(default)]
    pub filesize: u64,
}

/// A completed download as reported by the backend. Only title and filepath
/// are guaranteed; the remaining fields show up on backends that keep richer
/// history records.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HistoryEntry {
    pub title: String,
    pub filepath: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub filesize_formatted: Option<String>,
    #[serde(default)]
    pub uploader: Option<String>,
    #[serde(default)]
    pub file_exists: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InfoRequest {
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DownloadRequest {
    pub url: String,
    pub format_id: String,
    pub folder: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_info_response_with_formats_in_order() {
        let body = r#"{
            "title": "Some clip",
            "thumbnail": "https://i.example.com/thumb.jpg",
            "url": "https://www.youtube.com/watch?v=abc123",
            "formats": [
                {"format_id": "22", "resolution": "720p", "filesize": 10485760},
                {"format_id": "18", "resolution": "360p", "filesize": 5242880}
            ]
        }"#;

        let info: VideoInfo = serde_json::from_str(body).unwrap();
        assert_eq!(info.title, "Some clip");
        assert_eq!(info.formats.len(), 2);
        assert_eq!(info.formats[0].format_id, "22");
        assert_eq!(info.formats[1].format_id, "18");
    }

    #[test]
    fn missing_filesize_defaults_to_zero() {
        let body = r#"{"format_id": "18", "resolution": "360p"}"#;
        let format: VideoFormat = serde_json::from_str(body).unwrap();
        assert_eq!(format.filesize, 0);
    }

    #[test]
    fn decodes_minimal_history_entry() {
        let body = r#"[{"title": "clip", "filepath": "/downloads/clip.mp4"}]"#;
        let entries: Vec<HistoryEntry> = serde_json::from_str(body).unwrap();
        assert_eq!(entries[0].title, "clip");
        assert_eq!(entries[0].filepath, "/downloads/clip.mp4");
        assert_eq!(entries[0].date, None);
        assert_eq!(entries[0].file_exists, None);
    }

    #[test]
    fn decodes_extended_history_entry() {
        let body = r#"{
            "title": "clip",
            "filepath": "/downloads/clip.mp4",
            "date": "2025-06-01 14:30:00",
            "filesize_formatted": "12.3 MB",
            "uploader": "SomeChannel",
            "file_exists": false
        }"#;

        let entry: HistoryEntry = serde_json::from_str(body).unwrap();
        assert_eq!(entry.date.as_deref(), Some("2025-06-01 14:30:00"));
        assert_eq!(entry.filesize_formatted.as_deref(), Some("12.3 MB"));
        assert_eq!(entry.file_exists, Some(false));
    }

    #[test]
    fn decodes_error_response() {
        let body = r#"{"error": "Unsupported URL"}"#;
        let err: ErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(err.error, "Unsupported URL");
    }

    #[test]
    fn encodes_download_request_fields() {
        let request = DownloadRequest {
            url: "https://www.youtube.com/watch?v=abc123".to_string(),
            format_id: "22".to_string(),
            folder: "downloads".to_string(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["url"], "https://www.youtube.com/watch?v=abc123");
        assert_eq!(value["format_id"], "22");
        assert_eq!(value["folder"], "downloads");
    }
}
