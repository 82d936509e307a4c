use crate::env_variable_utils::BACKEND_URL;
use crate::models::{DownloadRequest, ErrorResponse, HistoryEntry, InfoRequest, VideoInfo};
use gloo_net::http::Request;

/// Asks the backend for metadata and the available formats of a video URL.
///
/// The backend reports extraction failures inside the body (`{"error": …}`)
/// rather than through the status code, so the body is inspected before it is
/// decoded into [`VideoInfo`]. The error string is returned verbatim.
pub async fn fetch_video_info(url: &str) -> Result<VideoInfo, String> {
    let backend_url = &*BACKEND_URL;
    let endpoint = format!("{backend_url}/get_info");

    let request_body = InfoRequest {
        url: url.to_string(),
    };

    let response = Request::post(&endpoint)
        .json(&request_body)
        .map_err(|e| format!("Request error: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    let body = response
        .json::<serde_json::Value>()
        .await
        .map_err(|e| format!("Failed to parse info response: {e}"))?;

    if let Some(error) = body.get("error").and_then(|e| e.as_str()) {
        return Err(error.to_string());
    }

    serde_json::from_value::<VideoInfo>(body)
        .map_err(|e| format!("Failed to parse info response: {e}"))
}

/// Asks the backend to perform the download and returns the file content.
/// A non-2xx status carries a JSON error body; its message is returned
/// verbatim when it can be decoded.
pub async fn request_download(
    url: &str,
    format_id: &str,
    folder: &str,
) -> Result<Vec<u8>, String> {
    let backend_url = &*BACKEND_URL;
    let endpoint = format!("{backend_url}/download");

    let request_body = DownloadRequest {
        url: url.to_string(),
        format_id: format_id.to_string(),
        folder: folder.to_string(),
    };

    let response = Request::post(&endpoint)
        .json(&request_body)
        .map_err(|e| format!("Request error: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if response.ok() {
        response
            .binary()
            .await
            .map_err(|e| format!("Failed to read file content: {e}"))
    } else {
        let status = response.status();
        match response.json::<ErrorResponse>().await {
            Ok(err) => Err(err.error),
            Err(_) => Err(format!("Download failed with status: {status}")),
        }
    }
}

pub async fn load_history() -> Result<Vec<HistoryEntry>, String> {
    let backend_url = &*BACKEND_URL;
    let endpoint = format!("{backend_url}/history");

    let response = Request::get(&endpoint)
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if response.ok() {
        response
            .json::<Vec<HistoryEntry>>()
            .await
            .map_err(|e| format!("Failed to parse history: {e}"))
    } else {
        Err(format!("HTTP error: {}", response.status()))
    }
}

pub async fn clear_history() -> Result<(), String> {
    let backend_url = &*BACKEND_URL;
    let endpoint = format!("{backend_url}/clear_history");

    let response = Request::post(&endpoint)
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if response.ok() {
        Ok(())
    } else {
        Err(format!("HTTP error: {}", response.status()))
    }
}
