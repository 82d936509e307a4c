use js_sys::{Array, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, HtmlAnchorElement, Url};

/// Suggested filename for every saved download. The backend streams raw bytes
/// without a content-disposition name, so the client picks a fixed one.
pub const DOWNLOAD_FILENAME: &str = "video.mp4";

/// Hands the downloaded bytes to the browser as a file-save: wraps them in a
/// Blob, points a temporary anchor at its object URL and clicks it.
pub fn save_file(bytes: &[u8], filename: &str) -> Result<(), String> {
    let parts = Array::of1(&Uint8Array::from(bytes).into());
    let blob =
        Blob::new_with_u8_array_sequence(&parts).map_err(|e| js_error("create blob", &e))?;
    let object_url =
        Url::create_object_url_with_blob(&blob).map_err(|e| js_error("create object URL", &e))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document available".to_string())?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| js_error("create anchor", &e))?
        .dyn_into()
        .map_err(|_| "anchor element has unexpected type".to_string())?;

    anchor.set_href(&object_url);
    anchor.set_download(filename);
    anchor.click();

    let _ = Url::revoke_object_url(&object_url);
    Ok(())
}

fn js_error(action: &str, error: &JsValue) -> String {
    match error.as_string() {
        Some(text) => format!("failed to {action}: {text}"),
        None => format!("failed to {action}"),
    }
}
