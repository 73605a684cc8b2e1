//! Browser-side file save.
//!
//! Wraps the bytes in a `Blob`, points a temporary anchor at an object URL,
//! clicks it, then releases the URL and the anchor again.

use wasm_bindgen::JsCast;
use web_sys::{Blob, HtmlAnchorElement, Url};

use crate::types::{AppError, AppResult};

fn browser_err(context: &str, e: impl std::fmt::Debug) -> AppError {
    AppError::Browser(format!("{}: {:?}", context, e))
}

/// Save `bytes` through the browser's download flow under `file_name`.
pub fn save_file(bytes: &[u8], file_name: &str) -> AppResult<()> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let blob =
        Blob::new_with_u8_array_sequence(&parts).map_err(|e| browser_err("create blob", e))?;

    let url =
        Url::create_object_url_with_blob(&blob).map_err(|e| browser_err("create object URL", e))?;

    let window =
        web_sys::window().ok_or_else(|| AppError::Browser("no window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| AppError::Browser("no document".to_string()))?;
    let body = document
        .body()
        .ok_or_else(|| AppError::Browser("no body".to_string()))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| browser_err("create anchor", e))?
        .dyn_into()
        .map_err(|e| browser_err("cast anchor", e))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);

    // The anchor must be in the document for the click to start a download.
    body.append_child(&anchor)
        .map_err(|e| browser_err("attach anchor", e))?;
    anchor.click();

    Url::revoke_object_url(&url).map_err(|e| browser_err("revoke object URL", e))?;
    body.remove_child(&anchor)
        .map_err(|e| browser_err("detach anchor", e))?;

    Ok(())
}
