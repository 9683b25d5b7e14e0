//! Browser Helpers
//!
//! Thin wrappers over the `web-sys` calls the pages need.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::error::BrowserError;

fn window() -> Result<web_sys::Window, BrowserError> {
    web_sys::window().ok_or(BrowserError::NoWindow)
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Write text to the system clipboard
pub async fn copy_text(text: &str) -> Result<(), BrowserError> {
    let promise = window()?.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| BrowserError::Clipboard(describe(&e)))
}

/// Trigger a download of an existing asset through a temporary anchor
pub fn download(href: &str, file_name: &str) -> Result<(), BrowserError> {
    let failed = |e: JsValue| BrowserError::Download(describe(&e));

    let document = window()?
        .document()
        .ok_or_else(|| BrowserError::Download("no document".to_string()))?;
    let body = document
        .body()
        .ok_or_else(|| BrowserError::Download("no body".to_string()))?;

    let link = document
        .create_element("a")
        .map_err(failed)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| BrowserError::Download("not an anchor".to_string()))?;
    link.set_href(href);
    link.set_download(file_name);

    body.append_child(&link).map_err(failed)?;
    link.click();
    body.remove_child(&link).map_err(failed)?;
    Ok(())
}

pub fn scroll_to_top() {
    if let Some(win) = web_sys::window() {
        win.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

pub fn set_document_title(title: &str) {
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        doc.set_title(title);
    }
}
