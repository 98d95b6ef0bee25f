//! Browser download helper for exported payloads.
//!
//! Client-side (hydrate): wraps the bytes in a blob URL and clicks a
//! transient anchor. Server-side: no-op, downloads only exist in the
//! browser.

/// Offer `bytes` to the user as a file download named `filename`.
///
/// Failures are swallowed: if the document refuses any step there is
/// nowhere better to surface it than the console, and the export itself
/// already succeeded.
pub fn save_bytes(filename: &str, bytes: &[u8]) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes));
        let Ok(blob) = web_sys::Blob::new_with_u8_array_sequence(&parts) else {
            leptos::logging::warn!("download failed: could not build blob");
            return;
        };
        let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
            leptos::logging::warn!("download failed: could not build object URL");
            return;
        };

        let anchor = document
            .create_element("a")
            .ok()
            .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().ok());
        if let Some(anchor) = anchor {
            anchor.set_href(&url);
            anchor.set_download(filename);
            // The anchor must be in the document for the click to count.
            if let Some(body) = document.body() {
                let _ = body.append_child(&anchor);
            }
            anchor.click();
            anchor.remove();
        }
        let _ = web_sys::Url::revoke_object_url(&url);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (filename, bytes);
    }
}
