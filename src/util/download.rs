//! Hand downloaded bytes to the browser as a file save.
//!
//! Builds a `Blob`, points a temporary `<a download>` at an object URL for
//! it, clicks the anchor and revokes the URL.

use wasm_bindgen::JsCast;

fn js_err(e: &wasm_bindgen::JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{e:?}"))
}

/// Save `bytes` as `filename`.
///
/// # Errors
///
/// Returns a description of the first browser API call that failed.
pub fn save_bytes(filename: &str, content_type: &str, bytes: &[u8]) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
    let document = window.document().ok_or_else(|| "no document".to_owned())?;

    let data = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&data);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(content_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(|e| js_err(&e))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| js_err(&e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| js_err(&e))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "anchor cast failed".to_owned())?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(|e| js_err(&e))
}
