//! Client-side file download via a Blob URL.

use wasm_bindgen::{JsCast, JsValue};

fn js_err(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// Offer `contents` to the user as a file named `filename`.
pub fn download_text(filename: &str, mime: &str, contents: &str) -> Result<(), String> {
    let blob_parts = js_sys::Array::new();
    blob_parts.push(&JsValue::from_str(contents));

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&blob_parts, &options)
        .map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let result = click_anchor(&url, filename);
    let _ = web_sys::Url::revoke_object_url(&url);
    result
}

/// Attach a hidden anchor to the body, click it, then remove it.
fn click_anchor(url: &str, filename: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document")?;
    let body = document.body().ok_or("No document body")?;
    let a: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_err)?
        .unchecked_into();
    a.set_href(url);
    a.set_download(filename);
    a.style().set_property("display", "none").map_err(js_err)?;

    body.append_child(&a).map_err(js_err)?;
    a.click();
    a.remove();
    Ok(())
}
