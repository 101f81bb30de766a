use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, Document, HtmlElement, Url};

/// Log a message to the browser console.
pub fn log(s: &str) {
    web_sys::console::log_1(&JsValue::from_str(s));
}

pub fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .ok_or("no window")?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// Any displayable error as a JS string.
pub fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn click_download(document: &Document, href: &str, filename: &str) -> Result<(), JsValue> {
    let a = document.create_element("a")?.dyn_into::<HtmlElement>()?;
    a.set_attribute("href", href)?;
    a.set_attribute("download", filename)?;
    a.click();
    Ok(())
}

/// Offer text as a file download.
pub fn save_text_as_file(document: &Document, filename: &str, text: &str) -> Result<(), JsValue> {
    let array = Array::new();
    array.push(&JsValue::from_str(text));
    let blob = Blob::new_with_str_sequence(&array)?;
    let url = Url::create_object_url_with_blob(&blob)?;
    click_download(document, &url, filename)?;
    Url::revoke_object_url(&url)
}

/// Offer a data URL (e.g. from `canvas.toDataURL`) as a file download.
pub fn save_data_url(document: &Document, filename: &str, data_url: &str) -> Result<(), JsValue> {
    click_download(document, data_url, filename)
}
