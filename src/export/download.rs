use gloo_timers::callback::Timeout;
use js_sys::{Array, Uint8Array};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::error::{js_message, AppError, AppResult};

const REVOKE_DELAY_MS: u32 = 1_000;

fn browser_error(value: wasm_bindgen::JsValue) -> AppError {
    AppError::Browser(js_message(&value))
}

/// Hands `bytes` to the browser as a file download.
pub fn download_bytes(bytes: &[u8], file_name: &str, mime: &str) -> AppResult<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| AppError::Browser("no document".into()))?;

    let parts = Array::of1(&Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(browser_error)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(browser_error)?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(browser_error)?
        .dyn_into()
        .map_err(|_| AppError::Browser("could not create a download link".into()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    // Revoking right away can cancel the download in some browsers.
    Timeout::new(REVOKE_DELAY_MS, move || {
        if let Err(err) = Url::revoke_object_url(&url) {
            log::warn!("could not revoke download url: {}", js_message(&err));
        }
    })
    .forget();
    Ok(())
}
