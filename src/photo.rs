//! Photo Ingest
//!
//! Reads a user-selected image into a `data:` URL for inline storage on the
//! listing. The only suspension point in the app.

use js_sys::Promise;
use std::fmt;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileReader};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoError {
    /// The browser could not read the selected file
    Read,
    /// The read finished but did not produce a data URL
    Decode,
}

impl fmt::Display for PhotoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhotoError::Read => write!(f, "The selected photo could not be read."),
            PhotoError::Decode => write!(f, "The selected photo could not be decoded."),
        }
    }
}

/// Read `file` fully and return its contents as a `data:` URL
pub async fn read_as_data_url(file: &File) -> Result<String, PhotoError> {
    let reader = FileReader::new().map_err(|_| PhotoError::Read)?;

    let done = Promise::new(&mut |resolve, reject| {
        let onload = Closure::once_into_js(move |_: web_sys::Event| {
            let _ = resolve.call0(&JsValue::NULL);
        });
        reader.set_onload(Some(onload.unchecked_ref()));

        let onerror = Closure::once_into_js(move |_: web_sys::Event| {
            let _ = reject.call0(&JsValue::NULL);
        });
        reader.set_onerror(Some(onerror.unchecked_ref()));
    });

    reader.read_as_data_url(file).map_err(|_| PhotoError::Read)?;
    JsFuture::from(done).await.map_err(|_| PhotoError::Read)?;

    reader
        .result()
        .ok()
        .and_then(|value| value.as_string())
        .ok_or(PhotoError::Decode)
}
