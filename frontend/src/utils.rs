//! Utility helpers shared across the WASM frontend.

use wasm_bindgen::{JsCast, JsValue};

use crate::errors::DeleteError;

/// Turn a thrown JS value into a readable message.
///
/// `fetch` rejects with a `TypeError`, DOM calls throw `DOMException`s, and
/// some APIs throw plain strings, so try each shape before falling back to the
/// debug representation.
pub fn describe_js_error(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        String::from(error.message())
    } else if let Some(text) = err.as_string() {
        text
    } else {
        format!("{:?}", err)
    }
}

/// Map a failed DOM or location call onto [`DeleteError::Page`].
pub fn page_error(err: JsValue) -> DeleteError {
    DeleteError::Page(describe_js_error(&err))
}

// wasm-bindgen tests ----------------------------------------------------------
