use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::models::DeleteResponse;
use crate::utils::describe_js_error;

/// Transport used to reach the chat API.
///
/// `Err` means the request never produced a response; any HTTP status,
/// including failures, comes back as `Ok`.
#[allow(async_fn_in_trait)]
pub trait IChatApi {
    async fn send_delete(&self, url: &str) -> Result<DeleteResponse, String>;
}

// REST client backed by `window.fetch`
pub struct ApiClient;

impl IChatApi for ApiClient {
    async fn send_delete(&self, url: &str) -> Result<DeleteResponse, String> {
        Self::fetch(url, "DELETE")
            .await
            .map_err(|e| describe_js_error(&e))
    }
}

impl ApiClient {
    // Body-less request; the response text is kept so callers can read the
    // server's error message.
    async fn fetch(url: &str, method: &str) -> Result<DeleteResponse, JsValue> {
        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);

        let request = Request::new_with_str_and_init(url, &opts)?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window exists"))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        let resp: Response = resp_value.dyn_into()?;

        // The status already arrived; a body that fails to stream is treated
        // as empty rather than as a transport failure.
        let body = match resp.text() {
            Ok(promise) => JsFuture::from(promise)
                .await
                .ok()
                .and_then(|text| text.as_string())
                .unwrap_or_default(),
            Err(_) => String::new(),
        };

        Ok(DeleteResponse {
            ok: resp.ok(),
            status: resp.status(),
            body,
        })
    }
}
