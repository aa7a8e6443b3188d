use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

pub mod chat_deleter;
pub mod console;
pub mod constants;
pub mod dom_utils;
pub mod errors;
pub mod location;
pub mod models;
pub mod network;
pub mod pending;
pub mod utils;

use chat_deleter::ChatDeleter;
use console::BrowserConsole;
use dom_utils::BrowserChatList;
use location::BrowserLocation;
use models::ChatId;
use network::ApiClient;

// Main entry point for the WASM module
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    install_global_delete()
}

/// Point API calls at `base_url` instead of the build-time default.
#[wasm_bindgen(js_name = initApiConfig)]
pub fn init_api_config_js(base_url: &str) {
    network::init_api_config(base_url);
}

/// Delete a chat and update the sidebar.  Failures are logged to the console;
/// the promise only rejects when there is no window or document.
#[wasm_bindgen(js_name = deleteChat)]
pub async fn delete_chat(chat_id: String) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))?;

    let deleter = ChatDeleter::new(
        ApiClient,
        BrowserChatList::new(document),
        BrowserLocation::new(window.location()),
        BrowserConsole,
        network::api_config(),
    )
    .with_pending(pending::page_pending());

    deleter.run(&ChatId::from(chat_id)).await;
    Ok(())
}

// Templates wire their delete buttons as `onclick="deleteChat('{{id}}')"`, so
// the function has to be reachable as a global, not only as a module export.
fn install_global_delete() -> Result<(), JsValue> {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return Ok(()),
    };

    let delete_fn = Closure::wrap(Box::new(move |chat_id: String| {
        future_to_promise(async move {
            delete_chat(chat_id).await?;
            Ok(JsValue::UNDEFINED)
        })
    }) as Box<dyn FnMut(String) -> js_sys::Promise>);

    js_sys::Reflect::set(
        &window,
        &JsValue::from_str(constants::GLOBAL_DELETE_FN),
        delete_fn.as_ref(),
    )?;

    // Forget the closure so it outlives this call
    delete_fn.forget();

    Ok(())
}
