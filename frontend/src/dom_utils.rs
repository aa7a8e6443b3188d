//! dom_utils.rs – chat list lookups against the live document.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::{CHAT_ITEM_SELECTOR, CHAT_ROW_TAG};
use crate::errors::DeleteError;
use crate::utils::page_error;

/// The rendered chat list, as far as deletion is concerned.
pub trait IChatList {
    /// Remove the row whose anchor points at `chat_path`.
    ///
    /// Returns `Ok(false)` when no such row exists.
    fn remove_chat_item(&self, chat_path: &str) -> Result<bool, DeleteError>;
}

pub struct BrowserChatList {
    document: Document,
}

impl BrowserChatList {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl IChatList for BrowserChatList {
    fn remove_chat_item(&self, chat_path: &str) -> Result<bool, DeleteError> {
        let anchor = match find_chat_anchor(&self.document, chat_path).map_err(page_error)? {
            Some(anchor) => anchor,
            None => return Ok(false),
        };

        match anchor.closest(CHAT_ROW_TAG).map_err(page_error)? {
            Some(row) => {
                row.remove();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Find the list anchor whose `href` attribute equals `chat_path`.
///
/// Compares the raw attribute instead of building an `a[href="…"]` selector,
/// so ids containing quotes or brackets match literally.
pub fn find_chat_anchor(document: &Document, chat_path: &str) -> Result<Option<Element>, JsValue> {
    let anchors = document.query_selector_all(&format!("{} a[href]", CHAT_ITEM_SELECTOR))?;

    for i in 0..anchors.length() {
        let Some(node) = anchors.item(i) else { continue };
        let Ok(anchor) = node.dyn_into::<Element>() else { continue };
        if anchor.get_attribute("href").as_deref() == Some(chat_path) {
            return Ok(Some(anchor));
        }
    }
    Ok(None)
}
