// Paths and selectors shared with the server-rendered chat pages.

// Endpoint prefix for chat deletion; the chat id is appended as the last segment
pub const DELETE_ENDPOINT: &str = "/api/delete";

// Path of a single chat page, also used as the href of its list anchor
pub const CHAT_PATH_PREFIX: &str = "/chat/";

// Container class of each row in the sidebar chat list
pub const CHAT_ITEM_SELECTOR: &str = ".chat-item";

// Tag of the element that represents a whole chat row
pub const CHAT_ROW_TAG: &str = "li";

// Where the browser goes after the open chat is deleted
pub const HOME_PATH: &str = "/";

// Name under which `deleteChat` is published on `window` for inline handlers
pub const GLOBAL_DELETE_FN: &str = "deleteChat";
