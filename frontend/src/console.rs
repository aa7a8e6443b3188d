//! Developer-facing diagnostics.  Nothing here is shown to the user.

/// Sink for diagnostic messages.
pub trait IConsole {
    fn error(&self, message: &str);
    fn warn(&self, message: &str);
}

/// Writes to the browser's devtools console.
pub struct BrowserConsole;

impl IConsole for BrowserConsole {
    fn error(&self, message: &str) {
        web_sys::console::error_1(&message.into());
    }

    fn warn(&self, message: &str) {
        web_sys::console::warn_1(&message.into());
    }
}
