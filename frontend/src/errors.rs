use thiserror::Error;

/// Failures of a chat delete.  None of them reach the user; they are written
/// to the browser console.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeleteError {
    /// The server answered with a non-ok status.
    #[error("Failed to delete chat: HTTP {status}{}", reason_suffix(.reason))]
    RequestRejected { status: u16, reason: Option<String> },

    /// The request never completed (network failure, CORS, aborted).
    #[error("Error deleting chat: {0}")]
    Transport(String),

    /// A DOM or navigation call threw.
    #[error("Page update failed after deleting chat: {0}")]
    Page(String),
}

fn reason_suffix(reason: &Option<String>) -> String {
    match reason {
        Some(reason) => format!(" ({})", reason),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_message_includes_server_reason() {
        let err = DeleteError::RequestRejected {
            status: 404,
            reason: Some("chat not found".to_string()),
        };
        assert_eq!(err.to_string(), "Failed to delete chat: HTTP 404 (chat not found)");

        let err = DeleteError::RequestRejected { status: 500, reason: None };
        assert_eq!(err.to_string(), "Failed to delete chat: HTTP 500");
    }
}
