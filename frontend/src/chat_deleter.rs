//! Deleting a chat from the sidebar list.
//!
//! The flow is a single request/response round trip: `DELETE` the chat, and
//! only once the server confirms, drop its row from the list and leave the
//! chat page if it was the one open.  Nothing is mutated optimistically, so a
//! failed request needs no rollback; it is only logged.

use crate::console::IConsole;
use crate::constants::HOME_PATH;
use crate::dom_utils::IChatList;
use crate::errors::DeleteError;
use crate::location::IPageLocation;
use crate::models::{ChatId, DeleteOutcome};
use crate::network::{ApiConfig, IChatApi};
use crate::pending::PendingDeletes;

pub struct ChatDeleter<A, L, P, C> {
    api: A,
    list: L,
    location: P,
    console: C,
    config: ApiConfig,
    pending: PendingDeletes,
}

impl<A, L, P, C> ChatDeleter<A, L, P, C>
where
    A: IChatApi,
    L: IChatList,
    P: IPageLocation,
    C: IConsole,
{
    pub fn new(api: A, list: L, location: P, console: C, config: ApiConfig) -> Self {
        Self {
            api,
            list,
            location,
            console,
            config,
            pending: PendingDeletes::default(),
        }
    }

    /// Share an in-flight registry with other deleters on the same page.
    pub fn with_pending(mut self, pending: PendingDeletes) -> Self {
        self.pending = pending;
        self
    }

    /// Delete `chat_id` on the server, then update the page.
    pub async fn delete_chat(&self, chat_id: &ChatId) -> Result<DeleteOutcome, DeleteError> {
        let Some(_in_flight) = self.pending.try_begin(chat_id) else {
            return Ok(DeleteOutcome::AlreadyPending);
        };

        let url = self.config.delete_chat_url(chat_id);
        let response = self
            .api
            .send_delete(&url)
            .await
            .map_err(DeleteError::Transport)?;

        if !response.ok {
            return Err(DeleteError::RequestRejected {
                status: response.status,
                reason: response.server_reason(),
            });
        }

        let chat_path = chat_id.chat_path();
        let item_removed = self.list.remove_chat_item(&chat_path)?;

        // Substring match: any page under the deleted chat's path counts.
        let redirected = if self.location.pathname()?.contains(&chat_path) {
            self.location.assign(HOME_PATH)?;
            true
        } else {
            false
        };

        Ok(DeleteOutcome::Deleted { item_removed, redirected })
    }

    /// Fire-and-forget variant used by the page: failures go to the console.
    pub async fn run(&self, chat_id: &ChatId) {
        match self.delete_chat(chat_id).await {
            Ok(DeleteOutcome::Deleted { item_removed: false, .. }) => {
                self.console
                    .warn(&format!("Chat {} was deleted but is not in the chat list", chat_id));
            }
            Ok(DeleteOutcome::AlreadyPending) => {
                self.console
                    .warn(&format!("Delete already in progress for chat {}", chat_id));
            }
            Ok(DeleteOutcome::Deleted { .. }) => {}
            Err(e) => self.console.error(&e.to_string()),
        }
    }
}
