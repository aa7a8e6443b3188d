//! Registry of chats with an outstanding delete request.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::models::ChatId;

thread_local! {
    static PAGE_PENDING: PendingDeletes = PendingDeletes::default();
}

/// Registry shared by every `deleteChat` call on the page.
pub fn page_pending() -> PendingDeletes {
    PAGE_PENDING.with(Clone::clone)
}

#[derive(Debug, Clone, Default)]
pub struct PendingDeletes {
    ids: Rc<RefCell<HashSet<ChatId>>>,
}

impl PendingDeletes {
    /// Mark `chat_id` as in flight.  Returns `None` if it already is; the
    /// entry is released when the returned guard drops.
    pub fn try_begin(&self, chat_id: &ChatId) -> Option<PendingGuard> {
        if !self.ids.borrow_mut().insert(chat_id.clone()) {
            return None;
        }
        Some(PendingGuard {
            ids: Rc::clone(&self.ids),
            chat_id: chat_id.clone(),
        })
    }

    pub fn is_pending(&self, chat_id: &ChatId) -> bool {
        self.ids.borrow().contains(chat_id)
    }

    pub fn len(&self) -> usize {
        self.ids.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.borrow().is_empty()
    }
}

#[derive(Debug)]
pub struct PendingGuard {
    ids: Rc<RefCell<HashSet<ChatId>>>,
    chat_id: ChatId,
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.ids.borrow_mut().remove(&self.chat_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_begin_for_same_chat_is_refused() {
        let pending = PendingDeletes::default();
        let id = ChatId::new("abc");

        let guard = pending.try_begin(&id);
        assert!(guard.is_some());
        assert!(pending.try_begin(&id).is_none());
        assert!(pending.is_pending(&id));

        drop(guard);
        assert!(!pending.is_pending(&id));
        assert!(pending.try_begin(&id).is_some());
    }

    #[test]
    fn different_chats_are_independent() {
        let pending = PendingDeletes::default();
        let _a = pending.try_begin(&ChatId::new("a")).unwrap();
        let _b = pending.try_begin(&ChatId::new("b")).unwrap();
        assert_eq!(pending.len(), 2);
    }

    #[test]
    fn clones_share_the_same_registry() {
        let pending = PendingDeletes::default();
        let other = pending.clone();
        let _guard = pending.try_begin(&ChatId::new("abc")).unwrap();
        assert!(other.try_begin(&ChatId::new("abc")).is_none());
    }
}
