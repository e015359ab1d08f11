use chrono::Utc;
use serde::Serialize;

use super::responder::{self, GREETING};
use crate::catalog::SuggestedRoom;
use crate::models::{ChatMessage, Sender};

/// Append-only support chat transcript plus the sticky session budget.
#[derive(Debug, Clone, Serialize)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    budget: Option<u64>,
    #[serde(skip)]
    next_id: u64,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        let mut session = Self {
            messages: Vec::new(),
            budget: None,
            next_id: 1,
        };
        session.push(GREETING.to_string(), Sender::Bot);
        session
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn budget(&self) -> Option<u64> {
        self.budget
    }

    fn push(&mut self, text: String, sender: Sender) -> ChatMessage {
        let message = ChatMessage {
            id: self.next_id,
            text,
            sender,
            timestamp: Utc::now(),
        };
        self.next_id += 1;
        self.messages.push(message.clone());
        message
    }

    /// Records the user's message and decides the reply. The reply text is
    /// returned rather than appended so the caller controls when it lands.
    /// Blank input is ignored.
    pub fn submit(&mut self, rooms: &[SuggestedRoom], text: &str) -> Option<(ChatMessage, String)> {
        if text.trim().is_empty() {
            return None;
        }
        let user = self.push(text.to_string(), Sender::User);
        let reply = responder::respond(&mut self.budget, rooms, text);
        Some((user, reply))
    }

    pub fn push_bot(&mut self, text: String) -> ChatMessage {
        self.push(text, Sender::Bot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn starts_with_greeting() {
        let chat = ChatSession::new();
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].id, 1);
        assert_eq!(chat.messages()[0].sender, Sender::Bot);
        assert_eq!(chat.budget(), None);
    }

    #[test]
    fn ids_stay_monotonic_across_user_and_bot() {
        let catalog = Catalog::demo();
        let mut chat = ChatSession::new();
        let (user, reply) = chat.submit(catalog.suggestions(), "I can spend $300").unwrap();
        let bot = chat.push_bot(reply);

        assert_eq!(user.id, 2);
        assert_eq!(bot.id, 3);
        assert_eq!(chat.budget(), Some(300));
        let ids: Vec<u64> = chat.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn blank_input_is_ignored() {
        let catalog = Catalog::demo();
        let mut chat = ChatSession::new();
        assert!(chat.submit(catalog.suggestions(), "   ").is_none());
        assert_eq!(chat.messages().len(), 1);
    }
}
