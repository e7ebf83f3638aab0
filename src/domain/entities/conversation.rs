use serde::{Deserialize, Serialize};

/// Append-only message history, replayed in order by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last_user_message(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| matches!(m.role, MessageRole::User))
            .map(|m| m.content.as_str())
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl From<Vec<Message>> for Conversation {
    fn from(messages: Vec<Message>) -> Self {
        Self { messages }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
    #[serde(default)]
    pub used_knowledge_base: bool,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
            used_knowledge_base: false,
        }
    }

    pub fn assistant(content: impl Into<String>, used_knowledge_base: bool) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
            used_knowledge_base,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_keep_order() {
        let mut conversation = Conversation::new();
        conversation.push(Message::user("hello there"));
        conversation.push(Message::assistant("hi", false));
        conversation.push(Message::user("battery life?"));

        assert_eq!(conversation.len(), 3);
        assert_eq!(conversation.last_user_message(), Some("battery life?"));
        assert_eq!(conversation.messages()[1].role, MessageRole::Assistant);
    }

    #[test]
    fn test_message_wire_shape() {
        let value = serde_json::to_value(Message::assistant("It can.", true)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "role": "assistant",
                "content": "It can.",
                "usedKnowledgeBase": true
            })
        );
    }

    #[test]
    fn test_missing_flag_defaults_to_false() {
        let message: Message =
            serde_json::from_str(r#"{"role":"user","content":"hi"}"#).unwrap();
        assert!(!message.used_knowledge_base);
        assert_eq!(message.role.as_str(), "user");
    }
}
