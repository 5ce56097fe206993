use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ticket priority for the support inbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatPriority {
    High,
    Medium,
    Low,
}

impl ChatPriority {
    pub fn display_name(&self) -> &'static str {
        match self {
            ChatPriority::High => "High",
            ChatPriority::Medium => "Medium",
            ChatPriority::Low => "Low",
        }
    }

    /// Color token the badge renders with.
    pub fn color_token(&self) -> &'static str {
        match self {
            ChatPriority::High => "rose",
            ChatPriority::Medium => "amber",
            ChatPriority::Low => "emerald",
        }
    }
}

/// Which channel the conversation arrived through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupportChannel {
    Chat,
    Email,
    Phone,
}

impl SupportChannel {
    pub fn icon_id(&self) -> &'static str {
        match self {
            SupportChannel::Chat => "message-square",
            SupportChannel::Email => "mail",
            SupportChannel::Phone => "phone",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Presence {
    Online,
    Offline,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatUser {
    pub name: String,
    #[serde(rename = "avatarUrl")]
    pub avatar_url: String,
    pub presence: Presence,
}

/// One conversation in the support inbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportChat {
    pub id: String,
    pub user: ChatUser,
    #[serde(rename = "lastMessage")]
    pub last_message: String,
    pub timestamp: String,
    #[serde(rename = "unreadCount")]
    pub unread_count: u32,
    pub priority: ChatPriority,
    pub channel: SupportChannel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageSender {
    User,
    Support,
}

/// A single message inside a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub content: String,
    pub timestamp: String,
    pub sender: MessageSender,
    pub read: bool,
}

impl ChatMessage {
    pub fn new(sender: MessageSender, content: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            timestamp: timestamp.into(),
            sender,
            read: false,
        }
    }
}

/// Review state of a profile-modification request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModificationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ModificationStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            ModificationStatus::Pending => "Pending",
            ModificationStatus::Approved => "Approved",
            ModificationStatus::Rejected => "Rejected",
        }
    }

    pub fn color_token(&self) -> &'static str {
        match self {
            ModificationStatus::Pending => "amber",
            ModificationStatus::Approved => "emerald",
            ModificationStatus::Rejected => "rose",
        }
    }
}

/// One field the user wants changed on their profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    pub field: String,
    #[serde(rename = "oldValue")]
    pub old_value: String,
    #[serde(rename = "newValue")]
    pub new_value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModificationUser {
    pub name: String,
    #[serde(rename = "avatarUrl")]
    pub avatar_url: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(rename = "joinDate")]
    pub join_date: String,
}

/// A profile change awaiting support review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileModification {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub user: ModificationUser,
    #[serde(rename = "requestDate")]
    pub request_date: String,
    pub reason: String,
    pub changes: Vec<FieldChange>,
    pub status: ModificationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_messages_start_unread_with_fresh_ids() {
        let a = ChatMessage::new(MessageSender::Support, "On it.", "10:32 AM");
        let b = ChatMessage::new(MessageSender::Support, "On it.", "10:32 AM");
        assert!(!a.read);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn priority_color_tokens() {
        assert_eq!(ChatPriority::High.color_token(), "rose");
        assert_eq!(ChatPriority::Low.color_token(), "emerald");
    }
}
