use contracts::domain::support::{
    ChatMessage, ChatPriority, ChatUser, FieldChange, MessageSender, ModificationStatus,
    ModificationUser, Presence, ProfileModification, SupportChannel, SupportChat,
};
use once_cell::sync::Lazy;

/// (label, value, trend) for the support KPI cards.
pub const SUPPORT_KPIS: [(&str, &str, f64); 4] = [
    ("Response Time", "8 min", -15.0),
    ("Resolution Rate", "94.8%", 2.5),
    ("Satisfaction", "4.9/5", 0.2),
    ("Open Tickets", "24", -8.0),
];

fn chat_user(name: &str, avatar_url: &str, presence: Presence) -> ChatUser {
    ChatUser {
        name: name.to_string(),
        avatar_url: avatar_url.to_string(),
        presence,
    }
}

static CHATS: Lazy<Vec<SupportChat>> = Lazy::new(|| {
    vec![
        SupportChat {
            id: "1".to_string(),
            user: chat_user(
                "Sophie Martin",
                "https://i.pravatar.cc/150?u=sophie",
                Presence::Online,
            ),
            last_message: "I haven't received any update about my package yet".to_string(),
            timestamp: "2 min ago".to_string(),
            unread_count: 2,
            priority: ChatPriority::High,
            channel: SupportChannel::Chat,
        },
        SupportChat {
            id: "2".to_string(),
            user: chat_user(
                "Thomas Bernard",
                "https://i.pravatar.cc/150?u=thomas",
                Presence::Offline,
            ),
            last_message: "Thank you for processing my refund".to_string(),
            timestamp: "1 hour ago".to_string(),
            unread_count: 0,
            priority: ChatPriority::Medium,
            channel: SupportChannel::Email,
        },
        SupportChat {
            id: "3".to_string(),
            user: chat_user(
                "Marie Dubois",
                "https://i.pravatar.cc/150?u=marie",
                Presence::Online,
            ),
            last_message: "How can I become a traveler?".to_string(),
            timestamp: "3 hours ago".to_string(),
            unread_count: 1,
            priority: ChatPriority::Low,
            channel: SupportChannel::Phone,
        },
    ]
});

pub fn chats() -> &'static [SupportChat] {
    &CHATS
}

fn msg(sender: MessageSender, content: &str, timestamp: &str) -> ChatMessage {
    let mut message = ChatMessage::new(sender, content, timestamp);
    message.read = true;
    message
}

/// Seed transcript for a conversation. Empty for chats with no history yet.
pub fn messages_for(chat_id: &str) -> Vec<ChatMessage> {
    match chat_id {
        "1" => vec![
            msg(
                MessageSender::User,
                "Hello, I have a question about my recent order #UPK245",
                "10:30 AM",
            ),
            msg(
                MessageSender::Support,
                "Hi Sophie! I'd be happy to help you with your order. What would you like to know?",
                "10:32 AM",
            ),
            msg(
                MessageSender::Support,
                "I can see your package is currently in transit between Paris and London.",
                "10:35 AM",
            ),
        ],
        _ => Vec::new(),
    }
}

fn change(field: &str, old_value: &str, new_value: &str) -> FieldChange {
    FieldChange {
        field: field.to_string(),
        old_value: old_value.to_string(),
        new_value: new_value.to_string(),
    }
}

static MODIFICATIONS: Lazy<Vec<ProfileModification>> = Lazy::new(|| {
    vec![
        ProfileModification {
            id: "MOD001".to_string(),
            user_id: "USR001".to_string(),
            user: ModificationUser {
                name: "Sophie Martin".to_string(),
                avatar_url: "https://i.pravatar.cc/150?u=sophie".to_string(),
                email: "sophie.martin@email.com".to_string(),
                phone: "+33 6 11 11 11 11".to_string(),
                address: "15 Rue de la République, Lyon".to_string(),
                join_date: "2023-06-15".to_string(),
            },
            request_date: "2024-03-14".to_string(),
            reason: "Updated phone number and address after moving to a new city".to_string(),
            changes: vec![
                change("phone", "+33 6 11 11 11 11", "+33 6 12 34 56 78"),
                change(
                    "address",
                    "15 Rue de la République, Lyon",
                    "23 Avenue des Champs-Élysées, Paris",
                ),
            ],
            status: ModificationStatus::Pending,
        },
        ProfileModification {
            id: "MOD002".to_string(),
            user_id: "USR002".to_string(),
            user: ModificationUser {
                name: "Thomas Bernard".to_string(),
                avatar_url: "https://i.pravatar.cc/150?u=thomas".to_string(),
                email: "thomas.b@email.com".to_string(),
                phone: "+33 6 98 76 54 32".to_string(),
                address: "8 Boulevard Saint-Michel, Paris".to_string(),
                join_date: "2023-09-02".to_string(),
            },
            request_date: "2024-03-13".to_string(),
            reason: "Changed email provider".to_string(),
            changes: vec![change("email", "thomas.b@email.com", "thomas.bernard@mail.fr")],
            status: ModificationStatus::Pending,
        },
    ]
});

pub fn modifications() -> &'static [ProfileModification] {
    &MODIFICATIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_transcript_only_exists_for_the_first_chat() {
        assert_eq!(messages_for("1").len(), 3);
        assert!(messages_for("2").is_empty());
    }

    #[test]
    fn seed_messages_are_read() {
        assert!(messages_for("1").iter().all(|m| m.read));
    }
}
