/// Author of a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Returns the themed display label for the role.
    pub fn display_label(&self) -> &'static str {
        match self {
            Role::User => "COMMANDER",
            Role::Assistant => "DROID",
        }
    }
}

/// A single transcript entry.
///
/// Assistant content grows while its reply is streaming and is frozen once
/// the exchange settles; user content never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub created_at_unix_ms: i64,
}

impl ChatMessage {
    pub fn new(id: String, role: Role, content: String, created_at_unix_ms: i64) -> Self {
        Self {
            id,
            role,
            content,
            created_at_unix_ms,
        }
    }

    /// Formats the creation time for the transcript header line.
    pub fn display_time(&self) -> String {
        use chrono::{Local, TimeZone};

        match Local.timestamp_millis_opt(self.created_at_unix_ms) {
            chrono::LocalResult::Single(dt) | chrono::LocalResult::Ambiguous(dt, _) => {
                dt.format("%H:%M").to_string()
            }
            chrono::LocalResult::None => "     ".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_labels_are_themed() {
        assert_eq!(Role::User.display_label(), "COMMANDER");
        assert_eq!(Role::Assistant.display_label(), "DROID");
    }

    #[test]
    fn display_time_formats_hours_and_minutes() {
        let message = ChatMessage::new("m1".to_owned(), Role::User, "Hi".to_owned(), 1_577_836_800_000);

        let time = message.display_time();

        assert_eq!(time.len(), 5);
        assert!(time.contains(':'));
    }

    #[test]
    fn display_time_handles_invalid_timestamp_gracefully() {
        let message = ChatMessage::new("m1".to_owned(), Role::User, "Hi".to_owned(), i64::MIN);

        assert_eq!(message.display_time(), "     ");
    }
}
