use chrono::Utc;

use super::message::{ChatMessage, Role};

/// The append-only conversation history.
///
/// Messages are kept in insertion order for the lifetime of the session and
/// are never removed or reordered. At most one assistant message is *open*
/// at a time: the placeholder of an in-flight streamed reply, and the only
/// message whose content may still change. Closing it freezes it for good.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    next_id: u64,
    open_index: Option<usize>,
}

impl Transcript {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn has_open_assistant(&self) -> bool {
        self.open_index.is_some()
    }

    /// Appends a user message. Returns its id.
    pub fn push_user(&mut self, content: &str) -> String {
        self.push(Role::User, content.to_owned())
    }

    /// Appends the empty assistant placeholder a streamed reply grows into.
    ///
    /// A previously open placeholder is frozen first; the single-exchange
    /// admission control upstream makes that a dormant path.
    pub fn open_assistant(&mut self) {
        self.close_assistant();
        self.push(Role::Assistant, String::new());
        self.open_index = Some(self.messages.len() - 1);
    }

    /// Appends decoded chunk text to the open placeholder.
    /// Returns false when no placeholder is open (the chunk is dropped).
    pub fn append_streamed(&mut self, chunk: &str) -> bool {
        match self.open_index {
            Some(index) => {
                self.messages[index].content.push_str(chunk);
                true
            }
            None => false,
        }
    }

    /// Freezes the open placeholder, if any.
    pub fn close_assistant(&mut self) {
        self.open_index = None;
    }

    /// Records a failed exchange as a single diagnostic assistant message.
    ///
    /// If a placeholder is open its partial content is replaced, so a failed
    /// attempt never leaves half-streamed text behind and never produces a
    /// second message; otherwise one diagnostic message is appended. Either
    /// way the result is frozen.
    pub fn fail_streamed(&mut self, diagnostic: &str) {
        match self.open_index.take() {
            Some(index) => {
                self.messages[index].content.clear();
                self.messages[index].content.push_str(diagnostic);
            }
            None => {
                self.push(Role::Assistant, diagnostic.to_owned());
            }
        }
    }

    fn push(&mut self, role: Role, content: String) -> String {
        self.next_id += 1;
        let id = format!("m{}", self.next_id);
        self.messages.push(ChatMessage::new(
            id.clone(),
            role,
            content,
            Utc::now().timestamp_millis(),
        ));
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_user_assigns_sequential_ids() {
        let mut transcript = Transcript::default();

        let first = transcript.push_user("Hello");
        let second = transcript.push_user("There");

        assert_eq!(first, "m1");
        assert_eq!(second, "m2");
        assert_eq!(transcript.messages().len(), 2);
        assert!(transcript
            .messages()
            .iter()
            .all(|message| message.role == Role::User));
    }

    #[test]
    fn open_assistant_appends_empty_placeholder() {
        let mut transcript = Transcript::default();
        transcript.push_user("Hello");

        transcript.open_assistant();

        assert_eq!(transcript.messages().len(), 2);
        assert!(transcript.has_open_assistant());
        let placeholder = &transcript.messages()[1];
        assert_eq!(placeholder.role, Role::Assistant);
        assert_eq!(placeholder.content, "");
    }

    #[test]
    fn append_streamed_accumulates_chunks_in_order() {
        let mut transcript = Transcript::default();
        transcript.open_assistant();

        assert!(transcript.append_streamed("Greet"));
        assert!(transcript.append_streamed("ings!"));

        assert_eq!(transcript.messages()[0].content, "Greetings!");
    }

    #[test]
    fn append_streamed_without_open_placeholder_is_rejected() {
        let mut transcript = Transcript::default();
        transcript.push_user("Hello");

        assert!(!transcript.append_streamed("stray"));
        assert_eq!(transcript.messages().len(), 1);
        assert_eq!(transcript.messages()[0].content, "Hello");
    }

    #[test]
    fn close_assistant_freezes_the_placeholder() {
        let mut transcript = Transcript::default();
        transcript.open_assistant();
        transcript.append_streamed("done");

        transcript.close_assistant();

        assert!(!transcript.has_open_assistant());
        assert!(!transcript.append_streamed(" more"));
        assert_eq!(transcript.messages()[0].content, "done");
    }

    #[test]
    fn fail_streamed_replaces_partial_content_with_diagnostic() {
        let mut transcript = Transcript::default();
        transcript.open_assistant();
        transcript.append_streamed("par");

        transcript.fail_streamed("link severed");

        assert_eq!(transcript.messages().len(), 1);
        assert!(!transcript.has_open_assistant());
        let message = &transcript.messages()[0];
        assert_eq!(message.content, "link severed");
        assert!(!message.content.contains("par"));
    }

    #[test]
    fn fail_streamed_without_placeholder_appends_single_diagnostic() {
        let mut transcript = Transcript::default();
        transcript.push_user("Hello");

        transcript.fail_streamed("gateway unreachable");

        assert_eq!(transcript.messages().len(), 2);
        let message = &transcript.messages()[1];
        assert_eq!(message.role, Role::Assistant);
        assert_eq!(message.content, "gateway unreachable");
        assert!(!transcript.has_open_assistant());
    }

    #[test]
    fn reopening_freezes_the_previous_placeholder() {
        let mut transcript = Transcript::default();
        transcript.open_assistant();
        transcript.append_streamed("first");

        transcript.open_assistant();
        transcript.append_streamed("second");

        assert_eq!(transcript.messages()[0].content, "first");
        assert_eq!(transcript.messages()[1].content, "second");
    }
}
