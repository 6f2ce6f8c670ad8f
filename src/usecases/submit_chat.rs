//! Use case for submitting a chat message to the gateway.
//!
//! Validation happens here, before any state change or network work; the
//! actual exchange is behind the `ChatDispatcher` trait and reports back
//! asynchronously through stream events.

/// Raw submission as captured from the compose box and session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitChatCommand {
    pub message: String,
    pub credential: String,
}

/// Rejections at the input boundary. Both are silent: no transcript
/// mutation, no dispatch, no diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitChatError {
    /// Message text is empty after trimming whitespace.
    EmptyMessage,
    /// No credential has been committed.
    EmptyCredential,
}

/// A validated submission, ready to hand to the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundChat {
    pub user_message: String,
    pub api_key: String,
}

/// Starts the streamed exchange for a validated submission.
///
/// Implementations must report progress and failure exclusively through
/// `StreamEvent`s on the session event channel; `dispatch` itself performs
/// no blocking work.
pub trait ChatDispatcher {
    fn dispatch(&self, chat: OutboundChat);
}

impl<T: ChatDispatcher + ?Sized> ChatDispatcher for &T {
    fn dispatch(&self, chat: OutboundChat) {
        (*self).dispatch(chat)
    }
}

/// Validates a submission: the message is trimmed and must be non-empty,
/// and a credential must be held.
pub fn prepare_submission(command: SubmitChatCommand) -> Result<OutboundChat, SubmitChatError> {
    let message = command.message.trim();
    if message.is_empty() {
        return Err(SubmitChatError::EmptyMessage);
    }

    if command.credential.is_empty() {
        return Err(SubmitChatError::EmptyCredential);
    }

    Ok(OutboundChat {
        user_message: message.to_owned(),
        api_key: command.credential,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(message: &str, credential: &str) -> SubmitChatCommand {
        SubmitChatCommand {
            message: message.to_owned(),
            credential: credential.to_owned(),
        }
    }

    #[test]
    fn rejects_empty_message_text() {
        let result = prepare_submission(command("", "sk-test"));

        assert_eq!(result, Err(SubmitChatError::EmptyMessage));
    }

    #[test]
    fn rejects_whitespace_only_message() {
        let result = prepare_submission(command("   \n\t  ", "sk-test"));

        assert_eq!(result, Err(SubmitChatError::EmptyMessage));
    }

    #[test]
    fn rejects_missing_credential() {
        let result = prepare_submission(command("Hello", ""));

        assert_eq!(result, Err(SubmitChatError::EmptyCredential));
    }

    #[test]
    fn trims_whitespace_around_the_message() {
        let outbound =
            prepare_submission(command("  hello there  ", "sk-test")).expect("must validate");

        assert_eq!(outbound.user_message, "hello there");
    }

    #[test]
    fn carries_the_credential_through() {
        let outbound = prepare_submission(command("Hello", "sk-test")).expect("must validate");

        assert_eq!(outbound.api_key, "sk-test");
    }

    #[test]
    fn keeps_interior_whitespace_intact() {
        let outbound =
            prepare_submission(command("line one\nline two", "sk-test")).expect("must validate");

        assert_eq!(outbound.user_message, "line one\nline two");
    }
}
