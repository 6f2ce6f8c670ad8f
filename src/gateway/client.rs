use std::sync::mpsc::Sender;

use futures_util::StreamExt;
use reqwest::Client;
use tokio::runtime::Handle;

use crate::{
    domain::events::StreamEvent,
    infra::config::{ChatConfig, GatewayConfig},
    usecases::submit_chat::{ChatDispatcher, OutboundChat},
};

use super::protocol::{failure_detail, ChatRequest};

const EXCHANGE_STARTED: &str = "GATEWAY_EXCHANGE_STARTED";
const EXCHANGE_STREAM_ENDED: &str = "GATEWAY_EXCHANGE_STREAM_ENDED";
const EXCHANGE_REJECTED: &str = "GATEWAY_EXCHANGE_REJECTED";
const EXCHANGE_TRANSPORT_FAILED: &str = "GATEWAY_EXCHANGE_TRANSPORT_FAILED";
const EVENT_DELIVERY_FAILED: &str = "GATEWAY_EVENT_DELIVERY_FAILED";

/// Runs chat exchanges against the HTTP gateway.
///
/// `dispatch` only spawns the exchange on the app runtime; every outcome,
/// including transport failures, travels back to the session loop as
/// `StreamEvent`s on the channel handed in at construction.
pub struct HttpChatDispatcher {
    handle: Handle,
    client: Client,
    endpoint: String,
    system_prompt: String,
    events: Sender<StreamEvent>,
}

impl HttpChatDispatcher {
    pub fn new(
        handle: Handle,
        gateway: &GatewayConfig,
        chat: &ChatConfig,
        events: Sender<StreamEvent>,
    ) -> Self {
        let endpoint = format!("{}/api/chat", gateway.base_url.trim_end_matches('/'));

        Self {
            handle,
            client: Client::new(),
            endpoint,
            system_prompt: chat.system_prompt.clone(),
            events,
        }
    }
}

impl ChatDispatcher for HttpChatDispatcher {
    fn dispatch(&self, chat: OutboundChat) {
        let request = ChatRequest {
            developer_message: self.system_prompt.clone(),
            user_message: chat.user_message,
            api_key: chat.api_key,
        };

        self.handle.spawn(run_exchange(
            self.client.clone(),
            self.endpoint.clone(),
            request,
            self.events.clone(),
        ));
    }
}

async fn run_exchange(
    client: Client,
    endpoint: String,
    request: ChatRequest,
    events: Sender<StreamEvent>,
) {
    tracing::info!(
        code = EXCHANGE_STARTED,
        endpoint = %endpoint,
        user_message_chars = request.user_message.chars().count(),
        "chat exchange started"
    );

    let response = match client.post(&endpoint).json(&request).send().await {
        Ok(response) => response,
        Err(error) => {
            tracing::warn!(
                code = EXCHANGE_TRANSPORT_FAILED,
                error = %error,
                "chat request could not be sent"
            );
            deliver(&events, StreamEvent::Failed(error.to_string()));
            return;
        }
    };

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let detail = failure_detail(status, &body);
        tracing::warn!(
            code = EXCHANGE_REJECTED,
            status = %status,
            "gateway rejected the chat request"
        );
        deliver(&events, StreamEvent::Failed(detail));
        return;
    }

    if !deliver(&events, StreamEvent::Opened) {
        return;
    }

    let mut stream = response.bytes_stream();
    let mut chunk_count = 0_u64;

    while let Some(next) = stream.next().await {
        match next {
            Ok(bytes) => {
                // Best-effort decode; the gateway streams UTF-8 text.
                let text = String::from_utf8_lossy(&bytes).into_owned();
                chunk_count += 1;
                if !deliver(&events, StreamEvent::Chunk(text)) {
                    return;
                }
            }
            Err(error) => {
                tracing::warn!(
                    code = EXCHANGE_TRANSPORT_FAILED,
                    error = %error,
                    chunk_count,
                    "chat stream failed mid-flight"
                );
                deliver(&events, StreamEvent::Failed(error.to_string()));
                return;
            }
        }
    }

    tracing::info!(
        code = EXCHANGE_STREAM_ENDED,
        chunk_count,
        "chat stream completed"
    );
    deliver(&events, StreamEvent::Closed);
}

/// Sends one event to the session loop. Returns false when the receiver is
/// gone (session ended), which ends the exchange task.
fn deliver(events: &Sender<StreamEvent>, event: StreamEvent) -> bool {
    if let Err(error) = events.send(event) {
        tracing::warn!(
            code = EVENT_DELIVERY_FAILED,
            error = %error,
            "session loop is gone; abandoning the exchange"
        );
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;

    #[test]
    fn deliver_reports_receiver_loss() {
        let (tx, rx) = mpsc::channel();

        assert!(deliver(&tx, StreamEvent::Opened));
        drop(rx);
        assert!(!deliver(&tx, StreamEvent::Closed));
    }

    #[test]
    fn endpoint_is_joined_without_double_slash() {
        let (tx, _rx) = mpsc::channel();
        let gateway = GatewayConfig {
            base_url: "http://127.0.0.1:8000/".to_owned(),
        };
        let chat = ChatConfig::default();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .build()
            .expect("runtime must build");

        let dispatcher = HttpChatDispatcher::new(runtime.handle().clone(), &gateway, &chat, tx);

        assert_eq!(dispatcher.endpoint, "http://127.0.0.1:8000/api/chat");
    }
}
