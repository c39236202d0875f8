//! Scripted transport for command tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use doc_onlook_core::protocol::receiver_url;
use doc_onlook_core::{Transport, TransportError};
use serde_json::{json, Value};

type Reply = (Duration, Result<Value, TransportError>);
type Recorded = (String, Vec<(&'static str, String)>);

/// Transport answering per address, optionally after a delay.
///
/// Addresses without a scripted reply get `{}` straight away.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<HashMap<String, Reply>>,
    requests: Mutex<Vec<Recorded>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(self: Arc<Self>, address: &str, reply: Result<Value, TransportError>) -> Arc<Self> {
        self.reply_after(address, Duration::ZERO, reply)
    }

    pub fn reply_after(
        self: Arc<Self>,
        address: &str,
        delay: Duration,
        reply: Result<Value, TransportError>,
    ) -> Arc<Self> {
        self.replies
            .lock()
            .unwrap()
            .insert(receiver_url(address), (delay, reply));
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests().into_iter().map(|(url, _)| url).collect()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn post_form(
        &self,
        url: &str,
        fields: &[(&'static str, String)],
    ) -> Result<Value, TransportError> {
        self.requests
            .lock()
            .unwrap()
            .push((url.to_string(), fields.to_vec()));

        let scripted = self.replies.lock().unwrap().get(url).cloned();
        match scripted {
            Some((delay, reply)) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                reply
            }
            None => Ok(json!({})),
        }
    }
}
