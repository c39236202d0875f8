//! Receiver client.
//!
//! [`DeviceClient`] issues the two receiver actions. Both go through
//! [`DeviceClient::execute`], which posts one request and yields one outcome.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::{CoreError, DeviceError, TransportError};
use crate::protocol::{receiver_url, ActionRequest, FileDescriptor, ReceiverResponse};
use crate::transport::{ClientConfig, HttpTransport, Transport};

/// Client for doc-onlook receivers.
///
/// Cloning is cheap; clones share the transport.
#[derive(Clone)]
pub struct DeviceClient {
    transport: Option<Arc<dyn Transport>>,
}

impl DeviceClient {
    /// Create a client that sends through the given transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport: Some(transport),
        }
    }

    /// Create a client backed by [`HttpTransport`].
    pub fn http(config: &ClientConfig) -> Result<Self, CoreError> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::new(Arc::new(transport)))
    }

    /// Create a client with no transport.
    ///
    /// Every operation on it fails with [`DeviceError::TransportUnavailable`]
    /// without touching the network.
    pub fn unavailable() -> Self {
        Self { transport: None }
    }

    pub fn is_available(&self) -> bool {
        self.transport.is_some()
    }

    pub(crate) fn transport(&self) -> Result<Arc<dyn Transport>, DeviceError> {
        self.transport
            .clone()
            .ok_or(DeviceError::TransportUnavailable)
    }

    /// Ask the receiver at `address` to identify itself.
    pub async fn find_device(&self, address: &str) -> Result<ReceiverResponse, CoreError> {
        self.execute(address, ActionRequest::FindDevice).await
    }

    /// Deliver a file to the receiver at `address`.
    pub async fn send_file(
        &self,
        file: FileDescriptor,
        address: &str,
    ) -> Result<ReceiverResponse, CoreError> {
        self.execute(address, ActionRequest::SendFile(file)).await
    }

    /// Post one action request and return its outcome.
    pub async fn execute(
        &self,
        address: &str,
        request: ActionRequest,
    ) -> Result<ReceiverResponse, CoreError> {
        let transport = self.transport()?;

        perform(transport.as_ref(), address, &request)
            .await
            .map_err(|source| {
                CoreError::Device(DeviceError::Transport {
                    address: address.to_string(),
                    source,
                })
            })
    }

    /// Probe several receivers concurrently.
    ///
    /// Results come back in completion order, not input order.
    pub async fn find_devices(
        &self,
        addresses: &[String],
        concurrency: usize,
    ) -> Vec<(String, Result<ReceiverResponse, CoreError>)> {
        use futures::stream::{self, StreamExt};

        let concurrency = concurrency.max(1);

        stream::iter(addresses.iter().cloned())
            .map(|address| {
                let client = self.clone();
                async move {
                    let result = client.find_device(&address).await;
                    (address, result)
                }
            })
            .buffer_unordered(concurrency)
            .collect()
            .await
    }
}

impl std::fmt::Debug for DeviceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceClient")
            .field("available", &self.is_available())
            .finish()
    }
}

/// Send one request through `transport`.
pub(crate) async fn perform(
    transport: &dyn Transport,
    address: &str,
    request: &ActionRequest,
) -> Result<ReceiverResponse, TransportError> {
    let url = receiver_url(address);
    let action = request.action();
    debug!(%url, %action, "posting action");

    match transport.post_form(&url, &request.form_fields()).await {
        Ok(body) => {
            debug!(%url, %action, "receiver replied");
            Ok(ReceiverResponse::new(body))
        }
        Err(e) => {
            warn!(%url, %action, error = %e, "action failed");
            Err(e)
        }
    }
}
