//! Callback-style entry points.
//!
//! These keep the `(on_success, on_error)` calling convention: the request is
//! spawned on the current tokio runtime and exactly one of the two callbacks
//! runs when it completes. A missing transport or a missing runtime is
//! reported to the caller right away and neither callback runs.

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::client::{perform, DeviceClient};
use crate::error::{DeviceError, TransportError};
use crate::protocol::{ActionRequest, FileDescriptor, ReceiverResponse};

/// Spawn a `FIND_DEVICE` request and report its outcome through callbacks.
///
/// Outside a tokio runtime this returns [`DeviceError::NoRuntime`].
pub fn find_device<S, E>(
    client: &DeviceClient,
    address: &str,
    on_success: S,
    on_error: E,
) -> Result<JoinHandle<()>, DeviceError>
where
    S: FnOnce(ReceiverResponse) + Send + 'static,
    E: FnOnce(TransportError) + Send + 'static,
{
    dispatch(client, address, ActionRequest::FindDevice, on_success, on_error)
}

/// Spawn a `SEND_FILE` request and report its outcome through callbacks.
///
/// Outside a tokio runtime this returns [`DeviceError::NoRuntime`].
pub fn send_file<S, E>(
    client: &DeviceClient,
    file: FileDescriptor,
    address: &str,
    on_success: S,
    on_error: E,
) -> Result<JoinHandle<()>, DeviceError>
where
    S: FnOnce(ReceiverResponse) + Send + 'static,
    E: FnOnce(TransportError) + Send + 'static,
{
    dispatch(
        client,
        address,
        ActionRequest::SendFile(file),
        on_success,
        on_error,
    )
}

fn dispatch<S, E>(
    client: &DeviceClient,
    address: &str,
    request: ActionRequest,
    on_success: S,
    on_error: E,
) -> Result<JoinHandle<()>, DeviceError>
where
    S: FnOnce(ReceiverResponse) + Send + 'static,
    E: FnOnce(TransportError) + Send + 'static,
{
    let transport = client.transport()?;
    let handle = Handle::try_current().map_err(|_| DeviceError::NoRuntime)?;
    let address = address.to_string();

    Ok(handle.spawn(async move {
        match perform(transport.as_ref(), &address, &request).await {
            Ok(response) => on_success(response),
            Err(e) => on_error(e),
        }
    }))
}
