//! Shared core library for doc-onlook senders.
//!
//! Finds doc-onlook receivers on the local network and delivers files to them
//! over the receiver's HTTP form protocol on port 2112.
//!
//! ```no_run
//! use doc_onlook_core::{ClientConfig, DeviceClient, FileDescriptor};
//!
//! # async fn run() -> doc_onlook_core::error::Result<()> {
//! let client = DeviceClient::http(&ClientConfig::default())?;
//! let found = client.find_device("192.168.1.100").await?;
//! println!("{}", found.to_pretty_string());
//!
//! let file = FileDescriptor::new("notes.txt", "txt", "bm90ZXM=");
//! client.send_file(file, "192.168.1.100").await?;
//! # Ok(())
//! # }
//! ```

pub mod callback;
pub mod client;
pub mod error;
pub mod protocol;
pub mod transport;

pub use client::DeviceClient;
pub use error::{CoreError, DeviceError, TransportError};
pub use protocol::{Action, ActionRequest, FileDescriptor, ReceiverResponse, RECEIVER_PORT};
pub use transport::{ClientConfig, HttpTransport, Transport};
