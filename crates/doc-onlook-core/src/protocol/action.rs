//! Action requests for the doc-onlook receiver protocol.
//!
//! Every request is a form-encoded POST to `http://<address>:2112` carrying an
//! `action` discriminator plus the action's own fields.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Port the receiver listens on.
pub const RECEIVER_PORT: u16 = 2112;

/// Build the receiver URL for an address.
///
/// The address is interpolated as-is; hostnames and malformed strings are not rejected here.
pub fn receiver_url(address: &str) -> String {
    format!("http://{}:{}", address, RECEIVER_PORT)
}

/// Action discriminator sent in the `action` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    FindDevice,
    SendFile,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::FindDevice => "FIND_DEVICE",
            Action::SendFile => "SEND_FILE",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file to deliver to a receiver.
///
/// `data` is already encoded by the caller (typically base64) and is sent untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub file_type: String,
    pub data: String,
}

impl FileDescriptor {
    pub fn new(
        name: impl Into<String>,
        file_type: impl Into<String>,
        data: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            file_type: file_type.into(),
            data: data.into(),
        }
    }
}

/// One outbound request to a receiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionRequest {
    FindDevice,
    SendFile(FileDescriptor),
}

impl ActionRequest {
    pub fn action(&self) -> Action {
        match self {
            ActionRequest::FindDevice => Action::FindDevice,
            ActionRequest::SendFile(_) => Action::SendFile,
        }
    }

    /// Form fields for the request body, `action` first.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("action", self.action().as_str().to_string())];

        if let ActionRequest::SendFile(file) = self {
            fields.push(("name", file.name.clone()));
            fields.push(("type", file.file_type.clone()));
            fields.push(("data", file.data.clone()));
        }

        fields
    }
}
