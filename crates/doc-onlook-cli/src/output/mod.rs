//! Output formatting for CLI results.

pub mod json;
pub mod table;

pub use json::JsonOutput;
pub use table::TableOutput;

use doc_onlook_core::{FileDescriptor, ReceiverResponse};

/// Outcome of probing one receiver.
#[derive(Debug, Clone)]
pub struct FindRow {
    pub address: String,
    /// Receiver reply, or the rendered error.
    pub outcome: Result<ReceiverResponse, String>,
}

impl FindRow {
    /// The receiver answered and did not report an error status.
    pub fn is_ok(&self) -> bool {
        matches!(&self.outcome, Ok(r) if r.application_error().is_none())
    }
}

/// What was sent, without the payload itself.
#[derive(Debug, Clone)]
pub struct SentFile {
    pub name: String,
    pub file_type: String,
    pub encoded_bytes: usize,
}

impl From<&FileDescriptor> for SentFile {
    fn from(file: &FileDescriptor) -> Self {
        Self {
            name: file.name.clone(),
            file_type: file.file_type.clone(),
            encoded_bytes: file.data.len(),
        }
    }
}

/// Output formatter trait
pub trait OutputFormatter {
    /// Format the results of a `find` run
    fn format_find_results(&self, rows: &[FindRow]) -> String;

    /// Format the reply to a delivered file
    fn format_send_result(
        &self,
        address: &str,
        file: &SentFile,
        response: &ReceiverResponse,
    ) -> String;
}

/// Get the appropriate formatter based on JSON flag
pub fn get_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonOutput::new())
    } else {
        Box::new(TableOutput::new())
    }
}
