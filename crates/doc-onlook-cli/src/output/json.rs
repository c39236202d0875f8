//! JSON-formatted output for CLI.

use serde::Serialize;
use serde_json::{json, Value};

use doc_onlook_core::ReceiverResponse;

use super::{FindRow, OutputFormatter, SentFile};

pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }

    fn to_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for JsonOutput {
    fn format_find_results(&self, rows: &[FindRow]) -> String {
        let items: Vec<Value> = rows
            .iter()
            .map(|row| match &row.outcome {
                Ok(response) => json!({
                    "address": row.address,
                    "success": row.is_ok(),
                    "response": response.body()
                }),
                Err(message) => json!({
                    "address": row.address,
                    "success": false,
                    "error": message
                }),
            })
            .collect();

        let success_count = rows.iter().filter(|r| r.is_ok()).count();
        let unreachable_count = rows.iter().filter(|r| r.outcome.is_err()).count();

        Self::to_json(&json!({
            "results": items,
            "summary": {
                "total": rows.len(),
                "succeeded": success_count,
                "errorReplies": rows.len() - success_count - unreachable_count,
                "unreachable": unreachable_count
            }
        }))
    }

    fn format_send_result(
        &self,
        address: &str,
        file: &SentFile,
        response: &ReceiverResponse,
    ) -> String {
        Self::to_json(&json!({
            "address": address,
            "name": file.name,
            "type": file.file_type,
            "encodedBytes": file.encoded_bytes,
            "success": response.application_error().is_none(),
            "response": response.body()
        }))
    }
}
