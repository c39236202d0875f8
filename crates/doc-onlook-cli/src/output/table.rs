//! Table-formatted output for CLI.

use colored::*;
use comfy_table::{Cell, Color, ContentArrangement, Table};

use doc_onlook_core::ReceiverResponse;

use super::{FindRow, OutputFormatter, SentFile};

pub struct TableOutput;

impl TableOutput {
    pub fn new() -> Self {
        Self
    }

    /// Short description of a reply for a table cell.
    fn summarize(response: &ReceiverResponse) -> String {
        match (response.status(), response.message()) {
            (Some(status), Some(message)) => format!("{}: {}", status, message),
            (Some(status), None) => status.to_string(),
            (None, Some(message)) => message.to_string(),
            (None, None) => response.body().to_string(),
        }
    }
}

impl Default for TableOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TableOutput {
    fn format_find_results(&self, rows: &[FindRow]) -> String {
        if rows.is_empty() {
            return "No receivers probed.".to_string();
        }

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Address", "Status", "Reply"]);

        let mut success_count = 0;
        let mut error_count = 0;
        let mut fail_count = 0;

        for row in rows {
            let (status_cell, reply) = match &row.outcome {
                Ok(response) if response.application_error().is_some() => {
                    error_count += 1;
                    (Cell::new("ERROR").fg(Color::Yellow), Self::summarize(response))
                }
                Ok(response) => {
                    success_count += 1;
                    (Cell::new("OK").fg(Color::Green), Self::summarize(response))
                }
                Err(message) => {
                    fail_count += 1;
                    (Cell::new("FAIL").fg(Color::Red), message.clone())
                }
            };

            table.add_row(vec![Cell::new(&row.address), status_cell, Cell::new(reply)]);
        }

        let summary = format!(
            "\nSummary: {} found, {} error replies, {} unreachable",
            success_count.to_string().green(),
            error_count.to_string().yellow(),
            fail_count.to_string().red()
        );

        format!("{}{}", table, summary)
    }

    fn format_send_result(
        &self,
        address: &str,
        file: &SentFile,
        response: &ReceiverResponse,
    ) -> String {
        let status = if response.application_error().is_some() {
            "[ERROR]".yellow()
        } else {
            "[OK]".green()
        };

        let mut lines = Vec::new();
        lines.push(format!("{} {} -> {}", status, file.name, address));
        lines.push(format!("  Type:     {}", file.file_type));
        lines.push(format!("  Encoded:  {} bytes", file.encoded_bytes));
        lines.push(format!("  Reply:    {}", Self::summarize(response)));

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summarize() {
        let r = ReceiverResponse::new(json!({"status": "error", "message": "Connection failed"}));
        assert_eq!(TableOutput::summarize(&r), "error: Connection failed");

        let r = ReceiverResponse::new(json!({"status": "found"}));
        assert_eq!(TableOutput::summarize(&r), "found");

        let r = ReceiverResponse::new(json!({"ok": true}));
        assert_eq!(TableOutput::summarize(&r), r#"{"ok":true}"#);
    }

    #[test]
    fn test_find_results_lists_every_address() {
        colored::control::set_override(false);
        let rows = vec![
            FindRow {
                address: "192.168.1.1".to_string(),
                outcome: Ok(ReceiverResponse::new(json!({"status": "found"}))),
            },
            FindRow {
                address: "172.16.0.1".to_string(),
                outcome: Err("connection refused".to_string()),
            },
        ];

        let output = TableOutput::new().format_find_results(&rows);

        assert!(output.contains("192.168.1.1"));
        assert!(output.contains("172.16.0.1"));
        assert!(output.contains("connection refused"));
        assert!(output.contains("Summary: 1 found, 0 error replies, 1 unreachable"));
    }

    #[test]
    fn test_error_reply_is_not_counted_unreachable() {
        colored::control::set_override(false);
        let rows = vec![FindRow {
            address: "10.0.0.1".to_string(),
            outcome: Ok(ReceiverResponse::new(json!({"status": "error", "message": "busy"}))),
        }];

        let output = TableOutput::new().format_find_results(&rows);

        assert!(output.contains("ERROR"));
        assert!(output.contains("Summary: 0 found, 1 error replies, 0 unreachable"));
    }

    #[test]
    fn test_empty_results() {
        assert_eq!(TableOutput::new().format_find_results(&[]), "No receivers probed.");
    }
}
