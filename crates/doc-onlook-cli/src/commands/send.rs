//! Send command implementation.

use doc_onlook_core::DeviceClient;
use tracing::info;

use crate::cli::SendArgs;
use crate::error::CliError;
use crate::output::{get_formatter, SentFile};
use crate::payload::load_file;

/// Run the send command
pub async fn run_send(
    args: SendArgs,
    client: &DeviceClient,
    json: bool,
    strict: bool,
) -> Result<(), CliError> {
    let formatter = get_formatter(json);

    let file = load_file(&args.file, args.name, args.file_type).await?;
    info!(
        name = %file.name,
        file_type = %file.file_type,
        encoded_bytes = file.data.len(),
        address = %args.address,
        "sending file"
    );

    let summary = SentFile::from(&file);
    let response = client.send_file(file, &args.address).await?;

    println!(
        "{}",
        formatter.format_send_result(&args.address, &summary, &response)
    );

    match response.application_error() {
        Some(message) if strict => Err(CliError::Receiver {
            address: args.address,
            message,
        }),
        _ => Ok(()),
    }
}
