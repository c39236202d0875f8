//! Find command implementation.

use doc_onlook_core::DeviceClient;
use tracing::info;

use crate::cli::FindArgs;
use crate::error::CliError;
use crate::output::{get_formatter, FindRow};

/// Run the find command
pub async fn run_find(
    args: FindArgs,
    client: &DeviceClient,
    json: bool,
    strict: bool,
) -> Result<(), CliError> {
    let formatter = get_formatter(json);

    let rows = probe(&args, client).await;

    println!("{}", formatter.format_find_results(&rows));

    check_rows(&rows, strict)
}

/// Probe every address and return one row each, in the order given.
async fn probe(args: &FindArgs, client: &DeviceClient) -> Vec<FindRow> {
    info!(count = args.addresses.len(), "probing receivers");
    let results = client.find_devices(&args.addresses, args.concurrency).await;

    let mut rows: Vec<FindRow> = results
        .into_iter()
        .map(|(address, result)| FindRow {
            address,
            outcome: result.map_err(|e| e.to_string()),
        })
        .collect();
    // Completion order is arbitrary; report in the order given.
    rows.sort_by_key(|row| {
        args.addresses
            .iter()
            .position(|a| a == &row.address)
            .unwrap_or(usize::MAX)
    });

    rows
}

/// Map probe rows to the command's exit status.
///
/// Application-level error replies only count as failures under `--strict`.
fn check_rows(rows: &[FindRow], strict: bool) -> Result<(), CliError> {
    let failed = rows
        .iter()
        .filter(|row| match &row.outcome {
            Ok(response) => strict && response.application_error().is_some(),
            Err(_) => true,
        })
        .count();

    if failed == 0 {
        Ok(())
    } else {
        Err(CliError::PartialFailure {
            succeeded: rows.len() - failed,
            failed,
        })
    }
}
