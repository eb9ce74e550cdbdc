use reqwest::Client;
use tracing::debug;

use crate::error::PipelineError;

/// Downloads the spreadsheet export and returns the raw body.
pub async fn fetch_workbook(client: &Client, url: &str) -> Result<Vec<u8>, PipelineError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(PipelineError::Status(status));
    }

    let body = response.bytes().await?;
    debug!(bytes = body.len(), "downloaded spreadsheet");

    Ok(body.to_vec())
}
