pub mod constants;
pub mod fetcher;
pub mod labels;
pub mod normalizer;

use actix_web::web;
use reqwest::Client;
use tracing::debug;

use crate::config::SourceConfig;
use crate::error::PipelineError;
use crate::models::record::Record;

/// The spreadsheet the service reads from, plus the client used to fetch it.
///
/// Holds no data between calls: every `load` downloads and parses again.
#[derive(Debug, Clone)]
pub struct SheetSource {
    client: Client,
    url: String,
}

impl SheetSource {
    pub fn new(config: &SourceConfig) -> Self {
        Self {
            client: Client::new(),
            url: config.excel_url.clone(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch, parse and normalize the first sheet.
    pub async fn load(&self) -> Result<Vec<Record>, PipelineError> {
        let bytes = fetcher::fetch_workbook(&self.client, &self.url).await?;

        // calamine is synchronous and CPU bound
        let records = web::block(move || normalizer::normalize_workbook(bytes)).await??;
        debug!(records = records.len(), "normalized spreadsheet");

        Ok(records)
    }
}
