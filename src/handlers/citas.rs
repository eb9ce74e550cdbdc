use serde_json::Value;
use tracing::{info, warn};

use crate::error::{ApiError, PipelineError};
use crate::excel::SheetSource;
use crate::models::record::Record;
use crate::models::responses::{CITA_CREATED_MESSAGE, CitaCreatedResponse};

/// Loads the current citas. A sheet that cannot be downloaded or read
/// yields an empty list; only an internal failure is an error.
pub async fn get_citas(source: &SheetSource) -> Result<Vec<Record>, ApiError> {
    match source.load().await {
        Ok(citas) => Ok(citas),
        Err(e) => degrade(e),
    }
}

fn degrade(e: PipelineError) -> Result<Vec<Record>, ApiError> {
    if e.degrades_to_empty() {
        warn!(kind = e.kind(), error = %e, "spreadsheet unavailable, serving no citas");
        Ok(Vec::new())
    } else {
        Err(e.into())
    }
}

/// Looks up a cita by its 1-based position in the sheet.
pub async fn get_cita(source: &SheetSource, id: &str) -> Result<Record, ApiError> {
    let not_found = || ApiError::NotFound(format!("Cita {id} no encontrada"));

    let position = id
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .ok_or_else(not_found)?;

    get_citas(source)
        .await?
        .into_iter()
        .nth(position)
        .ok_or_else(not_found)
}

/// Acknowledges a cita without storing it.
pub fn create_cita(cita: Value) -> CitaCreatedResponse {
    info!(%cita, "received cita");

    CitaCreatedResponse {
        success: true,
        message: CITA_CREATED_MESSAGE,
        cita,
    }
}
