use serde::Serialize;
use serde_json::Value;

use crate::models::record::Record;

pub const SERVICE_NAME: &str = "api-citas-excel";
pub const CITA_CREATED_MESSAGE: &str = "Cita agendada exitosamente";

#[derive(Debug, Serialize)]
pub struct CitasResponse {
    pub success: bool,
    pub total_citas: usize,
    pub citas: Vec<Record>,
}

impl CitasResponse {
    pub fn new(citas: Vec<Record>) -> Self {
        Self {
            success: true,
            total_citas: citas.len(),
            citas,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CitaResponse {
    pub success: bool,
    pub cita: Record,
}

/// Acknowledgment for a submitted cita; `cita` is the body as received.
#[derive(Debug, Serialize)]
pub struct CitaCreatedResponse {
    pub success: bool,
    pub message: &'static str,
    pub cita: Value,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}
