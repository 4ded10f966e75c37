use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::pricing::CreditFields;

// Response de crédito: payload crudo más el resumen normalizado
#[derive(Debug, Serialize)]
pub struct CreditoResponse {
    pub id: Uuid,
    pub codigo: String,
    pub cotizacion_id: Option<Uuid>,
    pub creado_en: DateTime<Utc>,
    pub datos: Value,
    pub resumen: CreditFields,
}
