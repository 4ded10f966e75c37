use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::pricing::QuoteFields;

// Response de cotización: payload crudo más el resumen normalizado
#[derive(Debug, Serialize)]
pub struct CotizacionResponse {
    pub id: Uuid,
    pub creado_en: DateTime<Utc>,
    pub datos: Value,
    pub resumen: QuoteFields,
}
