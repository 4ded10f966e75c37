//! Modelo de Crédito
//!
//! Mapea la tabla `creditos`: la instancia financiada de una cotización
//! comprada. El código de crédito es la llave de negocio (`CR-...`).

use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct Credito {
    pub id: Uuid,
    pub codigo: String,
    pub cotizacion_id: Option<Uuid>,
    pub datos: sqlx::types::Json<Value>,
    pub creado_en: DateTime<Utc>,
}

impl Credito {
    pub fn payload(&self) -> &Value {
        &self.datos.0
    }
}
