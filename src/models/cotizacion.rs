//! Modelo de Cotización
//!
//! Mapea la tabla `cotizaciones`: una propuesta de precio con dos variantes
//! de producto (A/B) guardada como payload JSONB del formulario legado.

use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct Cotizacion {
    pub id: Uuid,
    pub datos: sqlx::types::Json<Value>,
    pub creado_en: DateTime<Utc>,
}

impl Cotizacion {
    /// Payload crudo tal como lo guardó el formulario
    pub fn payload(&self) -> &Value {
        &self.datos.0
    }
}
