//! Modelo de Solicitud de Facturación
//!
//! Mapea la tabla `solicitudes_facturacion`: la petición de facturar un
//! crédito, con totales autorizados que priman sobre los derivables de la
//! cotización. Puede no existir todavía para un crédito dado.

use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct SolicitudFacturacion {
    pub id: Uuid,
    pub codigo_credito: String,
    pub cotizacion_id: Option<Uuid>,
    pub datos: sqlx::types::Json<Value>,
    pub creado_en: DateTime<Utc>,
}

impl SolicitudFacturacion {
    pub fn payload(&self) -> &Value {
        &self.datos.0
    }
}
