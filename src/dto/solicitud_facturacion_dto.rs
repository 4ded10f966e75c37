use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;
use validator::Validate;

// Request para crear una solicitud de facturación. Los montos son el payload
// aplanado que generan las pantallas de facturación; todos opcionales salvo
// el código de crédito.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CrearSolicitudRequest {
    #[validate(custom = "crate::utils::validation::validate_codigo_credito")]
    pub codigo_credito: String,

    pub cotizacion_id: Option<Uuid>,

    #[validate(range(min = 0))]
    pub soat: Option<i64>,
    #[validate(range(min = 0))]
    pub matricula: Option<i64>,
    #[validate(range(min = 0))]
    pub impuestos: Option<i64>,

    #[validate(range(min = 0))]
    pub valor_moto_neto: Option<i64>,
    #[validate(range(min = 0))]
    pub valor_moto_iva: Option<i64>,
    #[validate(range(min = 0))]
    pub valor_moto_bruto: Option<i64>,

    #[validate(range(min = 0))]
    pub accesorios: Option<i64>,

    #[validate(range(min = 0))]
    pub descuento_autorizado: Option<i64>,
    #[validate(range(min = 0))]
    pub saldo_contraentrega: Option<i64>,

    pub observaciones: Option<String>,
}

// Response de solicitud de facturación
#[derive(Debug, Serialize)]
pub struct SolicitudFacturacionResponse {
    pub id: Uuid,
    pub codigo_credito: String,
    pub cotizacion_id: Option<Uuid>,
    pub creado_en: DateTime<Utc>,
    pub datos: Value,
}
