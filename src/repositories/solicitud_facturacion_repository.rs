use crate::models::solicitud_facturacion::SolicitudFacturacion;
use crate::utils::errors::AppError;
use chrono::Utc;
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

pub struct SolicitudFacturacionRepository {
    pool: PgPool,
}

impl SolicitudFacturacionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// La solicitud más reciente para un crédito; puede no existir todavía.
    pub async fn find_latest_by_credito(
        &self,
        codigo_credito: &str,
    ) -> Result<Option<SolicitudFacturacion>, AppError> {
        let solicitud = sqlx::query_as::<_, SolicitudFacturacion>(
            r#"
            SELECT id, codigo_credito, cotizacion_id, datos, creado_en
            FROM solicitudes_facturacion
            WHERE codigo_credito = $1
            ORDER BY creado_en DESC
            LIMIT 1
            "#,
        )
        .bind(codigo_credito)
        .fetch_optional(&self.pool)
        .await?;

        Ok(solicitud)
    }

    pub async fn create(
        &self,
        codigo_credito: String,
        cotizacion_id: Option<Uuid>,
        datos: Value,
    ) -> Result<SolicitudFacturacion, AppError> {
        let solicitud = sqlx::query_as::<_, SolicitudFacturacion>(
            r#"
            INSERT INTO solicitudes_facturacion (id, codigo_credito, cotizacion_id, datos, creado_en)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, codigo_credito, cotizacion_id, datos, creado_en
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(codigo_credito)
        .bind(cotizacion_id)
        .bind(sqlx::types::Json(datos))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(solicitud)
    }
}
