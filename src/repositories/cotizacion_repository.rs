use crate::models::cotizacion::Cotizacion;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;

pub struct CotizacionRepository {
    pool: PgPool,
}

impl CotizacionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Cotizacion>, AppError> {
        let cotizacion = sqlx::query_as::<_, Cotizacion>(
            "SELECT id, datos, creado_en FROM cotizaciones WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(cotizacion)
    }
}
