use crate::models::credito::Credito;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct CreditoRepository {
    pool: PgPool,
}

impl CreditoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_codigo(&self, codigo: &str) -> Result<Option<Credito>, AppError> {
        let credito = sqlx::query_as::<_, Credito>(
            "SELECT id, codigo, cotizacion_id, datos, creado_en FROM creditos WHERE codigo = $1",
        )
        .bind(codigo)
        .fetch_optional(&self.pool)
        .await?;

        Ok(credito)
    }
}
