use crate::dto::credito_dto::CreditoResponse;
use crate::pricing::CreditFields;
use crate::repositories::credito_repository::CreditoRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct CreditoController {
    repository: CreditoRepository,
}

impl CreditoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CreditoRepository::new(pool),
        }
    }

    pub async fn get_by_codigo(&self, codigo: &str) -> Result<CreditoResponse, AppError> {
        let credito = self
            .repository
            .find_by_codigo(codigo)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Crédito {} no encontrado", codigo)))?;

        let resumen = CreditFields::from_raw(Some(credito.payload()));

        Ok(CreditoResponse {
            id: credito.id,
            codigo: credito.codigo,
            cotizacion_id: credito.cotizacion_id,
            creado_en: credito.creado_en,
            datos: credito.datos.0,
            resumen,
        })
    }
}
