use uuid::Uuid;

use crate::dto::cotizacion_dto::CotizacionResponse;
use crate::pricing::QuoteFields;
use crate::repositories::cotizacion_repository::CotizacionRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct CotizacionController {
    repository: CotizacionRepository,
}

impl CotizacionController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CotizacionRepository::new(pool),
        }
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<CotizacionResponse, AppError> {
        let cotizacion = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Cotización {} no encontrada", id)))?;

        let resumen = QuoteFields::from_raw(Some(cotizacion.payload()));

        Ok(CotizacionResponse {
            id: cotizacion.id,
            creado_en: cotizacion.creado_en,
            datos: cotizacion.datos.0.clone(),
            resumen,
        })
    }
}
