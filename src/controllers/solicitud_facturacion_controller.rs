use validator::Validate;

use crate::dto::solicitud_facturacion_dto::{CrearSolicitudRequest, SolicitudFacturacionResponse};
use crate::dto::ApiResponse;
use crate::repositories::solicitud_facturacion_repository::SolicitudFacturacionRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct SolicitudFacturacionController {
    repository: SolicitudFacturacionRepository,
}

impl SolicitudFacturacionController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: SolicitudFacturacionRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CrearSolicitudRequest,
    ) -> Result<ApiResponse<SolicitudFacturacionResponse>, AppError> {
        request.validate()?;

        // El payload aplanado se guarda tal cual; el motor lo relee con la
        // misma tolerancia que a los registros legados
        let datos = serde_json::to_value(&request)
            .map_err(|e| AppError::Internal(format!("Error serializando solicitud: {}", e)))?;

        let solicitud = self
            .repository
            .create(request.codigo_credito, request.cotizacion_id, datos)
            .await?;

        let response = SolicitudFacturacionResponse {
            id: solicitud.id,
            codigo_credito: solicitud.codigo_credito,
            cotizacion_id: solicitud.cotizacion_id,
            creado_en: solicitud.creado_en,
            datos: solicitud.datos.0,
        };

        Ok(ApiResponse::success_with_message(
            response,
            "Solicitud de facturación creada exitosamente".to_string(),
        ))
    }

    pub async fn ultima_por_credito(
        &self,
        codigo: &str,
    ) -> Result<SolicitudFacturacionResponse, AppError> {
        let solicitud = self
            .repository
            .find_latest_by_credito(codigo)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("No hay solicitudes para el crédito {}", codigo))
            })?;

        Ok(SolicitudFacturacionResponse {
            id: solicitud.id,
            codigo_credito: solicitud.codigo_credito,
            cotizacion_id: solicitud.cotizacion_id,
            creado_en: solicitud.creado_en,
            datos: solicitud.datos.0,
        })
    }
}
