//! Controlador del desglose de costos
//!
//! Trae los tres registros de origen y la tasa de IVA de forma concurrente
//! e invoca el motor. Cada fetch es independiente: que falte la cotización o
//! la solicitud no impide derivar el desglose con lo que haya; solo el
//! crédito es obligatorio porque es la llave del flujo.

use tracing::warn;
use uuid::Uuid;

use crate::dto::desglose_dto::DesgloseResponse;
use crate::pricing::derive_breakdown;
use crate::repositories::cotizacion_repository::CotizacionRepository;
use crate::repositories::credito_repository::CreditoRepository;
use crate::repositories::solicitud_facturacion_repository::SolicitudFacturacionRepository;
use crate::services::TasaIvaService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct DesgloseController {
    state: AppState,
}

impl DesgloseController {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub async fn por_credito(
        &self,
        codigo: &str,
        cotizacion_pinned: Option<Uuid>,
    ) -> Result<DesgloseResponse, AppError> {
        let creditos = CreditoRepository::new(self.state.pool.clone());
        let credito = creditos
            .find_by_codigo(codigo)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Crédito {} no encontrado", codigo)))?;

        // El query param permite fijar una cotización distinta a la enlazada
        let cotizacion_id = cotizacion_pinned.or(credito.cotizacion_id);

        let cotizaciones = CotizacionRepository::new(self.state.pool.clone());
        let solicitudes = SolicitudFacturacionRepository::new(self.state.pool.clone());
        let tasa_service = TasaIvaService::new(
            self.state.http_client.clone(),
            self.state.config.tasa_iva_url.clone(),
            self.state.redis.clone(),
            self.state.config.tasa_iva_cache_ttl,
        );

        let cotizacion_fut = async {
            match cotizacion_id {
                Some(id) => cotizaciones.find_by_id(id).await,
                None => Ok(None),
            }
        };
        let (cotizacion, solicitud, tasa) = tokio::join!(
            cotizacion_fut,
            solicitudes.find_latest_by_credito(codigo),
            tasa_service.tasa_vigente(),
        );

        // Los registros secundarios degradan a ausentes: el motor tolera
        // que falten
        let cotizacion = cotizacion.unwrap_or_else(|e| {
            warn!("⚠️ Cotización no disponible para {}: {}", codigo, e);
            None
        });
        let solicitud = solicitud.unwrap_or_else(|e| {
            warn!("⚠️ Solicitud no disponible para {}: {}", codigo, e);
            None
        });

        let desglose = derive_breakdown(
            cotizacion.as_ref().map(|c| c.payload()),
            Some(credito.payload()),
            solicitud.as_ref().map(|s| s.payload()),
            tasa,
        );

        Ok(DesgloseResponse::from_desglose(credito.codigo, &desglose))
    }
}
