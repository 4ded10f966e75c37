use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::controllers::solicitud_facturacion_controller::SolicitudFacturacionController;
use crate::dto::solicitud_facturacion_dto::{CrearSolicitudRequest, SolicitudFacturacionResponse};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_solicitud_facturacion_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_solicitud))
        .route("/ultima", get(get_ultima))
}

#[derive(Debug, Deserialize)]
struct UltimaQuery {
    credito: String,
}

async fn create_solicitud(
    State(state): State<AppState>,
    Json(request): Json<CrearSolicitudRequest>,
) -> Result<Json<ApiResponse<SolicitudFacturacionResponse>>, AppError> {
    let controller = SolicitudFacturacionController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_ultima(
    State(state): State<AppState>,
    Query(query): Query<UltimaQuery>,
) -> Result<Json<SolicitudFacturacionResponse>, AppError> {
    let controller = SolicitudFacturacionController::new(state.pool.clone());
    let response = controller.ultima_por_credito(&query.credito).await?;
    Ok(Json(response))
}
