use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::cotizacion_controller::CotizacionController;
use crate::dto::cotizacion_dto::CotizacionResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_cotizacion_router() -> Router<AppState> {
    Router::new().route("/:id", get(get_cotizacion))
}

async fn get_cotizacion(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CotizacionResponse>, AppError> {
    let controller = CotizacionController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}
