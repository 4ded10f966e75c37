use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::controllers::credito_controller::CreditoController;
use crate::controllers::desglose_controller::DesgloseController;
use crate::dto::credito_dto::CreditoResponse;
use crate::dto::desglose_dto::DesgloseResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_credito_router() -> Router<AppState> {
    Router::new()
        .route("/:codigo", get(get_credito))
        .route("/:codigo/desglose", get(get_desglose))
}

#[derive(Debug, Deserialize)]
struct DesgloseQuery {
    // Permite fijar una cotización distinta a la enlazada al crédito
    cotizacion: Option<Uuid>,
}

async fn get_credito(
    State(state): State<AppState>,
    Path(codigo): Path<String>,
) -> Result<Json<CreditoResponse>, AppError> {
    let controller = CreditoController::new(state.pool.clone());
    let response = controller.get_by_codigo(&codigo).await?;
    Ok(Json(response))
}

async fn get_desglose(
    State(state): State<AppState>,
    Path(codigo): Path<String>,
    Query(query): Query<DesgloseQuery>,
) -> Result<Json<DesgloseResponse>, AppError> {
    let controller = DesgloseController::new(state);
    let response = controller.por_credito(&codigo, query.cotizacion).await?;
    Ok(Json(response))
}
