use axum::http::StatusCode;
use serde_json::json;

use moto_backoffice::dto::solicitud_facturacion_dto::CrearSolicitudRequest;
use moto_backoffice::utils::validation::validate_codigo_credito;
use validator::Validate;

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app().await;

    let response = app
        .oneshot_get("/health")
        .await
        .expect("health debe responder");

    assert_eq!(response.0, StatusCode::OK);

    let body: serde_json::Value = serde_json::from_slice(&response.1).unwrap();
    assert_eq!(body["service"], "moto-backoffice");
    assert_eq!(body["status"], "healthy");
}

#[test]
fn test_solicitud_request_valida() {
    let request: CrearSolicitudRequest = serde_json::from_value(json!({
        "codigo_credito": "CR-00481",
        "soat": 150000,
        "matricula": 80000,
        "valor_moto_bruto": 4700000
    }))
    .unwrap();

    assert!(request.validate().is_ok());
}

#[test]
fn test_solicitud_request_codigo_invalido() {
    let request: CrearSolicitudRequest = serde_json::from_value(json!({
        "codigo_credito": "481",
        "soat": 150000
    }))
    .unwrap();

    assert!(request.validate().is_err());
}

#[test]
fn test_solicitud_request_monto_negativo() {
    let request: CrearSolicitudRequest = serde_json::from_value(json!({
        "codigo_credito": "CR-00481",
        "descuento_autorizado": -50000
    }))
    .unwrap();

    assert!(request.validate().is_err());
}

#[test]
fn test_codigo_credito_formato() {
    assert!(validate_codigo_credito("CR-00481").is_ok());
    assert!(validate_codigo_credito("cr-00481").is_err());
    assert!(validate_codigo_credito("CR00481").is_err());
}

// Helper para construir una app de test con el mismo endpoint de health que
// el servidor real (las rutas con estado requieren Postgres/Redis vivos y se
// prueban contra un entorno desplegado)
struct TestApp {
    router: axum::Router,
}

impl TestApp {
    async fn oneshot_get(
        self,
        uri: &str,
    ) -> anyhow::Result<(StatusCode, axum::body::Bytes)> {
        use tower::util::ServiceExt;

        let request = axum::http::Request::builder()
            .uri(uri)
            .body(axum::body::Body::empty())?;

        let response = self.router.oneshot(request).await?;
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        Ok((status, body))
    }
}

async fn create_test_app() -> TestApp {
    let router = axum::Router::new().route(
        "/health",
        axum::routing::get(|| async {
            axum::Json(json!({
                "service": "moto-backoffice",
                "status": "healthy"
            }))
        }),
    );

    TestApp { router }
}
