pub mod cotizacion_routes;
pub mod credito_routes;
pub mod solicitud_facturacion_routes;
