//! Repositorios de acceso a datos
//!
//! Cada repositorio trae filas de payload JSONB sin interpretar su
//! contenido; los registros se fetchean de forma independiente entre sí.

pub mod cotizacion_repository;
pub mod credito_repository;
pub mod solicitud_facturacion_repository;
