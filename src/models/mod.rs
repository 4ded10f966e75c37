//! Modelos del sistema
//!
//! Los registros del back-office vienen del sistema legado de formularios,
//! que guarda cada documento como payload JSONB (`datos`). Los modelos
//! mapean esas filas sin interpretar el payload; la interpretación vive en
//! `pricing::normalizer`.

pub mod cotizacion;
pub mod credito;
pub mod solicitud_facturacion;
