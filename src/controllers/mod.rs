//! Controladores
//!
//! Orquestan repositorios y servicios externos y arman los DTOs de
//! respuesta. Los handlers de `routes` son envoltorios delgados sobre esto.

pub mod cotizacion_controller;
pub mod credito_controller;
pub mod desglose_controller;
pub mod solicitud_facturacion_controller;
