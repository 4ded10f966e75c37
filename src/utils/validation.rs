//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos de las
//! solicitudes entrantes. La tolerancia del motor de desglose no aplica
//! aquí: lo que el usuario envía en un formulario sí se valida.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use uuid::Uuid;
use validator::ValidationError;

lazy_static! {
    // Códigos de crédito del sistema legado: CR- seguido de 4 a 10 dígitos
    static ref CODIGO_CREDITO: Regex = Regex::new(r"^CR-\d{4,10}$").unwrap();
}

/// Validar y convertir string a UUID
pub fn validate_uuid(value: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(value).map_err(|_| {
        let mut error = ValidationError::new("uuid");
        error.add_param("value".into(), &value.to_string());
        error
    })
}

/// Validar formato de código de crédito
pub fn validate_codigo_credito(value: &str) -> Result<(), ValidationError> {
    if !CODIGO_CREDITO.is_match(value.trim()) {
        let mut error = ValidationError::new("codigo_credito");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"CR-<digits>".to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar y convertir string a fecha
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un monto sea no negativo
pub fn validate_monto<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value < T::zero() {
        let mut error = ValidationError::new("monto_no_negativo");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}
