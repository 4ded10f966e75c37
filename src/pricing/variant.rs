//! Selección de la variante financiada
//!
//! La cotización ofrece dos variantes de producto (A y B) pero el crédito
//! solo guarda una descripción libre del producto. Aquí se decide cuál
//! variante fue la financiada, comparando texto en minúsculas.
//!
//! Invariante: A se evalúa antes que B en cada paso. Los consumidores del
//! desglose dependen de ese orden, no debe cambiarse.

use serde::Serialize;

use super::normalizer::{CreditFields, QuoteFields, VariantFields};

/// Variante de producto dentro de la cotización.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Variante {
    A,
    B,
}

/// Descripción "marca línea" en minúsculas; `None` si no hay ninguna parte.
fn descripcion(v: &VariantFields) -> Option<String> {
    let partes: Vec<&str> = [v.marca.as_deref(), v.linea.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if partes.is_empty() {
        None
    } else {
        Some(partes.join(" ").to_lowercase())
    }
}

fn contiene(referencia: &str, patron: Option<&str>) -> bool {
    match patron {
        // Un patrón vacío haría match con cualquier cosa
        Some(p) if !p.is_empty() => referencia.contains(p),
        _ => false,
    }
}

/// Decide cuál variante (A o B) corresponde a la moto financiada.
///
/// Prioridad fija:
/// 1. El producto del crédito contiene "marca línea" de A, luego de B.
/// 2. El producto contiene la línea sola de A, luego de B.
/// 3. Exactamente una variante tiene datos núcleo → esa.
/// 4. Ninguna señal → `None` y los campos por variante quedan ausentes.
pub fn select_variant(quote: &QuoteFields, credit: &CreditFields) -> Option<Variante> {
    let referencia = credit
        .producto
        .as_deref()
        .map(|p| p.trim().to_lowercase())
        .unwrap_or_default();

    if !referencia.is_empty() {
        let desc_a = descripcion(&quote.variante_a);
        let desc_b = descripcion(&quote.variante_b);
        if contiene(&referencia, desc_a.as_deref()) {
            return Some(Variante::A);
        }
        if contiene(&referencia, desc_b.as_deref()) {
            return Some(Variante::B);
        }

        let linea_a = quote.variante_a.linea.as_deref().map(str::to_lowercase);
        let linea_b = quote.variante_b.linea.as_deref().map(str::to_lowercase);
        if contiene(&referencia, linea_a.as_deref()) {
            return Some(Variante::A);
        }
        if contiene(&referencia, linea_b.as_deref()) {
            return Some(Variante::B);
        }
    }

    match (
        quote.variante_a.tiene_datos(),
        quote.variante_b.tiene_datos(),
    ) {
        (true, false) => Some(Variante::A),
        (false, true) => Some(Variante::B),
        _ => None,
    }
}
