//! Resolución de valores por cadena de candidatos
//!
//! Cada campo monetario derivado se define por una lista explícita de
//! fuentes en orden de prioridad (solicitud → variante seleccionada →
//! variante alterna → crédito). Esta es la única implementación del
//! fallback; las listas por campo viven en `breakdown`.

/// Retorna el primer candidato presente, o ausente si ninguno lo está.
///
/// Un `Some(0)` es presente y corta la cadena: cero es dato, no ausencia.
pub fn resolve_first(candidatos: &[Option<i64>]) -> Option<i64> {
    candidatos.iter().find_map(|c| *c)
}
