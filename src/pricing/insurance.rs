//! Agregación de seguros
//!
//! La cotización guarda los seguros dos veces: una lista serializada de
//! items `{id, name, type, value}` y un escalar "otros seguros". Algunos
//! registros traen los mismos valores en ambos lados, otros traen montos
//! complementarios. La regla de de-duplicación: la lista subsume al escalar
//! solo cuando lo domina (lista >= otros); si el escalar es mayor, se asume
//! que cubre un concepto distinto y se suman. Regla heredada del sistema
//! anterior, pendiente de confirmación del negocio.

use serde_json::Value;
use tracing::debug;

use super::normalizer::coerce_amount;

/// Suma los `value` numéricos de la lista serializada; una lista ilegible
/// contribuye 0, nunca es un error.
fn sumar_lista(seguros_raw: Option<&str>) -> i64 {
    let Some(raw) = seguros_raw else { return 0 };

    let parsed: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            debug!("Lista de seguros ilegible, contribuye 0: {}", e);
            return 0;
        }
    };

    match parsed {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.get("value").and_then(coerce_amount))
            .sum(),
        _ => 0,
    }
}

/// Total combinado de seguros de una variante.
///
/// Ausente solo cuando ni la lista ni el escalar aportan un valor positivo.
pub fn aggregate_insurance(seguros_raw: Option<&str>, otros: Option<i64>) -> Option<i64> {
    let lista = sumar_lista(seguros_raw);
    let otros = otros.unwrap_or(0);

    match (lista > 0, otros > 0) {
        (true, true) => {
            if lista >= otros {
                Some(lista)
            } else {
                Some(lista + otros)
            }
        }
        (true, false) => Some(lista),
        (false, true) => Some(otros),
        (false, false) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lista_domina_al_escalar() {
        let raw = r#"[{"id":1,"name":"Vida","type":"anual","value":120000},
                      {"id":2,"name":"Todo riesgo","type":"anual","value":80000}]"#;
        assert_eq!(aggregate_insurance(Some(raw), Some(150_000)), Some(200_000));
    }

    #[test]
    fn test_escalar_mayor_se_suma() {
        let raw = r#"[{"id":1,"name":"Vida","type":"anual","value":100000}]"#;
        assert_eq!(aggregate_insurance(Some(raw), Some(150_000)), Some(250_000));
    }

    #[test]
    fn test_solo_lista() {
        let raw = r#"[{"id":1,"value":200000}]"#;
        assert_eq!(aggregate_insurance(Some(raw), None), Some(200_000));
        assert_eq!(aggregate_insurance(Some(raw), Some(0)), Some(200_000));
    }

    #[test]
    fn test_solo_escalar() {
        assert_eq!(aggregate_insurance(None, Some(150_000)), Some(150_000));
        assert_eq!(aggregate_insurance(Some("[]"), Some(150_000)), Some(150_000));
    }

    #[test]
    fn test_ambos_vacios_es_ausente() {
        assert_eq!(aggregate_insurance(None, None), None);
        assert_eq!(aggregate_insurance(Some("[]"), Some(0)), None);
    }

    #[test]
    fn test_lista_malformada_contribuye_cero() {
        assert_eq!(aggregate_insurance(Some("{not valid"), Some(150_000)), Some(150_000));
        assert_eq!(aggregate_insurance(Some("{not valid"), None), None);
    }

    #[test]
    fn test_items_no_numericos_se_ignoran() {
        let raw = r#"[{"id":1,"value":"120000"},
                      {"id":2,"value":"sin costo"},
                      {"id":3,"value":null},
                      {"id":4}]"#;
        assert_eq!(aggregate_insurance(Some(raw), None), Some(120_000));
    }

    #[test]
    fn test_lista_que_no_es_array() {
        assert_eq!(aggregate_insurance(Some(r#"{"value":99}"#), None), None);
    }
}
