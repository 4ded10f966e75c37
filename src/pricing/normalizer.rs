//! Normalización de registros de origen
//!
//! Los registros llegan como documentos JSON sueltos (payloads legados de
//! formularios), con montos a veces numéricos, a veces strings y a veces
//! vacíos. Este módulo los convierte a structs con todos los campos
//! opcionales. La coerción es tolerante: nunca lanza errores; lo que no se
//! puede interpretar queda ausente.
//!
//! Un cero legítimo es `Some(0)` y se distingue de un valor ausente (`None`);
//! las cadenas de fallback deciden después cuál candidato saltar.

use serde::Serialize;
use serde_json::Value;

/// Coerción tolerante de un valor JSON a pesos enteros.
///
/// - Números enteros pasan directo; flotantes finitos se redondean
///   (mitad lejos de cero). NaN/infinito quedan ausentes.
/// - Strings se recortan y se parsean como número; `""` y texto no numérico
///   quedan ausentes.
/// - `null`, booleanos, arrays y objetos quedan ausentes.
pub fn coerce_amount(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i)
            } else {
                n.as_f64().and_then(round_finite)
            }
        }
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            s.parse::<f64>().ok().and_then(round_finite)
        }
        _ => None,
    }
}

fn round_finite(f: f64) -> Option<i64> {
    if f.is_finite() && f.abs() < i64::MAX as f64 {
        Some(f.round() as i64)
    } else {
        None
    }
}

/// Coerción tolerante a texto: strings no vacíos (recortados) y números.
pub fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                None
            } else {
                Some(s.to_string())
            }
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn amount(raw: Option<&Value>, key: &str) -> Option<i64> {
    raw.and_then(|v| v.get(key)).and_then(coerce_amount)
}

fn text(raw: Option<&Value>, key: &str) -> Option<String> {
    raw.and_then(|v| v.get(key)).and_then(coerce_string)
}

/// La lista de seguros viene serializada como string en los payloads nuevos,
/// pero algunos registros viejos la guardan como array ya parseado.
fn serialized_list(raw: Option<&Value>, key: &str) -> Option<String> {
    match raw.and_then(|v| v.get(key)) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        Some(v @ Value::Array(_)) => Some(v.to_string()),
        _ => None,
    }
}

/// Campos de una variante de producto dentro de la cotización (sufijo `_a` o
/// `_b` en el payload).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VariantFields {
    pub marca: Option<String>,
    pub linea: Option<String>,
    pub modelo: Option<String>,
    pub precio_base: Option<i64>,
    pub precio_documentos: Option<i64>,
    pub descuento: Option<i64>,
    pub accesorios: Option<i64>,
    pub adicionales: [Option<i64>; 5],
    pub total_adicionales: Option<i64>,
    pub otros_seguros: Option<i64>,
    pub seguros_raw: Option<String>,
    pub soat: Option<i64>,
    pub matricula: Option<i64>,
    pub impuestos: Option<i64>,
    pub precio_total: Option<i64>,
}

impl VariantFields {
    fn from_raw(raw: Option<&Value>, sufijo: &str) -> Self {
        let k = |base: &str| format!("{}_{}", base, sufijo);
        Self {
            marca: text(raw, &k("marca")),
            linea: text(raw, &k("linea")),
            modelo: text(raw, &k("modelo")),
            precio_base: amount(raw, &k("precio_base")),
            precio_documentos: amount(raw, &k("precio_documentos")),
            descuento: amount(raw, &k("descuento")),
            accesorios: amount(raw, &k("accesorios")),
            adicionales: [
                amount(raw, &k("adicional1")),
                amount(raw, &k("adicional2")),
                amount(raw, &k("adicional3")),
                amount(raw, &k("adicional4")),
                amount(raw, &k("adicional5")),
            ],
            total_adicionales: amount(raw, &k("total_adicionales")),
            otros_seguros: amount(raw, &k("otros_seguros")),
            seguros_raw: serialized_list(raw, &k("seguros")),
            soat: amount(raw, &k("soat")),
            matricula: amount(raw, &k("matricula")),
            impuestos: amount(raw, &k("impuestos")),
            precio_total: amount(raw, &k("precio_total")),
        }
    }

    /// Una variante cuenta como "poblada" si tiene algún campo núcleo:
    /// marca, línea, precio base o precio total.
    pub fn tiene_datos(&self) -> bool {
        self.marca.is_some()
            || self.linea.is_some()
            || self.precio_base.is_some()
            || self.precio_total.is_some()
    }
}

/// Cotización normalizada: identidad del cliente y las dos variantes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuoteFields {
    pub cliente_nombre: Option<String>,
    pub cliente_documento: Option<String>,
    pub variante_a: VariantFields,
    pub variante_b: VariantFields,
}

impl QuoteFields {
    pub fn from_raw(raw: Option<&Value>) -> Self {
        let raw = raw.filter(|v| v.is_object());
        Self {
            cliente_nombre: text(raw, "cliente_nombre"),
            cliente_documento: text(raw, "cliente_documento"),
            variante_a: VariantFields::from_raw(raw, "a"),
            variante_b: VariantFields::from_raw(raw, "b"),
        }
    }
}

/// Crédito normalizado.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreditFields {
    pub codigo: Option<String>,
    pub producto: Option<String>,
    pub numero_motor: Option<String>,
    pub numero_chasis: Option<String>,
    pub color: Option<String>,
    pub asesor: Option<String>,
    pub fecha_creacion: Option<String>,
    pub valor_producto: Option<i64>,
    pub cuota_inicial: Option<i64>,
    pub total_accesorios: Option<i64>,
    pub valor_seguro: Option<i64>,
}

impl CreditFields {
    pub fn from_raw(raw: Option<&Value>) -> Self {
        let raw = raw.filter(|v| v.is_object());
        Self {
            codigo: text(raw, "codigo_credito"),
            producto: text(raw, "producto"),
            numero_motor: text(raw, "numero_motor"),
            numero_chasis: text(raw, "numero_chasis"),
            color: text(raw, "color"),
            asesor: text(raw, "asesor"),
            fecha_creacion: text(raw, "fecha_creacion"),
            valor_producto: amount(raw, "valor_producto"),
            cuota_inicial: amount(raw, "cuota_inicial"),
            total_accesorios: amount(raw, "total_accesorios"),
            valor_seguro: amount(raw, "valor_seguro"),
        }
    }
}

/// Solicitud de facturación normalizada. Sus totales, cuando existen,
/// tienen prioridad sobre lo derivable de cotización/crédito.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvoicingFields {
    pub soat: Option<i64>,
    pub matricula: Option<i64>,
    pub impuestos: Option<i64>,
    pub valor_moto_neto: Option<i64>,
    pub valor_moto_iva: Option<i64>,
    pub valor_moto_bruto: Option<i64>,
    pub accesorios: Option<i64>,
    pub descuento_autorizado: Option<i64>,
    pub saldo_contraentrega: Option<i64>,
}

impl InvoicingFields {
    pub fn from_raw(raw: Option<&Value>) -> Self {
        let raw = raw.filter(|v| v.is_object());
        Self {
            soat: amount(raw, "soat"),
            matricula: amount(raw, "matricula"),
            impuestos: amount(raw, "impuestos"),
            valor_moto_neto: amount(raw, "valor_moto_neto"),
            valor_moto_iva: amount(raw, "valor_moto_iva"),
            valor_moto_bruto: amount(raw, "valor_moto_bruto"),
            accesorios: amount(raw, "accesorios"),
            descuento_autorizado: amount(raw, "descuento_autorizado"),
            saldo_contraentrega: amount(raw, "saldo_contraentrega"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_amount_numeros() {
        assert_eq!(coerce_amount(&json!(150000)), Some(150000));
        assert_eq!(coerce_amount(&json!(150000.49)), Some(150000));
        assert_eq!(coerce_amount(&json!(-80000)), Some(-80000));
        assert_eq!(coerce_amount(&json!(0)), Some(0));
    }

    #[test]
    fn test_coerce_amount_strings() {
        assert_eq!(coerce_amount(&json!("150000")), Some(150000));
        assert_eq!(coerce_amount(&json!("  4700000  ")), Some(4700000));
        assert_eq!(coerce_amount(&json!("1234.56")), Some(1235));
        assert_eq!(coerce_amount(&json!("0")), Some(0));
    }

    #[test]
    fn test_coerce_amount_ausentes() {
        assert_eq!(coerce_amount(&json!("")), None);
        assert_eq!(coerce_amount(&json!("   ")), None);
        assert_eq!(coerce_amount(&json!("no aplica")), None);
        assert_eq!(coerce_amount(&json!(null)), None);
        assert_eq!(coerce_amount(&json!(true)), None);
        assert_eq!(coerce_amount(&json!([1, 2])), None);
        assert_eq!(coerce_amount(&json!({"v": 1})), None);
    }

    #[test]
    fn test_cero_es_presente() {
        // Un cero real no es lo mismo que un campo vacío
        let raw = json!({ "accesorios_a": 0, "descuento_a": "" });
        let quote = QuoteFields::from_raw(Some(&raw));
        assert_eq!(quote.variante_a.accesorios, Some(0));
        assert_eq!(quote.variante_a.descuento, None);
    }

    #[test]
    fn test_quote_from_raw_completo() {
        let raw = json!({
            "cliente_nombre": "Maria Lopez",
            "marca_a": "YAMAHA",
            "linea_a": "FZ 2.0",
            "precio_base_a": "7500000",
            "soat_a": 150000,
            "precio_total_a": 9000000,
            "marca_b": "HONDA",
            "precio_total_b": "8500000"
        });
        let quote = QuoteFields::from_raw(Some(&raw));
        assert_eq!(quote.cliente_nombre.as_deref(), Some("Maria Lopez"));
        assert_eq!(quote.variante_a.marca.as_deref(), Some("YAMAHA"));
        assert_eq!(quote.variante_a.precio_base, Some(7500000));
        assert_eq!(quote.variante_a.soat, Some(150000));
        assert_eq!(quote.variante_b.marca.as_deref(), Some("HONDA"));
        assert_eq!(quote.variante_b.precio_total, Some(8500000));
        assert!(quote.variante_a.tiene_datos());
        assert!(quote.variante_b.tiene_datos());
    }

    #[test]
    fn test_registro_nulo_o_malformado() {
        let vacio = QuoteFields::from_raw(None);
        assert_eq!(vacio, QuoteFields::default());

        // Un payload que no es objeto se trata igual que uno ausente
        let no_objeto = QuoteFields::from_raw(Some(&json!("basura")));
        assert_eq!(no_objeto, QuoteFields::default());
    }

    #[test]
    fn test_linea_numerica_se_coerce_a_texto() {
        let raw = json!({ "linea_a": 2024 });
        let quote = QuoteFields::from_raw(Some(&raw));
        assert_eq!(quote.variante_a.linea.as_deref(), Some("2024"));
    }

    #[test]
    fn test_seguros_raw_acepta_string_y_array() {
        let raw = json!({
            "seguros_a": "[{\"id\":1,\"value\":200000}]",
            "seguros_b": [{"id": 2, "value": 90000}]
        });
        let quote = QuoteFields::from_raw(Some(&raw));
        assert!(quote.variante_a.seguros_raw.is_some());
        assert!(quote.variante_b.seguros_raw.is_some());
    }

    #[test]
    fn test_credit_from_raw() {
        let raw = json!({
            "codigo_credito": "CR-00123",
            "producto": "YAMAHA FZ 2.0",
            "valor_producto": "9000000",
            "valor_seguro": 350000
        });
        let credit = CreditFields::from_raw(Some(&raw));
        assert_eq!(credit.codigo.as_deref(), Some("CR-00123"));
        assert_eq!(credit.valor_producto, Some(9000000));
        assert_eq!(credit.valor_seguro, Some(350000));
        assert_eq!(credit.cuota_inicial, None);
    }
}
